//! Render pipeline definitions and light resources.
//!
//! - `basic` renders the opaque instanced batches
//! - `transparent` renders the semi-transparent sea after everything opaque
//! - `shadow` is the depth-only pass from the sun's point of view
//! - `light` owns the hemisphere/sun/fog uniform and the shadow map

pub mod basic;
pub mod light;
pub mod shadow;
pub mod transparent;
