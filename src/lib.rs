//! aviator
//!
//! A continuously animated low-poly 3D scene: an endless rolling sea, a ring
//! of procedurally generated clouds and a single airplane steered with the
//! pointer. The camera never moves; the whole scene is built once at startup
//! and mutated in place every frame. Rendering runs on wgpu with one opaque
//! and one transparent instanced pipeline plus a shadow depth pass, native
//! and WASM alike.
//!
//! High-level modules
//! - `animation`: per-frame animation state and the update rates
//! - `camera`: static camera, perspective projection and view/proj uniform
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: geometry, transforms and the scene graph
//! - `flow`: the winit application handler driving the update/render loop
//! - `input`: pointer to normalized-device-coordinate mapping
//! - `objects`: builders for the sea, the sky, the airplane and the pilot
//! - `pipelines`: render pipeline and light/shadow resource definitions
//! - `render`: instanced draw batches assembled from the scene graph
//! - `scene`: one-shot scene assembly
//!

pub mod animation;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod input;
pub mod objects;
pub mod pipelines;
pub mod render;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use winit::dpi::PhysicalPosition;
pub use winit::event::WindowEvent;
