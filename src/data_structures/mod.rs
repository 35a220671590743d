//! Engine data structures: geometry, transforms and the scene graph.
//!
//! This module contains the core data types for scene representation:
//!
//! - `geometry` contains CPU-side low-poly meshes and declarative vertex edits
//! - `instance` holds transforms and the per-instance GPU attribute data
//! - `scene_graph` enables hierarchical scene organization
//! - `texture` contains the GPU depth/shadow texture wrapper

pub mod geometry;
pub mod instance;
pub mod scene_graph;
pub mod texture;
