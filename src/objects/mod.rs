//! Builders for everything visible in the scene.
//!
//! Each builder assembles a small hierarchy of [`TransformNode`]s inside the
//! scene graph and hands back the ids the frame loop needs:
//!
//! - `sea` is the semi-transparent rolling cylinder below everything
//! - `sky` scatters procedurally generated clouds on a ring around the view
//! - `airplane` is the pointer-driven actor with its spinning propeller
//! - `pilot` is an optional decorative figure
//!
//! [`TransformNode`]: crate::data_structures::scene_graph::TransformNode

pub mod airplane;
pub mod pilot;
pub mod sea;
pub mod sky;

/// The scene's fixed color palette.
pub mod palette {
    pub const RED: u32 = 0xf25346;
    pub const WHITE: u32 = 0xd8d0d1;
    pub const BROWN: u32 = 0x59332e;
    pub const PINK: u32 = 0xf5986e;
    pub const BROWN_DARK: u32 = 0x23190f;
    pub const BLUE: u32 = 0x68c3c0;
    /// Background and fog tint.
    pub const HAZE: u32 = 0xf7d9aa;

    /// Expand a `0xrrggbb` color to normalized rgb components.
    pub fn rgb(hex: u32) -> [f32; 3] {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
        ]
    }
}
