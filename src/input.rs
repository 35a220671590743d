//! Pointer input mapping.
//!
//! Raw pointer pixels go through two stages: first to normalized device
//! coordinates in [-1, 1] on both axes, then through [`normalize`] onto the
//! target motion band. The clamp in `normalize` is the one correctness
//! safeguard of the whole input path: drags that leave the viewport must
//! not push the airplane outside its designed band.

use cgmath::Vector2;
use winit::dpi::PhysicalPosition;

/// Clamp `v` into `[vmin, vmax]`, then map it linearly onto `[tmin, tmax]`.
///
/// Clamping happens before interpolation, so the result never leaves
/// `[tmin, tmax]` even for wildly out-of-range inputs.
pub fn normalize(v: f32, vmin: f32, vmax: f32, tmin: f32, tmax: f32) -> f32 {
    let nv = v.max(vmin).min(vmax);
    let pc = (nv - vmin) / (vmax - vmin);
    tmin + pc * (tmax - tmin)
}

/// Convert a pointer position in physical pixels to normalized device
/// coordinates.
///
/// The y axis is inverted: screen-space y grows downward while the mapped
/// control axis grows upward, so the top edge of the viewport maps to
/// `ny = 1`. Callers pass the viewport size current at the time of the
/// event, so a resize is reflected by the very next pointer move.
pub fn pointer_to_ndc(position: PhysicalPosition<f64>, width: u32, height: u32) -> Vector2<f32> {
    let nx = -1.0 + 2.0 * (position.x as f32 / width as f32);
    let ny = 1.0 - 2.0 * (position.y as f32 / height as f32);
    Vector2::new(nx, ny)
}
