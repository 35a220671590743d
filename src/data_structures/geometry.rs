//! CPU-side low-poly mesh data and materials.
//!
//! Every mesh in the scene is assembled from two primitive shapes, a cuboid
//! and a cylinder, described as unique corner positions plus triangle
//! indices. Silhouettes are shaped by a small declarative list of
//! [`VertexEdit`]s applied once at construction instead of ad hoc mutation,
//! so alternative shapes stay expressible as data. For the GPU the corner
//! mesh is expanded to per-face vertices with face normals, which is what
//! gives the scene its flat-shaded look.

use cgmath::{InnerSpace, Matrix3, Rad, Vector3};

/// Trait for types that can describe their GPU vertex buffer layout.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[derive(Clone, Copy, Debug)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A single corner displacement: move `positions[index]` along `axis` by `delta`.
#[derive(Clone, Copy, Debug)]
pub struct VertexEdit {
    pub index: usize,
    pub axis: Axis,
    pub delta: f32,
}

/// A mesh as unique corner positions plus triangle indices.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub positions: Vec<Vector3<f32>>,
    pub triangles: Vec<[u32; 3]>,
}

impl Geometry {
    /// An axis-aligned box centered on the origin.
    ///
    /// Corner order (used by [`VertexEdit`] indices): corners 0-3 lie on the
    /// +x face, corners 4-7 on the -x face:
    ///
    /// ```text
    /// 0: (+x, +y, +z)   4: (-x, +y, -z)
    /// 1: (+x, +y, -z)   5: (-x, +y, +z)
    /// 2: (+x, -y, +z)   6: (-x, -y, -z)
    /// 3: (+x, -y, -z)   7: (-x, -y, +z)
    /// ```
    pub fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let positions = vec![
            Vector3::new(hw, hh, hd),
            Vector3::new(hw, hh, -hd),
            Vector3::new(hw, -hh, hd),
            Vector3::new(hw, -hh, -hd),
            Vector3::new(-hw, hh, -hd),
            Vector3::new(-hw, hh, hd),
            Vector3::new(-hw, -hh, -hd),
            Vector3::new(-hw, -hh, hd),
        ];

        let mut geometry = Self {
            positions,
            triangles: Vec::with_capacity(12),
        };
        // One quad per face, wound counter-clockwise seen from outside.
        geometry.push_quad([0, 2, 3, 1]); // +x
        geometry.push_quad([4, 6, 7, 5]); // -x
        geometry.push_quad([0, 1, 4, 5]); // +y
        geometry.push_quad([2, 7, 6, 3]); // -y
        geometry.push_quad([5, 7, 2, 0]); // +z
        geometry.push_quad([1, 3, 6, 4]); // -z
        geometry
    }

    /// A capped cylinder along the y axis, centered on the origin.
    ///
    /// `radial_segments` faces run around the circumference and
    /// `height_segments` rows along the height; both caps are closed with a
    /// triangle fan.
    pub fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        radial_segments: u32,
        height_segments: u32,
    ) -> Self {
        assert!(
            radial_segments >= 3 && height_segments >= 1,
            "degenerate cylinder: {radial_segments} radial / {height_segments} height segments"
        );
        let mut positions = Vec::new();
        let half_height = height / 2.0;
        for ring in 0..=height_segments {
            let t = ring as f32 / height_segments as f32;
            let y = half_height - t * height;
            let radius = radius_top + t * (radius_bottom - radius_top);
            for segment in 0..radial_segments {
                let theta = segment as f32 * std::f32::consts::TAU / radial_segments as f32;
                positions.push(Vector3::new(radius * theta.cos(), y, radius * theta.sin()));
            }
        }
        let top_center = positions.len() as u32;
        positions.push(Vector3::new(0.0, half_height, 0.0));
        let bottom_center = positions.len() as u32;
        positions.push(Vector3::new(0.0, -half_height, 0.0));

        let mut geometry = Self {
            positions,
            triangles: Vec::new(),
        };
        let index = |ring: u32, segment: u32| ring * radial_segments + segment % radial_segments;
        for ring in 0..height_segments {
            for segment in 0..radial_segments {
                geometry.push_quad([
                    index(ring, segment),
                    index(ring, segment + 1),
                    index(ring + 1, segment + 1),
                    index(ring + 1, segment),
                ]);
            }
        }
        for segment in 0..radial_segments {
            geometry
                .triangles
                .push([top_center, index(0, segment + 1), index(0, segment)]);
            geometry.triangles.push([
                bottom_center,
                index(height_segments, segment),
                index(height_segments, segment + 1),
            ]);
        }
        geometry
    }

    fn push_quad(&mut self, [a, b, c, d]: [u32; 4]) {
        self.triangles.push([a, b, c]);
        self.triangles.push([a, c, d]);
    }

    /// Apply a declarative list of corner displacements.
    pub fn displace(&mut self, edits: &[VertexEdit]) {
        for edit in edits {
            assert!(
                edit.index < self.positions.len(),
                "vertex edit index {} out of bounds for {} corners",
                edit.index,
                self.positions.len()
            );
            let position = &mut self.positions[edit.index];
            match edit.axis {
                Axis::X => position.x += edit.delta,
                Axis::Y => position.y += edit.delta,
                Axis::Z => position.z += edit.delta,
            }
        }
    }

    /// Shift every corner by `offset` (e.g. to re-anchor a shape to its base).
    pub fn translate(&mut self, offset: Vector3<f32>) {
        for position in &mut self.positions {
            *position += offset;
        }
    }

    /// Rotate every corner around the x axis.
    pub fn rotate_x(&mut self, angle: Rad<f32>) {
        let rotation = Matrix3::from_angle_x(angle);
        for position in &mut self.positions {
            *position = rotation * *position;
        }
    }

    /// Expand to non-indexed per-face vertices carrying the face normal.
    pub fn flat_shaded_vertices(&self) -> Vec<MeshVertex> {
        let mut vertices = Vec::with_capacity(self.triangles.len() * 3);
        for &[a, b, c] in &self.triangles {
            let pa = self.positions[a as usize];
            let pb = self.positions[b as usize];
            let pc = self.positions[c as usize];
            let normal = (pb - pa).cross(pc - pa).normalize();
            for position in [pa, pb, pc] {
                vertices.push(MeshVertex {
                    position: position.into(),
                    normal: normal.into(),
                });
            }
        }
        vertices
    }
}

/// A flat surface color. Opacity below `1.0` routes the mesh through the
/// transparent pipeline, drawn after all opaque batches.
#[derive(Clone, Copy, Debug)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
}

impl Material {
    pub fn opaque(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    pub fn to_rgba(&self) -> [f32; 4] {
        [self.color[0], self.color[1], self.color[2], self.opacity]
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}
