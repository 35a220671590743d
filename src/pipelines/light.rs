//! Scene lighting: a hemisphere gradient plus one shadow-casting sun.
//!
//! The hemisphere light tints surfaces by how much they face up, the sun is
//! a directional light whose parallel rays cast shadows through a depth-only
//! pass, and a linear fog band fades distant geometry into the background
//! tint. All parameters are fixed at startup; the uniform buffer is written
//! once.

use cgmath::{EuclideanSpace, InnerSpace, Matrix4, Point3, Vector3, ortho};
use wgpu::util::DeviceExt;

use crate::camera::OPENGL_TO_WGPU_MATRIX;
use crate::data_structures::texture::Texture;
use crate::objects::palette;

/// Where the sun sits; all of its rays arrive parallel from this direction.
const SUN_POSITION: [f32; 3] = [150.0, 350.0, 350.0];
const SUN_COLOR: u32 = 0xffffff;
const SUN_INTENSITY: f32 = 0.9;
const HEMISPHERE_SKY: u32 = 0xaaaaaa;
const HEMISPHERE_GROUND: u32 = 0x000000;
const HEMISPHERE_INTENSITY: f32 = 0.9;
/// Linear fog band, same tint as the clear color.
const FOG_NEAR: f32 = 100.0;
const FOG_FAR: f32 = 950.0;

/// Extents of the sun's orthographic shadow frustum and shadow map size.
pub struct ShadowSettings {
    pub extent: f32,
    pub near: f32,
    pub far: f32,
    pub map_size: u32,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            extent: 400.0,
            near: 1.0,
            far: 1000.0,
            map_size: 2048,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    sun_view_proj: [[f32; 4]; 4],
    sky_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, padding fields
    // keep the Rust layout in step with the WGSL struct
    _padding0: f32,
    ground_color: [f32; 3],
    hemisphere_intensity: f32,
    sun_direction: [f32; 3],
    sun_intensity: f32,
    sun_color: [f32; 3],
    _padding1: f32,
    fog_color: [f32; 3],
    fog_near: f32,
    fog_far: f32,
    _padding2: [f32; 3],
}

impl LightUniform {
    fn new(shadow: &ShadowSettings) -> Self {
        let position = Vector3::from(SUN_POSITION);
        let view = Matrix4::look_at_rh(
            Point3::from_vec(position),
            Point3::origin(),
            Vector3::unit_y(),
        );
        let projection = OPENGL_TO_WGPU_MATRIX
            * ortho(
                -shadow.extent,
                shadow.extent,
                -shadow.extent,
                shadow.extent,
                shadow.near,
                shadow.far,
            );
        Self {
            sun_view_proj: (projection * view).into(),
            sky_color: palette::rgb(HEMISPHERE_SKY),
            _padding0: 0.0,
            ground_color: palette::rgb(HEMISPHERE_GROUND),
            hemisphere_intensity: HEMISPHERE_INTENSITY,
            sun_direction: (-position.normalize()).into(),
            sun_intensity: SUN_INTENSITY,
            sun_color: palette::rgb(SUN_COLOR),
            _padding1: 0.0,
            fog_color: palette::rgb(palette::HAZE),
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
            _padding2: [0.0; 3],
        }
    }
}

pub struct LightResources {
    pub uniform: LightUniform,
    pub buffer: wgpu::Buffer,
    /// Full binding for the main pass: uniform, shadow map and comparison sampler.
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
    /// Uniform-only binding for the shadow pass, where the shadow map itself
    /// is the render target and must not be bound.
    pub uniform_bind_group: wgpu::BindGroup,
    pub uniform_bind_group_layout: wgpu::BindGroupLayout,
    pub shadow_map: Texture,
}

impl LightResources {
    pub fn new(device: &wgpu::Device) -> Self {
        let settings = ShadowSettings::default();
        let uniform = LightUniform::new(&settings);
        let buffer = mk_buffer(device, uniform);
        let shadow_map = Texture::create_depth_texture(
            device,
            [settings.map_size, settings.map_size],
            "shadow_map",
        );

        let uniform_bind_group_layout = mk_uniform_bind_group_layout(device);
        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &uniform_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("light_uniform_bind_group"),
        });

        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&shadow_map.view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(shadow_map.sampler.as_ref().unwrap()),
                },
            ],
            label: Some("light_bind_group"),
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
            uniform_bind_group,
            uniform_bind_group_layout,
            shadow_map,
        }
    }
}

pub fn mk_buffer(device: &wgpu::Device, light_uniform: LightUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Buffer"),
        contents: bytemuck::cast_slice(&[light_uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_uniform_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("light_uniform_bind_group_layout"),
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    sample_type: wgpu::TextureSampleType::Depth,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    multisampled: false,
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Comparison),
                count: None,
            },
        ],
        label: Some("light_bind_group_layout"),
    })
}
