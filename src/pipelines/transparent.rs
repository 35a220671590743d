use crate::{
    data_structures::{
        geometry::{MeshVertex, Vertex},
        instance::InstanceRaw,
        texture::Texture,
    },
    pipelines::basic::mk_render_pipeline,
};

/**
 * Pipeline for semi-transparent batches (the sea).
 *
 * Shares the scene shader with the basic pipeline; only the blend state
 * differs. Transparent batches are drawn after every opaque batch so the
 * blend reads a finished color buffer.
 */
pub fn mk_transparent_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    light_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout =
        device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Render Pipeline Layout"),
            bind_group_layouts: &[camera_bind_group_layout, light_bind_group_layout],
            push_constant_ranges: &[],
        });
    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Scene Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("scene.wgsl").into()),
    };
    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        Some(Texture::DEPTH_FORMAT),
        &[MeshVertex::desc(), InstanceRaw::desc()],
        shader,
    )
}
