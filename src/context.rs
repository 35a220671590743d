//! Central GPU and window context.
//!
//! One [`Context`] is constructed at startup and passed by reference to
//! everything that renders; there is no global mutable state. It owns the
//! surface, device and queue, the fixed camera, the light resources and the
//! three render pipelines.

use std::sync::Arc;

use anyhow::Result;
use winit::window::Window;

use crate::{
    camera::{self, CameraResources, Projection},
    data_structures::texture,
    objects::palette,
    pipelines::{basic, light::LightResources, shadow, transparent},
};

pub struct Pipelines {
    pub basic: wgpu::RenderPipeline,
    pub transparent: wgpu::RenderPipeline,
    pub shadow: wgpu::RenderPipeline,
}

pub struct Context {
    pub window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub light: LightResources,
    pub pipelines: Pipelines,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        log::info!("device and queue");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                // WebGL doesn't support all of wgpu's features, so if
                // we're building for the web we'll have to disable some.
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        log::info!("surface");
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // Fixed vantage point above the sea, looking straight down -z. Only
        // the projection ever changes after this, and only on resize.
        let camera = camera::Camera::new((0.0, 100.0, 200.0), cgmath::Deg(-90.0), cgmath::Deg(0.0));
        let projection =
            camera::Projection::new(config.width, config.height, cgmath::Deg(60.0), 1.0, 10000.0);
        let camera = CameraResources::new(&device, camera, &projection);

        let light = LightResources::new(&device);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        let pipelines = Pipelines {
            basic: basic::mk_basic_pipeline(
                &device,
                &config,
                &camera.bind_group_layout,
                &light.bind_group_layout,
            ),
            transparent: transparent::mk_transparent_pipeline(
                &device,
                &config,
                &camera.bind_group_layout,
                &light.bind_group_layout,
            ),
            shadow: shadow::mk_shadow_pipeline(&device, &light.uniform_bind_group_layout),
        };

        let [r, g, b] = palette::rgb(palette::HAZE);
        let clear_colour = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };

        Ok(Self {
            window,
            depth_texture,
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            light,
            pipelines,
            clear_colour,
        })
    }
}
