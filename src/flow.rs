//! Application event loop and frame scheduling.
//!
//! The scheduler has two states: idle, before the window and GPU context
//! exist, and a steady update -> render loop afterwards. Each
//! `RedrawRequested` advances the scene by one step, renders it and requests
//! the next redraw, so the cadence stays synced to the display instead of
//! running uncapped. There is no terminal state; the loop runs until the
//! window closes.
//!
//! Everything runs on the winit event loop thread. Pointer events and
//! frames interleave there, so a pointer move delivered between two frames
//! is visible at the next update step, never mid-frame.

use std::sync::Arc;

use instant::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::Window,
};

use crate::{
    context::Context, data_structures::texture::Texture, input, render::SceneRenderer,
    scene::Scene,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// GPU context, scene and renderer, bundled once initialization finished.
pub struct AppState {
    pub(crate) ctx: Context,
    scene: Scene,
    renderer: SceneRenderer,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>) -> Self {
        let ctx = match Context::new(window).await {
            Ok(ctx) => ctx,
            Err(e) => panic!(
                "App initialization failed. Cannot create the main context: {}",
                e
            ),
        };
        let scene = Scene::new();
        let renderer = SceneRenderer::new(&ctx.device, &scene.graph);
        Self {
            ctx,
            scene,
            renderer,
            is_surface_configured: false,
        }
    }

    /// Track a viewport resize: surface, projection and depth buffer follow
    /// the new size synchronously, before the next render.
    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.ctx.config.width = width;
            self.ctx.config.height = height;
            self.is_surface_configured = true;
            self.ctx.projection.resize(width, height);
            self.ctx
                .surface
                .configure(&self.ctx.device, &self.ctx.config);
            self.ctx.depth_texture = Texture::create_depth_texture(
                &self.ctx.device,
                [self.ctx.config.width, self.ctx.config.height],
                "depth_texture",
            );
        }
    }

    /// Convert the pointer position against the current viewport size and
    /// hand it to the animation state.
    fn pointer_moved(&mut self, position: winit::dpi::PhysicalPosition<f64>) {
        self.scene.animation.pointer =
            input::pointer_to_ndc(position, self.ctx.config.width, self.ctx.config.height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Schedule the next iteration; presentation keeps it display-synced.
        self.ctx.window.request_redraw();

        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        // The camera uniform follows the projection, whose aspect ratio may
        // have changed since the last frame.
        self.ctx
            .camera
            .uniform
            .update_view_proj(&self.ctx.camera.camera, &self.ctx.projection);
        self.ctx.queue.write_buffer(
            &self.ctx.camera.buffer,
            0,
            bytemuck::cast_slice(&[self.ctx.camera.uniform]),
        );

        self.renderer.prepare(&self.ctx.queue, &self.scene.graph);

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder: wgpu::CommandEncoder =
            self.ctx
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("Render Encoder"),
                });
        {
            let mut shadow_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Shadow Pass"),
                color_attachments: &[],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.light.shadow_map.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            shadow_pass.set_pipeline(&self.ctx.pipelines.shadow);
            shadow_pass.set_bind_group(0, &self.ctx.light.uniform_bind_group, &[]);
            self.renderer.draw_shadow_casters(&mut shadow_pass);
        }
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.ctx.clear_colour),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.ctx.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });
            render_pass.set_bind_group(0, &self.ctx.camera.bind_group, &[]);
            render_pass.set_bind_group(1, &self.ctx.light.bind_group, &[]);

            render_pass.set_pipeline(&self.ctx.pipelines.basic);
            self.renderer.draw_opaque(&mut render_pass);

            // The sea is semi-transparent and draws after everything opaque.
            render_pass.set_pipeline(&self.ctx.pipelines.transparent);
            self.renderer.draw_transparent(&mut render_pass);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}

pub(crate) enum AppEvent {
    #[allow(dead_code)]
    Initialized(AppState),
}

pub struct App {
    #[cfg(not(target_arch = "wasm32"))]
    async_runtime: tokio::runtime::Runtime,
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    proxy: winit::event_loop::EventLoopProxy<AppEvent>,
    state: Option<AppState>,
    last_frame: Instant,
}

impl App {
    fn new(event_loop: &EventLoop<AppEvent>) -> Self {
        let proxy = event_loop.create_proxy();
        #[cfg(not(target_arch = "wasm32"))]
        let async_runtime = tokio::runtime::Runtime::new().unwrap();
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            async_runtime,
            proxy,
            state: None,
            last_frame: Instant::now(),
        }
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        #[allow(unused_mut)]
        let mut window_attributes = Window::default_attributes();

        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            use winit::platform::web::WindowAttributesExtWebSys;

            const CANVAS_ID: &str = "canvas";

            let window = wgpu::web_sys::window().unwrap_throw();
            let document = window.document().unwrap_throw();
            let canvas = document.get_element_by_id(CANVAS_ID).unwrap_throw();
            let html_canvas_element = canvas.unchecked_into();
            window_attributes = window_attributes.with_canvas(Some(html_canvas_element));
        }

        let window = Arc::new(event_loop.create_window(window_attributes).unwrap());

        #[cfg(not(target_arch = "wasm32"))]
        {
            let mut state = self.async_runtime.block_on(AppState::new(window));
            let size = state.ctx.window.inner_size();
            state.resize(size.width, size.height);
            state.ctx.window.request_redraw();
            self.state = Some(state);
        }

        #[cfg(target_arch = "wasm32")]
        {
            let proxy = self.proxy.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let state = AppState::new(window).await;
                assert!(proxy.send_event(AppEvent::Initialized(state)).is_ok());
            });
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::Initialized(state) => {
                // This is the message from our wasm `spawn_local`
                self.state = Some(state);

                let state = self.state.as_mut().unwrap();
                let size = state.ctx.window.inner_size();
                state.resize(size.width, size.height);
                state.ctx.window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let state = match &mut self.state {
            Some(state) => state,
            None => return,
        };

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => state.resize(size.width, size.height),
            WindowEvent::CursorMoved { position, .. } => state.pointer_moved(position),
            WindowEvent::RedrawRequested => {
                let dt = self.last_frame.elapsed();
                self.last_frame = Instant::now();
                log::trace!("frame time: {:?}", dt);

                state.scene.update();
                match state.render() {
                    Ok(_) => (),
                    // Reconfigure the surface if it's lost or outdated
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = state.ctx.window.inner_size();
                        state.resize(size.width, size.height);
                    }
                    Err(e) => {
                        log::error!("Unable to render {}", e);
                    }
                }
            }
            _ => {}
        }
    }
}

pub fn run() -> anyhow::Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = env_logger::try_init() {
            println!("Warning: Could not initialize logger: {}", e);
        };
    }

    #[cfg(target_arch = "wasm32")]
    {
        console_log::init_with_level(log::Level::Info).unwrap_throw();
    }

    let event_loop: EventLoop<AppEvent> = EventLoop::with_user_event().build()?;
    let mut app = App::new(&event_loop);
    event_loop.run_app(&mut app)?;

    Ok(())
}
