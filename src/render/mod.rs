//! GPU-Rendering mit wgpu.
//!
//! Reihenfolge pro Frame: Offscreen-Pass (Clear, Hintergrund, Sprite) im
//! `prepare`-Schritt des egui-Callbacks, danach im egui-Render-Pass der
//! Post-Process-Blit und das Overlay (Kurve, Polygon, Punkte).

mod callback;
mod curve_renderer;
mod offscreen;
mod point_renderer;
mod post_process;
mod scene_renderer;
mod texture;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use curve_renderer::CurveRenderer;
pub(crate) use offscreen::OffscreenTarget;
pub(crate) use point_renderer::PointRenderer;
pub(crate) use post_process::PostProcessRenderer;
pub(crate) use scene_renderer::SceneRenderer;
pub use types::{LineVertex, PointInstance, WINDOW_SAMPLE_COUNT};
use types::RenderContext;

use crate::core::SceneImages;
use eframe::{egui_wgpu, wgpu};

/// Haupt-Renderer der Demo.
///
/// Verwaltet Offscreen-Target, Pipelines und Texturen; bietet
/// `new()` + `prepare()` + `paint()`.
pub struct Renderer {
    offscreen: OffscreenTarget,
    scene_renderer: SceneRenderer,
    post_process: PostProcessRenderer,
    curve_renderer: CurveRenderer,
    point_renderer: PointRenderer,
    target_ready: bool,
}

impl Renderer {
    /// Erstellt einen neuen Renderer und lädt die Bilder als Texturen hoch.
    pub fn new(render_state: &egui_wgpu::RenderState, images: &SceneImages) -> Self {
        let device = &render_state.device;
        let queue = &render_state.queue;
        let window_format = render_state.target_format;
        let color_format = texture::color_format_for(window_format);

        // Shader einmalig laden — alle Sub-Renderer teilen dasselbe ShaderModule
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Fox Run Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        log::info!(
            "Renderer: Fenster-Format {:?}, Offscreen-Format {:?}",
            window_format,
            color_format
        );

        Self {
            offscreen: OffscreenTarget::new(device, color_format),
            scene_renderer: SceneRenderer::new(device, queue, &shader, color_format, images),
            post_process: PostProcessRenderer::new(device, &shader, window_format),
            curve_renderer: CurveRenderer::new(device, &shader, window_format),
            point_renderer: PointRenderer::new(device, &shader, window_format),
            target_ready: false,
        }
    }

    /// Offscreen-Pass und Buffer-Uploads für den kommenden Frame.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        scene: &RenderScene,
    ) {
        self.target_ready =
            scene.has_drawable_target() && self.offscreen.ensure_size(device, scene.target_size_px);
        if !self.target_ready {
            log::trace!("Renderer: kein zeichenbares Target, Frame übersprungen");
            return;
        }

        let ctx = RenderContext {
            device,
            queue,
            style: &scene.style,
        };

        self.scene_renderer
            .encode(&ctx, encoder, &self.offscreen, &scene.sprite);
        self.post_process.update_source(ctx.device, &self.offscreen);

        if scene.show_overlay {
            self.curve_renderer.upload(
                &ctx,
                &scene.curve,
                &scene.control_points,
                scene.curve_revision,
            );
            self.point_renderer.upload(
                &ctx,
                &scene.control_points,
                scene.selected_point,
                scene.viewport_size,
            );
        }
    }

    /// Zeichnet Post-Process-Blit und Overlay in den egui-Render-Pass.
    pub fn paint(&self, render_pass: &mut wgpu::RenderPass<'static>, scene: &RenderScene) {
        if !self.target_ready {
            return;
        }

        // 1. Offscreen-Bild ins Fenster
        self.post_process.render(render_pass);

        // 2. Overlay ungeblendet darüber
        if scene.show_overlay {
            self.curve_renderer.render(render_pass);
            self.point_renderer.render(render_pass);
        }
    }

    /// Farbformat von Offscreen-Target und Bild-Texturen.
    pub fn offscreen_format(&self) -> wgpu::TextureFormat {
        self.offscreen.format()
    }
}
