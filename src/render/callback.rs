//! wgpu Custom Render Callback für egui-Integration.

use super::Renderer;
use crate::shared::RenderScene;
use eframe::{egui, egui_wgpu, wgpu};
use std::sync::{Arc, Mutex};

/// Render-Daten für den wgpu Callback
pub struct WgpuRenderData {
    /// Die Render-Szene für diesen Frame
    pub scene: RenderScene,
}

/// Custom wgpu Render Callback – kapselt die Renderer-Interaktion für egui
pub struct WgpuRenderCallback {
    /// Geteilter Renderer-Zustand (thread-safe)
    pub renderer: Arc<Mutex<Renderer>>,
    /// Render-Daten für diesen Frame
    pub render_data: WgpuRenderData,
}

impl egui_wgpu::CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &egui_wgpu::ScreenDescriptor,
        egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut egui_wgpu::CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        match self.renderer.lock() {
            Ok(mut renderer) => {
                renderer.prepare(device, queue, egui_encoder, &self.render_data.scene)
            }
            Err(_) => log::error!("Failed to lock renderer in prepare()"),
        }
        Vec::new()
    }

    fn paint<'b>(
        &'b self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &'b egui_wgpu::CallbackResources,
    ) {
        log::trace!("paint() called");
        if let Ok(renderer) = self.renderer.lock() {
            renderer.paint(render_pass, &self.render_data.scene);
        } else {
            log::error!("Failed to lock renderer");
        }
    }
}
