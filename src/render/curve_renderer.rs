//! Overlay-Renderer für Kurve und Kontrollpolygon (Line-Strips).

use super::types::{
    curve_vertices, polygon_vertices, primitive_state, window_multisample, LineVertex,
    RenderContext,
};
use crate::core::{BezierCurve, ControlPoints, CONTROL_POINT_COUNT, CURVE_SAMPLE_COUNT};
use eframe::wgpu;

/// Zeichnet die abgetastete Kurve und das Kontrollpolygon.
///
/// Die Vertex-Buffer haben feste Größe (151 bzw. 4 Vertices) und werden nur
/// neu beschrieben, wenn sich die Kurven-Revision ändert.
pub struct CurveRenderer {
    pipeline: wgpu::RenderPipeline,
    curve_buffer: wgpu::Buffer,
    polygon_buffer: wgpu::Buffer,
    uploaded: Option<(u64, [f32; 4], [f32; 4])>,
}

impl CurveRenderer {
    /// Erstellt Pipeline und Buffer für das Fenster-Format.
    pub fn new(
        device: &wgpu::Device,
        shader: &wgpu::ShaderModule,
        target_format: wgpu::TextureFormat,
    ) -> Self {
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Line Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Line Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_line"),
                buffers: &[LineVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_line"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive_state(wgpu::PrimitiveTopology::LineStrip),
            depth_stencil: None,
            multisample: window_multisample(),
            multiview: None,
            cache: None,
        });

        let line_buffer = |label: &str, count: usize| {
            device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(label),
                size: (count * std::mem::size_of::<LineVertex>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        };

        Self {
            pipeline,
            curve_buffer: line_buffer("Curve Vertex Buffer", CURVE_SAMPLE_COUNT),
            polygon_buffer: line_buffer("Control Polygon Vertex Buffer", CONTROL_POINT_COUNT),
            uploaded: None,
        }
    }

    /// Lädt Kurve und Polygon hoch, sofern sich Revision oder Farben geändert haben.
    pub fn upload(
        &mut self,
        ctx: &RenderContext,
        curve: &BezierCurve,
        control_points: &ControlPoints,
        revision: u64,
    ) {
        let key = (revision, ctx.style.curve_color, ctx.style.polygon_color);
        if self.uploaded == Some(key) {
            return;
        }

        let curve = curve_vertices(curve, ctx.style.curve_color);
        let polygon = polygon_vertices(control_points, ctx.style.polygon_color);
        ctx.queue
            .write_buffer(&self.curve_buffer, 0, bytemuck::cast_slice(&curve));
        ctx.queue
            .write_buffer(&self.polygon_buffer, 0, bytemuck::cast_slice(&polygon));
        self.uploaded = Some(key);

        log::trace!("CurveRenderer: Revision {} hochgeladen", revision);
    }

    /// Zeichnet Kurve und Polygon in den aktuellen Render-Pass.
    pub fn render(&self, render_pass: &mut wgpu::RenderPass<'static>) {
        if self.uploaded.is_none() {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_vertex_buffer(0, self.curve_buffer.slice(..));
        render_pass.draw(0..CURVE_SAMPLE_COUNT as u32, 0..1);
        render_pass.set_vertex_buffer(0, self.polygon_buffer.slice(..));
        render_pass.draw(0..CONTROL_POINT_COUNT as u32, 0..1);
    }
}
