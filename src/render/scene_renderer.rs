//! Szenen-Renderer: Hintergrund und Sprite in das Offscreen-Target.

use super::offscreen::OffscreenTarget;
use super::texture::{create_texture_from_image, GpuTexture};
use super::types::{primitive_state, QuadUniforms, QuadVertex, RenderContext};
use crate::core::{SceneImages, SpritePose};
use eframe::wgpu;
use glam::Mat4;
use wgpu::util::DeviceExt;

/// Texture samt fertiger Bind-Group (group(1)).
struct BoundTexture {
    _texture: GpuTexture,
    bind_group: wgpu::BindGroup,
}

/// Uniform-Buffer samt Bind-Group (group(0)) für ein Quad.
struct QuadSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl QuadSlot {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&[QuadUniforms::from_mat4(Mat4::IDENTITY)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            uniform_buffer,
            bind_group,
        }
    }
}

/// Zeichnet Hintergrund-Quad (Identität) und Sprite-Quad in das Offscreen-Target.
pub struct SceneRenderer {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    background_slot: QuadSlot,
    sprite_slot: QuadSlot,
    background: Option<BoundTexture>,
    frames: Vec<Option<BoundTexture>>,
}

impl SceneRenderer {
    /// Erstellt Pipeline und lädt alle dekodierten Bilder als Texturen hoch.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        shader: &wgpu::ShaderModule,
        target_format: wgpu::TextureFormat,
        images: &SceneImages,
    ) -> Self {
        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Quad Uniform Layout"),
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
        });

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Quad Texture Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Quad Pipeline Layout"),
            bind_group_layouts: &[&uniform_layout, &texture_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Quad Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_quad"),
                buffers: &[QuadVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_quad"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: target_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: primitive_state(wgpu::PrimitiveTopology::TriangleList),
            depth_stencil: None,
            // Offscreen-Target ist nicht multisampled
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Vertex Buffer"),
            contents: bytemuck::cast_slice(&QuadVertex::UNIT_QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let background_slot = QuadSlot::new(device, &uniform_layout, "Background Uniforms");
        let sprite_slot = QuadSlot::new(device, &uniform_layout, "Sprite Uniforms");

        let bind = |image: &image::DynamicImage, label: &str| {
            let texture = create_texture_from_image(device, queue, image, target_format, label);
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &texture_layout,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&texture.view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(&texture.sampler),
                    },
                ],
            });
            BoundTexture {
                _texture: texture,
                bind_group,
            }
        };

        let background = images
            .background
            .as_ref()
            .map(|image| bind(image, "Background Texture"));
        let frames = images
            .frames
            .iter()
            .enumerate()
            .map(|(index, image)| {
                image
                    .as_ref()
                    .map(|image| bind(image, &format!("Sprite Frame {}", index + 1)))
            })
            .collect::<Vec<_>>();

        log::info!(
            "SceneRenderer: {} Frame-Texturen, Hintergrund {}",
            frames.iter().flatten().count(),
            if background.is_some() { "geladen" } else { "fehlt" }
        );

        Self {
            pipeline,
            vertex_buffer,
            background_slot,
            sprite_slot,
            background,
            frames,
        }
    }

    /// Kodiert den Offscreen-Pass: Clear, Hintergrund, Sprite.
    ///
    /// Fehlende Texturen werden übersprungen.
    pub fn encode(
        &self,
        ctx: &RenderContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &OffscreenTarget,
        sprite: &SpritePose,
    ) {
        let Some(view) = target.view() else {
            return;
        };

        ctx.queue.write_buffer(
            &self.background_slot.uniform_buffer,
            0,
            bytemuck::cast_slice(&[QuadUniforms::from_mat4(Mat4::IDENTITY)]),
        );
        ctx.queue.write_buffer(
            &self.sprite_slot.uniform_buffer,
            0,
            bytemuck::cast_slice(&[QuadUniforms::from_mat4(sprite.transform)]),
        );

        let [r, g, b, a] = ctx.style.clear_color;
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Offscreen Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

        if let Some(background) = &self.background {
            pass.set_bind_group(0, &self.background_slot.bind_group, &[]);
            pass.set_bind_group(1, &background.bind_group, &[]);
            pass.draw(0..6, 0..1);
        }

        match self.frames.get(sprite.frame_index).and_then(Option::as_ref) {
            Some(frame) => {
                pass.set_bind_group(0, &self.sprite_slot.bind_group, &[]);
                pass.set_bind_group(1, &frame.bind_group, &[]);
                pass.draw(0..6, 0..1);
            }
            None => log::trace!("Sprite-Frame {} fehlt, übersprungen", sprite.frame_index),
        }
    }
}
