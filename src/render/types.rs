//! GPU-Datentypen für Quads, Overlay-Linien und Kontrollpunkte.

use crate::shared::OverlayStyle;
use bytemuck::{Pod, Zeroable};
use eframe::wgpu;

/// Gemeinsamer Kontext für die Sub-Renderer im `prepare`-Schritt.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a wgpu::Queue,
    /// Farben und Punktgröße
    pub style: &'a OverlayStyle,
}

/// Vertex für ein texturiertes Quad
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position im lokalen Quad-Raum [-1, 1]
    pub position: [f32; 2],
    /// Texturkoordinate (v = 0 ist die obere Bildkante)
    pub uv: [f32; 2],
}

impl QuadVertex {
    /// Zwei Dreiecke über [-1, 1]², obere Kante auf v = 0.
    pub const UNIT_QUAD: [QuadVertex; 6] = [
        QuadVertex {
            position: [-1.0, -1.0],
            uv: [0.0, 1.0],
        },
        QuadVertex {
            position: [1.0, -1.0],
            uv: [1.0, 1.0],
        },
        QuadVertex {
            position: [1.0, 1.0],
            uv: [1.0, 0.0],
        },
        QuadVertex {
            position: [-1.0, -1.0],
            uv: [0.0, 1.0],
        },
        QuadVertex {
            position: [1.0, 1.0],
            uv: [1.0, 0.0],
        },
        QuadVertex {
            position: [-1.0, 1.0],
            uv: [0.0, 0.0],
        },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Vertex für Overlay-Linien (Kurve und Kontrollpolygon).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    /// Position in Szenen-Koordinaten
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl LineVertex {
    /// Erstellt einen neuen LineVertex.
    pub fn new(position: glam::Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Ecke eines Punkt-Quadrats
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CornerVertex {
    /// Ecke in [-1, 1]²
    pub corner: [f32; 2],
}

impl CornerVertex {
    /// Zwei Dreiecke für ein Quadrat.
    pub const SQUARE: [CornerVertex; 6] = [
        CornerVertex {
            corner: [-1.0, -1.0],
        },
        CornerVertex {
            corner: [1.0, -1.0],
        },
        CornerVertex {
            corner: [1.0, 1.0],
        },
        CornerVertex {
            corner: [-1.0, -1.0],
        },
        CornerVertex {
            corner: [1.0, 1.0],
        },
        CornerVertex {
            corner: [-1.0, 1.0],
        },
    ];

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<CornerVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x2,
            }],
        }
    }
}

/// Instanz-Daten für einen Kontrollpunkt
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointInstance {
    /// Mittelpunkt in Szenen-Koordinaten
    pub center: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl PointInstance {
    /// Beschreibt das Instanz-Layout für wgpu.
    pub const fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform für ein Textur-Quad (Modell-Matrix)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct QuadUniforms {
    /// Modell-Matrix (4x4, spaltenweise)
    pub model: [[f32; 4]; 4],
}

impl QuadUniforms {
    /// Erstellt Uniforms aus einer glam-Matrix.
    pub fn from_mat4(model: glam::Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }
}

/// Uniform für die Kontrollpunkte (halbe Kantenlänge in NDC)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct PointUniforms {
    /// Halbe Kantenlänge (x, y) in NDC
    pub half_extent: [f32; 2],
    _padding: [f32; 2],
}

impl PointUniforms {
    /// Erstellt Uniforms für die gegebene halbe Kantenlänge.
    pub fn new(half_extent: glam::Vec2) -> Self {
        Self {
            half_extent: half_extent.to_array(),
            _padding: [0.0; 2],
        }
    }
}

/// Standard-Primitive-State (Culling aus, gefüllte Polygone).
pub(crate) fn primitive_state(topology: wgpu::PrimitiveTopology) -> wgpu::PrimitiveState {
    wgpu::PrimitiveState {
        topology,
        strip_index_format: None,
        front_face: wgpu::FrontFace::Ccw,
        cull_mode: None,
        unclipped_depth: false,
        polygon_mode: wgpu::PolygonMode::Fill,
        conservative: false,
    }
}

/// Multisample-State passend zum egui-Render-Pass.
pub(crate) fn window_multisample() -> wgpu::MultisampleState {
    wgpu::MultisampleState {
        count: WINDOW_SAMPLE_COUNT,
        mask: !0,
        alpha_to_coverage_enabled: false,
    }
}

/// Sample-Anzahl des Fenster-Render-Pass (muss mit `NativeOptions::multisampling` übereinstimmen).
pub const WINDOW_SAMPLE_COUNT: u32 = 4;

/// Baut die Linien-Vertices der Kurve.
pub fn curve_vertices(curve: &crate::core::BezierCurve, color: [f32; 4]) -> Vec<LineVertex> {
    curve
        .samples()
        .iter()
        .map(|&sample| LineVertex::new(sample, color))
        .collect()
}

/// Baut die Linien-Vertices des Kontrollpolygons P0→P1→P2→P3.
pub fn polygon_vertices(points: &crate::core::ControlPoints, color: [f32; 4]) -> Vec<LineVertex> {
    points
        .as_array()
        .iter()
        .map(|&point| LineVertex::new(point, color))
        .collect()
}

/// Baut die Punkt-Instanzen; der gegriffene Punkt erhält die Auswahlfarbe.
pub fn point_instances(
    points: &crate::core::ControlPoints,
    selected: Option<usize>,
    style: &OverlayStyle,
) -> Vec<PointInstance> {
    points
        .as_array()
        .iter()
        .enumerate()
        .map(|(index, point)| PointInstance {
            center: point.to_array(),
            color: if selected == Some(index) {
                style.point_color_selected
            } else {
                style.point_color
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BezierCurve, ControlPoints, CURVE_SAMPLE_COUNT};

    #[test]
    fn test_curve_vertices_cover_all_samples() {
        let curve = BezierCurve::default();
        let vertices = curve_vertices(&curve, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(vertices.len(), CURVE_SAMPLE_COUNT);
        assert_eq!(vertices[0].position, [-0.8, -1.6]);
        assert_eq!(vertices[150].position, [1.8, 0.1]);
    }

    #[test]
    fn test_polygon_follows_point_order() {
        let points = ControlPoints::initial();
        let vertices = polygon_vertices(&points, [0.0; 4]);
        let positions: Vec<[f32; 2]> = vertices.iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![[-0.8, -1.6], [-0.45, 0.7], [-0.05, 0.0], [1.8, 0.1]]
        );
    }

    #[test]
    fn test_selected_point_gets_distinct_color() {
        let style = crate::shared::DemoOptions::default().overlay_style();
        let instances = point_instances(&ControlPoints::initial(), Some(2), &style);
        assert_eq!(instances.len(), 4);
        assert_eq!(instances[2].color, style.point_color_selected);
        assert_eq!(instances[0].color, style.point_color);
        assert_ne!(style.point_color, style.point_color_selected);
    }

    #[test]
    fn test_unit_quad_maps_top_edge_to_v0() {
        for vertex in QuadVertex::UNIT_QUAD {
            let expected_v = if vertex.position[1] > 0.0 { 0.0 } else { 1.0 };
            assert_eq!(vertex.uv[1], expected_v);
        }
    }

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<QuadUniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<PointUniforms>() % 16, 0);
    }
}
