//! Texture-Utilities für wgpu.

use eframe::wgpu;
use image::DynamicImage;

/// Hochgeladene Texture samt View und Sampler.
pub struct GpuTexture {
    /// Die Texture selbst (hält den Speicher am Leben)
    pub texture: wgpu::Texture,
    /// View für Bind-Groups
    pub view: wgpu::TextureView,
    /// Linearer Clamp-Sampler
    pub sampler: wgpu::Sampler,
}

/// Wählt das Texture-Format passend zum Fenster-Target.
///
/// Ist das Target sRGB, werden Bilder und Offscreen-Target ebenfalls als sRGB
/// geführt; sonst werden die Werte unverändert durchgereicht.
pub fn color_format_for(target_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if target_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Erstellt einen linearen Clamp-Sampler.
pub fn create_linear_sampler(device: &wgpu::Device, label: &str) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some(label),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}

/// Erstellt eine wgpu-Texture aus einem DynamicImage
///
/// # Parameter
/// - `device`: wgpu-Device für Texture-Erstellung
/// - `queue`: wgpu-Queue für Daten-Upload
/// - `image`: Bilddaten (wird zu RGBA8 konvertiert)
/// - `format`: Zielformat (siehe [`color_format_for`])
/// - `label`: Debug-Label für die Texture
///
/// Zeilen werden von oben nach unten hochgeladen; die Quad-UVs legen v = 0
/// auf die obere Kante, daher ist kein Zeilentausch nötig.
pub fn create_texture_from_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    image: &DynamicImage,
    format: wgpu::TextureFormat,
    label: &str,
) -> GpuTexture {
    let rgba_image = image.to_rgba8();
    let (width, height) = rgba_image.dimensions();

    log::debug!(
        "Erstelle wgpu-Texture '{}': {}x{} Pixel, {} Bytes",
        label,
        width,
        height,
        rgba_image.len()
    );

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });

    queue.write_texture(
        texture.as_image_copy(),
        &rgba_image,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = create_linear_sampler(device, &format!("{}_sampler", label));

    GpuTexture {
        texture,
        view,
        sampler,
    }
}
