//! Offscreen-Farbtarget für den Szenen-Pass.

use super::texture::create_linear_sampler;
use eframe::wgpu;

/// Offscreen-Farbtarget in physischer Viewport-Größe.
///
/// Wird neu angelegt, sobald sich die Größe ändert; `generation` zählt die
/// Neuanlagen, damit abhängige Bind-Groups erkennen, wann sie veraltet sind.
pub struct OffscreenTarget {
    format: wgpu::TextureFormat,
    size: [u32; 2],
    generation: u64,
    texture: Option<wgpu::Texture>,
    view: Option<wgpu::TextureView>,
    sampler: wgpu::Sampler,
}

impl OffscreenTarget {
    /// Erstellt ein leeres Target; der Speicher wird erst in [`Self::ensure_size`] angelegt.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        Self {
            format,
            size: [0, 0],
            generation: 0,
            texture: None,
            view: None,
            sampler: create_linear_sampler(device, "Offscreen Sampler"),
        }
    }

    /// Farbformat des Targets.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    /// Zähler der Neuanlagen.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Legt das Target bei Größenänderung neu an.
    ///
    /// Gibt `false` zurück, wenn die Größe nicht zeichenbar ist.
    pub fn ensure_size(&mut self, device: &wgpu::Device, size: [u32; 2]) -> bool {
        let max = device.limits().max_texture_dimension_2d;
        let size = [size[0].min(max), size[1].min(max)];
        if size[0] == 0 || size[1] == 0 {
            return false;
        }
        if self.texture.is_some() && self.size == size {
            return true;
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Offscreen Color Target"),
            size: wgpu::Extent3d {
                width: size[0],
                height: size[1],
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: self.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT
                | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        self.view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.texture = Some(texture);
        self.size = size;
        self.generation += 1;

        log::info!("Offscreen-Target angelegt: {}x{} Pixel", size[0], size[1]);
        true
    }

    /// View zum Rendern bzw. Sampeln, falls angelegt.
    pub fn view(&self) -> Option<&wgpu::TextureView> {
        self.view.as_ref()
    }

    /// Sampler für den Post-Process-Pass.
    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}
