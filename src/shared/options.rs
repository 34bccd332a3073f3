//! Zentrale Konfiguration der Demo.
//!
//! `DemoOptions` enthält alle einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{ClockSteps, SpriteParams, SPRITE_FRAME_COUNT};
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Animation ───────────────────────────────────────────────────────

/// Geschwindigkeit des Sprites entlang der Kurve.
pub const SPEED_FACTOR: f32 = 650.0;
/// Wie schnell das Sprite kleiner wird.
pub const SHRINK_FACTOR: f32 = 1.2;
/// Startgröße des Sprites (größerer Wert = kleineres Sprite).
pub const INITIAL_SIZE: f32 = 0.25;
/// Seitenverhältnis-Skalierung des Sprite-Quads (x, y).
pub const SPRITE_ASPECT_SCALE: [f32; 2] = [0.195, 0.15];
/// Multiplikator Frame-Zeit → Frame-Index.
pub const FRAME_RATE_FACTOR: f32 = 100.0;

// ── Uhr ─────────────────────────────────────────────────────────────

/// Szenen-Zeit pro Frame.
pub const SCENE_TIME_STEP: f64 = 0.00005;
/// Skalierungs-Zeit pro Frame.
pub const SCALE_TIME_STEP: f64 = 0.0002;
/// Frame-Zeit pro Frame.
pub const FRAME_TIME_STEP: f64 = 0.00025;

// ── Editor / Overlay ────────────────────────────────────────────────

/// Darstellungsgröße der Kontrollpunkte in Pixeln (bestimmt auch den Pick-Radius).
pub const POINT_SIZE_PX: f32 = 10.0;
/// Farbe der Bézier-Kurve (RGBA: Rot).
pub const CURVE_COLOR: [f32; 4] = [0.9, 0.1, 0.1, 1.0];
/// Farbe des Kontrollpolygons (RGBA: Grau).
pub const POLYGON_COLOR: [f32; 4] = [0.35, 0.35, 0.35, 1.0];
/// Farbe der Kontrollpunkte (RGBA: Blau).
pub const POINT_COLOR: [f32; 4] = [0.1, 0.3, 0.9, 1.0];
/// Farbe des gegriffenen Kontrollpunkts (RGBA: Gelb).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.85, 0.0, 1.0];

// ── Fenster ─────────────────────────────────────────────────────────

/// Fenstergröße in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [720.0, 720.0];
/// Hintergrundfarbe des Offscreen-Targets (RGBA: Weiß).
pub const CLEAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Verzeichnis der Bild-Assets (relativ zum Arbeitsverzeichnis).
pub const ASSET_DIR: &str = "Images";

/// Farben und Größen für Offscreen-Pass und Overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    /// Clear-Farbe des Offscreen-Targets
    pub clear_color: [f32; 4],
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Farbe des Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe des gegriffenen Kontrollpunkts
    pub point_color_selected: [f32; 4],
    /// Punktgröße in Pixeln
    pub point_size_px: f32,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle einstellbaren Demo-Optionen.
/// Wird optional als `fox_run.toml` neben der Binary gelesen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoOptions {
    // ── Animation ───────────────────────────────────────────────
    /// Multiplikator Szenen-Zeit → Kurven-Index
    pub speed_factor: f32,
    /// Schrumpf-Faktor des Sprites
    pub shrink_factor: f32,
    /// Startgröße des Sprites
    pub initial_size: f32,
    /// Seitenverhältnis-Skalierung des Sprite-Quads
    pub sprite_aspect_scale: [f32; 2],
    /// Multiplikator Frame-Zeit → Frame-Index
    pub frame_rate_factor: f32,
    /// Inkrement der Szenen-Zeit pro Frame
    pub scene_time_step: f64,
    /// Inkrement der Skalierungs-Zeit pro Frame
    pub scale_time_step: f64,
    /// Inkrement der Frame-Zeit pro Frame
    pub frame_time_step: f64,

    // ── Overlay ─────────────────────────────────────────────────
    /// Punktgröße in Pixeln
    pub point_size_px: f32,
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Farbe des Kontrollpolygons
    pub polygon_color: [f32; 4],
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe des gegriffenen Kontrollpunkts
    pub point_color_selected: [f32; 4],

    // ── Fenster / Assets ────────────────────────────────────────
    /// Fenstergröße in Pixeln
    pub window_size: [f32; 2],
    /// Clear-Farbe des Offscreen-Targets
    pub clear_color: [f32; 4],
    /// Verzeichnis der Bild-Assets
    pub asset_dir: String,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            speed_factor: SPEED_FACTOR,
            shrink_factor: SHRINK_FACTOR,
            initial_size: INITIAL_SIZE,
            sprite_aspect_scale: SPRITE_ASPECT_SCALE,
            frame_rate_factor: FRAME_RATE_FACTOR,
            scene_time_step: SCENE_TIME_STEP,
            scale_time_step: SCALE_TIME_STEP,
            frame_time_step: FRAME_TIME_STEP,

            point_size_px: POINT_SIZE_PX,
            curve_color: CURVE_COLOR,
            polygon_color: POLYGON_COLOR,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,

            window_size: WINDOW_SIZE,
            clear_color: CLEAR_COLOR,
            asset_dir: ASSET_DIR.to_string(),
        }
    }
}

impl DemoOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content).unwrap_or_else(|e| {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus einem TOML-String; fehlende Felder erhalten Standardwerte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let options = toml::from_str(content)?;
        log::info!("Optionen geladen");
        Ok(options)
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("fox_run"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("fox_run.toml")
    }

    /// Inkremente der Animations-Uhr.
    pub fn clock_steps(&self) -> ClockSteps {
        ClockSteps {
            scene: self.scene_time_step,
            scale: self.scale_time_step,
            frame: self.frame_time_step,
        }
    }

    /// Parameter der Sprite-Komposition.
    pub fn sprite_params(&self) -> SpriteParams {
        SpriteParams {
            speed_factor: self.speed_factor,
            shrink_factor: self.shrink_factor,
            initial_size: self.initial_size,
            aspect_scale: Vec2::from(self.sprite_aspect_scale),
            frame_rate_factor: self.frame_rate_factor,
            frame_count: SPRITE_FRAME_COUNT,
        }
    }

    /// Farben und Größen für den Renderer.
    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            clear_color: self.clear_color,
            curve_color: self.curve_color,
            polygon_color: self.polygon_color,
            point_color: self.point_color,
            point_color_selected: self.point_color_selected,
            point_size_px: self.point_size_px,
        }
    }

    /// Pick-Radius in Szenen-Einheiten für die gegebene Viewport-Größe.
    pub fn pick_radius(&self, viewport_size: [f32; 2]) -> f32 {
        crate::core::viewport::pick_radius(self.point_size_px, Vec2::from(viewport_size))
    }
}
