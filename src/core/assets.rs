//! Laden der Bild-Assets (Hintergrund + Animations-Frames).

use super::SPRITE_FRAME_COUNT;
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Dateiname des Hintergrundbilds im Asset-Verzeichnis.
pub const BACKGROUND_FILE: &str = "background.png";

/// Fehler beim Laden eines einzelnen Bilds.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Datei konnte nicht geöffnet werden
    #[error("cannot open '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Datei konnte nicht dekodiert werden
    #[error("cannot decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Dateiname des Animations-Frames mit Index `index` (0-basiert → "1.png").
pub fn frame_file_name(index: usize) -> String {
    format!("{}.png", index + 1)
}

/// Lädt und dekodiert ein einzelnes Bild.
pub fn load_image(path: &Path) -> Result<DynamicImage, AssetError> {
    let reader = image::ImageReader::open(path).map_err(|source| AssetError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = reader
        .with_guessed_format()
        .map_err(|source| AssetError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Alle dekodierten Bilder der Szene.
///
/// Nicht dekodierbare Bilder bleiben `None`; der Renderer überspringt sie.
#[derive(Default)]
pub struct SceneImages {
    /// Hintergrundbild
    pub background: Option<DynamicImage>,
    /// Animations-Frames in Abspielreihenfolge
    pub frames: Vec<Option<DynamicImage>>,
}

impl SceneImages {
    /// Lädt Hintergrund und alle Frames aus `dir`.
    ///
    /// Fehler werden gemeldet, aber nicht propagiert.
    pub fn load_from_dir(dir: &Path) -> Self {
        let background = Self::load_reported(&dir.join(BACKGROUND_FILE));
        let frames = (0..SPRITE_FRAME_COUNT)
            .map(|index| Self::load_reported(&dir.join(frame_file_name(index))))
            .collect();

        let images = Self { background, frames };
        log::info!(
            "{} von {} Bildern aus '{}' geladen",
            images.loaded_count(),
            SPRITE_FRAME_COUNT + 1,
            dir.display()
        );
        images
    }

    fn load_reported(path: &Path) -> Option<DynamicImage> {
        match load_image(path) {
            Ok(image) => {
                log::debug!(
                    "Bild geladen: {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                Some(image)
            }
            Err(e) => {
                log::error!("decoder error: {}", e);
                None
            }
        }
    }

    /// Anzahl erfolgreich dekodierter Bilder.
    pub fn loaded_count(&self) -> usize {
        usize::from(self.background.is_some()) + self.frames.iter().flatten().count()
    }
}
