use crate::core::{AnimationClock, SpritePose};

/// Zustand der Sprite-Animation
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationState {
    /// Drei Zeit-Akkumulatoren (Szene, Skalierung, Frame)
    pub clock: AnimationClock,
    /// Zuletzt berechnete Sprite-Pose
    pub pose: SpritePose,
    /// Angehalten: Uhr läuft nicht weiter
    pub paused: bool,
    /// Anzahl abgeschlossener Durchläufe entlang der Kurve
    pub completed_traversals: u64,
}
