use glam::Vec2;

/// Auswahlbezogener Anwendungszustand
///
/// Der gegriffene Kontrollpunkt wird nur über seinen Index referenziert.
/// Lebensdauer: genau eine Drag-Geste (Maus runter → Maus hoch).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionState {
    /// Index des aktuell gegriffenen Kontrollpunkts
    pub selected_point: Option<usize>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand (Idle).
    pub fn new() -> Self {
        Self {
            selected_point: None,
        }
    }

    /// Gibt `true` zurück, solange ein Punkt gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.selected_point.is_some()
    }
}

/// Zuletzt aufgezeichnete Zeigerposition in Szenen-Koordinaten.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Letzte bekannte Position
    pub scene_pos: Vec2,
}
