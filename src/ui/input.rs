//! Viewport-Input-Handling: Zeiger- und Tasten-Events → AppIntent.

use super::keyboard;
use crate::app::AppIntent;

/// Verwaltet den Input-Zustand für den Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition (relativ zum Viewport)
    last_pointer: Option<glam::Vec2>,
    /// Primärtaste wurde innerhalb des Viewports gedrückt und ist noch unten
    primary_down: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg: Viewport-Größe, Tastatur, Zeiger.
    pub fn collect_viewport_events(&mut self, ui: &egui::Ui, rect: egui::Rect) -> Vec<AppIntent> {
        let pixels_per_point = ui.ctx().pixels_per_point();
        let mut events = vec![AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
            pixels_per_point,
        }];

        events.extend(keyboard::collect_keyboard_intents(ui));

        let raw_events = ui.input(|i| i.events.clone());
        events.extend(self.collect_pointer_intents(&raw_events, rect));
        events
    }

    /// Übersetzt rohe egui-Zeiger-Events in Intents.
    ///
    /// Positionen werden relativ zur linken oberen Ecke von `rect` gemeldet.
    /// Bewegungen ohne Positionsänderung werden verworfen. Ein Drücken zählt
    /// nur innerhalb von `rect`; das zugehörige Loslassen wird immer gemeldet.
    pub fn collect_pointer_intents(
        &mut self,
        raw_events: &[egui::Event],
        rect: egui::Rect,
    ) -> Vec<AppIntent> {
        let local = |pos: egui::Pos2| glam::Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y);
        let mut intents = Vec::new();

        for event in raw_events {
            match event {
                egui::Event::PointerMoved(pos) => {
                    let screen_pos = local(*pos);
                    if self.last_pointer != Some(screen_pos) {
                        self.last_pointer = Some(screen_pos);
                        intents.push(AppIntent::PointerMoved { screen_pos });
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    let screen_pos = local(*pos);
                    if *pressed {
                        if rect.contains(*pos) {
                            self.primary_down = true;
                            intents.push(AppIntent::PrimaryPressed { screen_pos });
                        }
                    } else if self.primary_down {
                        self.primary_down = false;
                        intents.push(AppIntent::PrimaryReleased { screen_pos });
                    }
                }
                egui::Event::PointerGone => {
                    self.last_pointer = None;
                }
                _ => {}
            }
        }

        intents
    }
}
