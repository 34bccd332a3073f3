//! Fox Runs in Desert.
//!
//! Interaktive 2D-Demo: ein animiertes Sprite läuft eine kubische Bézier-Kurve
//! entlang, deren Kontrollpunkte mit der Maus verschoben werden können.
//! egui + wgpu, Szene über ein Offscreen-Target.

use eframe::egui;
use eframe::egui_wgpu;
use fox_run::{render, ui, AppController, AppIntent, AppState, DemoOptions, SceneImages};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Fox Run Demo v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let demo_options = DemoOptions::load_from_file(&DemoOptions::config_path());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(demo_options.window_size)
                .with_title("Fox Runs in Desert"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: render::WINDOW_SAMPLE_COUNT as u16,
            ..Default::default()
        };

        eframe::run_native(
            "Fox Runs in Desert",
            options,
            Box::new(move |cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(DemoApp::new(render_state, demo_options)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct DemoApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    input: ui::InputState,
    frame_timer: ui::FrameTimer,
}

impl DemoApp {
    fn new(render_state: &egui_wgpu::RenderState, options: DemoOptions) -> Self {
        let images = SceneImages::load_from_dir(std::path::Path::new(&options.asset_dir));
        let renderer = render::Renderer::new(render_state, &images);
        log::info!("Offscreen-Format: {:?}", renderer.offscreen_format());

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(renderer)),
            input: ui::InputState::new(),
            frame_timer: ui::FrameTimer::default(),
        }
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame_timer.record(ctx.input(|i| i.unstable_dt));

        // Panels vor dem CentralPanel: die Status-Bar zeigt den Stand vor diesem Frame
        let mut events = ui::render_toolbar(ctx, &self.state);
        ui::render_status_bar(ctx, &self.state, &self.frame_timer);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(ui, rect));
                events.push(AppIntent::FrameAdvanced);

                // Intents vor dem Szenenaufbau anwenden, damit dieser Frame den
                // aktuellen Uhr- und Editierstand zeichnet
                let scene = self
                    .controller
                    .process_frame(&mut self.state, std::mem::take(&mut events));

                if self.state.selection.is_dragging() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
                }

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data: render::WgpuRenderData { scene },
                    },
                );

                ui.painter().add(callback);
            });

        // Die Animation läuft kontinuierlich
        ctx.request_repaint();
    }
}
