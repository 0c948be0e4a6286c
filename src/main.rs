use eframe::egui;

use nowrk::app::StudioApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 740.0]),
        ..Default::default()
    };

    eframe::run_native(
        "NOWRK Studio",
        options,
        Box::new(|_cc| Ok(Box::new(StudioApp::default()))),
    )
    .expect("Failed to start NOWRK Studio");
}
