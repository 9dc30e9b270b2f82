// Month Calendar Application
// Main entry point

use month_calendar::ui_egui::CalendarApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Calendar")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Month Calendar",
        options,
        Box::new(|cc| Ok(Box::new(CalendarApp::new(cc)))),
    )
}
