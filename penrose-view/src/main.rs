//! Application entry point for the Penrose P2 tiling viewer.
//!
//! This binary sets up eframe/egui and delegates all interactive
//! logic and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use viewer::Viewer;

/// Starts the native eframe application.
///
/// The logger is initialised first so that tiling generation during
/// startup is already visible. Any generation failure propagates out of
/// the app constructor and aborts startup.
fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Penrose P2 Tiling",
        options,
        Box::new(|_cc| {
            // Generating the initial tiling can only fail for degenerate
            // geometry; abort startup instead of showing an empty window.
            let viewer = Viewer::new()?;
            Ok(Box::new(viewer))
        }),
    )
}
