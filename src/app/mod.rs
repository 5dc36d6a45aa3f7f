// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the registration form.

use anyhow::anyhow;
use eframe::egui;
use egui_phosphor::Variant;
use log::info;

use crate::ui::RegistrationApp;

const APP_NAME: &str = "regform";

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> anyhow::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 760.0])
            .with_min_inner_size([400.0, 500.0]),
        ..Default::default()
    };

    info!("starting {APP_NAME} {}", env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(RegistrationApp::default()))
        }),
    )
    .map_err(|err| anyhow!("failed to run the {APP_NAME} window: {err}"))
}
