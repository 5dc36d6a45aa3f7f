// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the registration form.
//! Handles layout, the submit notification, and wiring to the MVU kernel.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::form;

/// Stateful egui application hosting the registration form.
#[derive(Default)]
pub struct RegistrationApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for RegistrationApp {
    /// Drives a single UI frame: applies messages queued by the previous frame, then
    /// renders the header, the form, and the notification modal.
    ///
    /// Views never mutate the model directly; they append messages to the inbox, which
    /// are applied at the start of the next frame (and trigger a repaint so that happens
    /// immediately).
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        let msgs = std::mem::take(&mut self.inbox);
        for msg in msgs {
            mvu::update(&mut self.model, msg);
        }

        self.render_notification_modal(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(background(ctx)))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add_space(24.0);
                    self.render_header(ui);
                    ui.add_space(24.0);

                    let form_msgs = form::view(ui, &self.model.form);
                    self.inbox.extend(form_msgs.into_iter().map(Msg::Form));
                    ui.add_space(16.0);
                });
            });

        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }

    /// Required by eframe 0.34; all rendering happens in `update`, which eframe
    /// still invokes right before this each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl RegistrationApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new("Form Validation")
                    .size(30.0)
                    .color(egui::Color32::from_rgb(0x1A, 0x52, 0x76)),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Super Simple Form")
                    .size(20.0)
                    .color(egui::Color32::from_rgb(0x29, 0x80, 0xB9)),
            );
        });
    }

    /// Render the submit outcome as a centered modal until the user dismisses it.
    fn render_notification_modal(&mut self, ctx: &egui::Context) {
        if let Some(note) = self.model.notification.clone() {
            let (title, icon) = if note.is_error {
                ("Validation error", egui_phosphor::regular::WARNING_CIRCLE)
            } else {
                ("Validation passed", egui_phosphor::regular::CHECK_CIRCLE)
            };
            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(format!("{icon} {}", note.message));
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissNotification);
                    }
                });
        }
    }
}

/// Soft page background in light mode; the theme default otherwise.
fn background(ctx: &egui::Context) -> egui::Color32 {
    if ctx.style().visuals.dark_mode {
        ctx.style().visuals.panel_fill
    } else {
        egui::Color32::from_rgb(0xF0, 0xF4, 0xF8)
    }
}
