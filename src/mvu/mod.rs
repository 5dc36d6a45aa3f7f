// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring the form component to the notification modal.

use crate::ui::components::form::{self, FormEvent, FormModel, FormMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Registration form state.
    pub form: FormModel,
    /// Pending submit outcome shown in a modal until dismissed.
    pub notification: Option<FormEvent>,
}

/// Application messages routed through the update function.
pub enum Msg {
    Form(FormMsg),
    DismissNotification,
}

/// Update the application model.
pub fn update(model: &mut AppModel, msg: Msg) {
    match msg {
        Msg::Form(m) => {
            if let Some(event) = form::update(&mut model.form, m) {
                surface_event(model, event);
            }
        }
        Msg::DismissNotification => model.notification = None,
    }
}

/// Replace any pending notification with the latest outcome.
fn surface_event(model: &mut AppModel, event: FormEvent) {
    model.notification = Some(event);
}
