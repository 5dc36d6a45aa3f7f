// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Registration form component: field inputs, live masks and inline errors.

use eframe::egui;
use log::debug;

use crate::logic::{ValidationContext, apply_mask, validate, validate_all};
use crate::models::field::FieldKind;
use crate::models::form::{ErrorMap, FormValues};

pub const SUCCESS_MESSAGE: &str = "Congratulations, everything was entered correctly!";
pub const FAILURE_MESSAGE: &str = "ERROR! Check the fields you got wrong.";

/// UI state for the registration form.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct FormModel {
    values: FormValues,
    errors: ErrorMap,
}

impl FormModel {
    #[allow(dead_code)]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }
}

/// Messages produced by the form view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMsg {
    /// Raw text of a field after a keystroke, before masking.
    Edit { kind: FieldKind, text: String },
    /// Focus left a field.
    FocusLost(FieldKind),
    Submit,
}

/// Outcome of a submit, surfaced as a notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormEvent {
    pub message: String,
    pub is_error: bool,
}

/// Apply a message to the model. Only `Submit` produces an event.
pub fn update(model: &mut FormModel, msg: FormMsg) -> Option<FormEvent> {
    match msg {
        FormMsg::Edit { kind, text } => {
            model.values.set(kind, apply_mask(kind, &text));
            None
        }
        FormMsg::FocusLost(kind) => {
            // Only re-check fields already flagged, so a fix clears the stale message.
            if model.errors.get(kind).is_some() {
                recheck_field(model, kind);
            }
            None
        }
        FormMsg::Submit => Some(submit(model)),
    }
}

fn recheck_field(model: &mut FormModel, kind: FieldKind) {
    let ctx = ValidationContext::from_values(&model.values);
    let verdict = validate(kind, model.values.get(kind), &ctx);
    debug!("re-checked {kind}: valid={}", verdict.valid);
    model.errors.set(kind, verdict.message);
}

/// Validate every field, refresh all error slots, and pick the notification.
fn submit(model: &mut FormModel) -> FormEvent {
    let report = validate_all(&model.values);
    for (kind, verdict) in report.iter() {
        model.errors.set(kind, verdict.message);
    }

    if report.all_valid() {
        debug!("submit accepted");
        FormEvent {
            message: SUCCESS_MESSAGE.to_string(),
            is_error: false,
        }
    } else {
        let failing: Vec<&str> = model.errors.failing().map(FieldKind::as_str).collect();
        debug!("submit rejected; failing fields: {}", failing.join(", "));
        FormEvent {
            message: FAILURE_MESSAGE.to_string(),
            is_error: true,
        }
    }
}

/// Render the form and return triggered messages.
pub fn view(ui: &mut egui::Ui, model: &FormModel) -> Vec<FormMsg> {
    let mut msgs = Vec::new();

    for kind in FieldKind::DISPLAY_ORDER {
        render_field(ui, model, kind, &mut msgs);
    }

    ui.add_space(40.0);
    let button = egui::Button::new(
        egui::RichText::new(format!("{} Validate", egui_phosphor::regular::CHECK_CIRCLE))
            .color(egui::Color32::WHITE),
    )
    .fill(egui::Color32::from_rgb(0x1A, 0x52, 0x76))
    .min_size(egui::vec2(ui.available_width(), 36.0));
    let resp = ui.add(button);
    let resp = if model.errors.has_errors() {
        resp.on_hover_text("Fix the fields marked in red, then validate again")
    } else {
        resp
    };
    if resp.clicked() {
        msgs.push(FormMsg::Submit);
    }

    msgs
}

fn render_field(ui: &mut egui::Ui, model: &FormModel, kind: FieldKind, msgs: &mut Vec<FormMsg>) {
    ui.label(egui::RichText::new(kind.label()).size(16.0));
    ui.add_space(4.0);

    let mut text = model.values.get(kind).to_string();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut text)
            .id_salt(kind.as_str())
            .hint_text(kind.placeholder())
            .password(kind.is_secret())
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        msgs.push(FormMsg::Edit { kind, text });
    }
    if resp.lost_focus() {
        msgs.push(FormMsg::FocusLost(kind));
    }

    if let Some(message) = model.errors.get(kind) {
        ui.label(
            egui::RichText::new(message)
                .small()
                .color(egui::Color32::RED),
        );
    }
    ui.add_space(10.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::validation::{CONFIRM_PASSWORD_MESSAGE, PHONE_MESSAGE};

    fn edit(model: &mut FormModel, kind: FieldKind, text: &str) {
        let event = update(
            model,
            FormMsg::Edit {
                kind,
                text: text.into(),
            },
        );
        assert!(event.is_none(), "edits should not raise events");
    }

    fn fill_valid(model: &mut FormModel) {
        edit(model, FieldKind::Name, "Maria Silva");
        edit(model, FieldKind::NationalId, "12345678900");
        edit(model, FieldKind::PostalCode, "12345678");
        edit(model, FieldKind::Phone, "11912345678");
        edit(model, FieldKind::Email, "maria@example.com");
        edit(model, FieldKind::Password, "Abcdef1!");
        edit(model, FieldKind::ConfirmPassword, "Abcdef1!");
    }

    #[test]
    fn masked_edits_store_formatted_text() {
        let mut model = FormModel::default();
        edit(&mut model, FieldKind::Phone, "11912345678");
        edit(&mut model, FieldKind::PostalCode, "1234");
        edit(&mut model, FieldKind::Name, "Ana 1");

        assert_eq!(model.values().phone, "(11) 91234-5678");
        assert_eq!(model.values().postal_code, "1234");
        assert_eq!(model.values().name, "Ana 1");
    }

    #[test]
    fn submit_with_valid_form_succeeds() {
        let mut model = FormModel::default();
        fill_valid(&mut model);

        let event = update(&mut model, FormMsg::Submit).expect("submit event");

        assert!(!event.is_error);
        assert_eq!(event.message, SUCCESS_MESSAGE);
        assert!(!model.errors().has_errors());
    }

    #[test]
    fn submit_on_empty_form_flags_every_field() {
        let mut model = FormModel::default();

        let event = update(&mut model, FormMsg::Submit).expect("submit event");

        assert!(event.is_error);
        assert_eq!(event.message, FAILURE_MESSAGE);
        assert_eq!(model.errors().failing().count(), FieldKind::ALL.len());
        assert_eq!(
            model.errors().get(FieldKind::ConfirmPassword),
            Some(CONFIRM_PASSWORD_MESSAGE)
        );
    }

    #[test]
    fn resubmit_clears_fixed_fields() {
        let mut model = FormModel::default();
        update(&mut model, FormMsg::Submit);
        fill_valid(&mut model);

        let event = update(&mut model, FormMsg::Submit).expect("submit event");

        assert!(!event.is_error);
        assert!(!model.errors().has_errors());
    }

    #[test]
    fn focus_loss_rechecks_only_flagged_field() {
        let mut model = FormModel::default();
        update(&mut model, FormMsg::Submit);

        edit(&mut model, FieldKind::Phone, "11912345678");
        edit(&mut model, FieldKind::Name, "Maria Silva");
        update(&mut model, FormMsg::FocusLost(FieldKind::Phone));

        assert_eq!(model.errors().get(FieldKind::Phone), None);
        // Name was fixed but not left yet; its message stays until the next pass.
        assert!(model.errors().get(FieldKind::Name).is_some());
    }

    #[test]
    fn focus_loss_without_prior_error_does_not_validate() {
        let mut model = FormModel::default();
        edit(&mut model, FieldKind::Phone, "119");

        update(&mut model, FormMsg::FocusLost(FieldKind::Phone));

        assert_eq!(model.errors().get(FieldKind::Phone), None);

        update(&mut model, FormMsg::Submit);
        assert_eq!(model.errors().get(FieldKind::Phone), Some(PHONE_MESSAGE));
    }
}
