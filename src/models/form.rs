// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transient form state: the current text of each field and the inline error slots.

use std::collections::BTreeMap;

use crate::models::field::FieldKind;

/// Current text of every form field.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub national_id: String,
    pub postal_code: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    /// Borrow the text of a single field.
    pub fn get(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::NationalId => &self.national_id,
            FieldKind::PostalCode => &self.postal_code,
            FieldKind::Phone => &self.phone,
            FieldKind::Password => &self.password,
            FieldKind::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replace the text of a single field.
    pub fn set(&mut self, kind: FieldKind, value: String) {
        let slot = match kind {
            FieldKind::Name => &mut self.name,
            FieldKind::Email => &mut self.email,
            FieldKind::NationalId => &mut self.national_id,
            FieldKind::PostalCode => &mut self.postal_code,
            FieldKind::Phone => &mut self.phone,
            FieldKind::Password => &mut self.password,
            FieldKind::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value;
    }
}

/// Inline error messages keyed by field. An absent entry means the field is valid
/// (or has not been validated yet).
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ErrorMap {
    messages: BTreeMap<FieldKind, &'static str>,
}

impl ErrorMap {
    /// Message currently shown under `kind`, if any.
    pub fn get(&self, kind: FieldKind) -> Option<&'static str> {
        self.messages.get(&kind).copied()
    }

    /// Overwrite the slot for `kind`; `None` clears it.
    pub fn set(&mut self, kind: FieldKind, message: Option<&'static str>) {
        match message {
            Some(msg) => {
                self.messages.insert(kind, msg);
            }
            None => {
                self.messages.remove(&kind);
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Fields with a message, in validation order.
    pub fn failing(&self) -> impl Iterator<Item = FieldKind> + '_ {
        self.messages.keys().copied()
    }
}
