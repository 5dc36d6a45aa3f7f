// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Identity and presentation metadata of the registration form fields.

/// The seven logical fields of the registration form.
///
/// Declaration order is the order in which a whole-form validation run checks
/// the fields, and therefore the iteration order of keyed collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Name,
    Email,
    NationalId,
    PostalCode,
    Phone,
    Password,
    ConfirmPassword,
}

impl FieldKind {
    /// Every field, in validation order.
    pub const ALL: [FieldKind; 7] = [
        Self::Name,
        Self::Email,
        Self::NationalId,
        Self::PostalCode,
        Self::Phone,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Every field, in the order the form lays them out on screen.
    pub const DISPLAY_ORDER: [FieldKind; 7] = [
        Self::Name,
        Self::NationalId,
        Self::PostalCode,
        Self::Phone,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Stable key used for widget ids and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::NationalId => "nationalId",
            Self::PostalCode => "postalCode",
            Self::Phone => "phone",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Prompt rendered above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Enter your name:",
            Self::Email => "E-mail:",
            Self::NationalId => "Enter your national ID:",
            Self::PostalCode => "Enter your postal code:",
            Self::Phone => "Mobile phone with area code:",
            Self::Password => {
                "8-character password (min. 1 lowercase letter, 1 uppercase, 1 number, 1 special character):"
            }
            Self::ConfirmPassword => "Confirm your password:",
        }
    }

    /// Hint text shown while the input is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::ConfirmPassword => "type the password again",
            _ => "type here",
        }
    }

    /// Whether keystrokes for this field pass through the masking engine.
    pub fn is_masked(self) -> bool {
        matches!(self, Self::NationalId | Self::PostalCode | Self::Phone)
    }

    /// Whether the input hides its contents.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
