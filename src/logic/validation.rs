// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field validation rules for the registration form.
//! Every rule is pure and independent; only the confirmation rule reads another
//! field (the password) through [`ValidationContext`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::field::FieldKind;
use crate::models::form::FormValues;

pub const NAME_MESSAGE: &str = "Name must be at least 5 characters";
pub const EMAIL_MESSAGE: &str = "Invalid email";
pub const NATIONAL_ID_MESSAGE: &str = "Invalid national ID (expected format: XXX.XXX.XXX-XX)";
pub const POSTAL_CODE_MESSAGE: &str = "Invalid postal code (expected format: XXXXX-XXX)";
pub const PHONE_MESSAGE: &str = "Invalid phone (expected format: (XX) XXXXX-XXXX)";
pub const PASSWORD_MESSAGE: &str = "Password must be at least 8 characters, including uppercase, lowercase, numbers and special characters";
pub const CONFIRM_PASSWORD_MESSAGE: &str = "Passwords do not match";

/// Symbols that satisfy the password's special-character requirement.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*";
const PASSWORD_MIN_LEN: usize = 8;

/// Whitespace as browsers and mobile JS engines define it: Unicode `Zs` plus tab,
/// line terminators, vertical tab, form feed and the BOM, but not NEL (U+0085).
macro_rules! js_space {
    () => {
        r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}"
    };
}

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^[a-zA-Z", js_space!(), r"]{5,}$")).expect("name regex")
});
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").expect("email regex")
});
static NATIONAL_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}$").expect("national ID regex")
});
static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("postal code regex"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^\([0-9]{2}\)[", js_space!(), r"][0-9]{5}-[0-9]{4}$"))
        .expect("phone regex")
});

/// Cross-field inputs needed by some rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct ValidationContext<'a> {
    /// Current password, compared against the confirmation field.
    pub password: &'a str,
}

impl<'a> ValidationContext<'a> {
    pub fn from_values(values: &'a FormValues) -> Self {
        Self {
            password: &values.password,
        }
    }
}

/// Outcome of checking one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldVerdict {
    pub valid: bool,
    /// Error text to show inline; `None` when the value is valid.
    pub message: Option<&'static str>,
}

impl FieldVerdict {
    fn check(valid: bool, message: &'static str) -> Self {
        Self {
            valid,
            message: (!valid).then_some(message),
        }
    }
}

/// Check a single field value.
///
/// The returned message is the fixed, user-facing text for that field. No rule
/// ever errors: malformed input simply yields `valid == false`.
pub fn validate(kind: FieldKind, value: &str, ctx: &ValidationContext<'_>) -> FieldVerdict {
    match kind {
        FieldKind::Name => FieldVerdict::check(NAME_RE.is_match(value), NAME_MESSAGE),
        FieldKind::Email => FieldVerdict::check(EMAIL_RE.is_match(value), EMAIL_MESSAGE),
        FieldKind::NationalId => {
            FieldVerdict::check(NATIONAL_ID_RE.is_match(value), NATIONAL_ID_MESSAGE)
        }
        FieldKind::PostalCode => {
            FieldVerdict::check(POSTAL_CODE_RE.is_match(value), POSTAL_CODE_MESSAGE)
        }
        FieldKind::Phone => FieldVerdict::check(PHONE_RE.is_match(value), PHONE_MESSAGE),
        FieldKind::Password => FieldVerdict::check(is_strong_password(value), PASSWORD_MESSAGE),
        FieldKind::ConfirmPassword => FieldVerdict::check(
            !value.is_empty() && value == ctx.password,
            CONFIRM_PASSWORD_MESSAGE,
        ),
    }
}

/// Password strength predicate.
///
/// Requires at least eight characters, one ASCII lowercase letter, one ASCII
/// uppercase letter, one ASCII digit and one of [`PASSWORD_SYMBOLS`]; rejects any
/// value containing `ç` or a line terminator. Length is counted in UTF-16 code
/// units so it agrees with the length a text field reports.
fn is_strong_password(value: &str) -> bool {
    if value.encode_utf16().count() < PASSWORD_MIN_LEN {
        return false;
    }
    if value
        .chars()
        .any(|c| c == 'ç' || matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
    {
        return false;
    }

    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

/// Verdicts for every field of one validation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormReport {
    verdicts: BTreeMap<FieldKind, FieldVerdict>,
}

impl FormReport {
    #[allow(dead_code)]
    pub fn get(&self, kind: FieldKind) -> Option<FieldVerdict> {
        self.verdicts.get(&kind).copied()
    }

    /// True only when every field passed.
    pub fn all_valid(&self) -> bool {
        self.verdicts.values().all(|v| v.valid)
    }

    /// Verdicts in validation order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKind, FieldVerdict)> + '_ {
        self.verdicts.iter().map(|(k, v)| (*k, *v))
    }
}

/// Run every rule against the form. All seven rules are evaluated even after a
/// failure, so each field gets a fresh verdict.
pub fn validate_all(values: &FormValues) -> FormReport {
    let ctx = ValidationContext::from_values(values);
    let verdicts = FieldKind::ALL
        .into_iter()
        .map(|kind| (kind, validate(kind, values.get(kind), &ctx)))
        .collect();
    FormReport { verdicts }
}
