// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Live input masks for the numeric fields (national ID, postal code, phone).
//!
//! A mask strips everything but ASCII digits and, once enough digits are present to
//! fill the whole layout, rewrites the leading digits with the layout's literal
//! separators. Partial input stays digit-only until the layout can be filled.

use crate::models::field::FieldKind;

/// One digit group and the literal text written in front of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub prefix: &'static str,
    pub digits: usize,
}

/// Fixed layout of a masked field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskRule {
    pub segments: &'static [Segment],
    /// Formatted values are cut to this many characters.
    pub max_len: usize,
}

impl MaskRule {
    /// Number of digits needed before the layout is applied.
    pub fn digit_count(&self) -> usize {
        self.segments.iter().map(|s| s.digits).sum()
    }
}

const fn seg(prefix: &'static str, digits: usize) -> Segment {
    Segment { prefix, digits }
}

/// `123.456.789-00`
pub const NATIONAL_ID: MaskRule = MaskRule {
    segments: &[seg("", 3), seg(".", 3), seg(".", 3), seg("-", 2)],
    max_len: 14,
};

/// `12345-678`
pub const POSTAL_CODE: MaskRule = MaskRule {
    segments: &[seg("", 5), seg("-", 3)],
    max_len: 9,
};

/// `(12) 34567-8901`
pub const PHONE: MaskRule = MaskRule {
    segments: &[seg("(", 2), seg(") ", 5), seg("-", 4)],
    max_len: 15,
};

/// Mask layout for `kind`, or `None` when the field takes free text.
pub fn rule_for(kind: FieldKind) -> Option<&'static MaskRule> {
    match kind {
        FieldKind::NationalId => Some(&NATIONAL_ID),
        FieldKind::PostalCode => Some(&POSTAL_CODE),
        FieldKind::Phone => Some(&PHONE),
        _ => None,
    }
}

/// Reformat raw keystrokes for `kind`. Unmasked fields are returned unchanged.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(apply_mask(FieldKind::Phone, "11912345678"), "(11) 91234-5678");
/// assert_eq!(apply_mask(FieldKind::PostalCode, "123"), "123");
/// ```
pub fn apply_mask(kind: FieldKind, raw: &str) -> String {
    match rule_for(kind) {
        Some(rule) => format_digits(rule, raw),
        None => raw.to_string(),
    }
}

/// Apply `rule` to the digits of `raw`.
pub fn format_digits(rule: &MaskRule, raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let mut out = if digits.len() < rule.digit_count() {
        digits
    } else {
        let mut formatted = String::with_capacity(rule.max_len + digits.len());
        let mut rest = digits.as_str();
        for segment in rule.segments {
            let (group, tail) = rest.split_at(segment.digits);
            formatted.push_str(segment.prefix);
            formatted.push_str(group);
            rest = tail;
        }
        // Surplus digits trail the layout until the length cut removes them.
        formatted.push_str(rest);
        formatted
    };

    // Everything left is ASCII, so byte length equals character count.
    out.truncate(rule.max_len);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const MASKED: [FieldKind; 3] = [FieldKind::NationalId, FieldKind::PostalCode, FieldKind::Phone];

    #[test]
    fn formats_complete_layouts() {
        assert_eq!(apply_mask(FieldKind::NationalId, "12345678900"), "123.456.789-00");
        assert_eq!(apply_mask(FieldKind::PostalCode, "12345678"), "12345-678");
        assert_eq!(apply_mask(FieldKind::Phone, "12345678901"), "(12) 34567-8901");
    }

    #[test]
    fn strips_non_digits_before_formatting() {
        assert_eq!(apply_mask(FieldKind::NationalId, "123.456.789-00"), "123.456.789-00");
        assert_eq!(apply_mask(FieldKind::Phone, "tel: +11 9 1234 5678"), "(11) 91234-5678");
        assert_eq!(apply_mask(FieldKind::PostalCode, "abc"), "");
    }

    #[test]
    fn partial_input_stays_digit_only() {
        assert_eq!(apply_mask(FieldKind::NationalId, "123.456"), "123456");
        assert_eq!(apply_mask(FieldKind::PostalCode, "1234-567"), "1234567");
        assert_eq!(apply_mask(FieldKind::Phone, "(11) 9123"), "119123");
    }

    #[test]
    fn surplus_digits_are_cut_at_max_len() {
        // Typing one digit past a full layout.
        assert_eq!(apply_mask(FieldKind::NationalId, "123.456.789-001"), "123.456.789-00");
        assert_eq!(apply_mask(FieldKind::PostalCode, "12345-6789"), "12345-678");
        assert_eq!(apply_mask(FieldKind::Phone, "(11) 91234-56789"), "(11) 91234-5678");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        // Arabic-Indic digits are not decimal digits for masking purposes.
        assert_eq!(apply_mask(FieldKind::PostalCode, "١٢٣45"), "45");
    }

    #[test]
    fn unmasked_fields_pass_through() {
        assert_eq!(apply_mask(FieldKind::Name, " Ana 42 "), " Ana 42 ");
        assert_eq!(apply_mask(FieldKind::Password, "Abc-123!"), "Abc-123!");
    }

    fn masked_kind() -> impl Strategy<Value = FieldKind> {
        prop::sample::select(MASKED.to_vec())
    }

    proptest! {
        /// Digit runs shorter than the layout come back untouched.
        #[test]
        fn short_digit_runs_are_unchanged(kind in masked_kind(), seed in "[0-9]{0,10}") {
            let rule = rule_for(kind).unwrap();
            let digits: String = seed.chars().take(rule.digit_count() - 1).collect();
            prop_assert_eq!(apply_mask(kind, &digits), digits);
        }

        /// Output never exceeds the field's formatted length.
        #[test]
        fn output_is_bounded(kind in masked_kind(), raw in ".{0,40}") {
            let rule = rule_for(kind).unwrap();
            prop_assert!(apply_mask(kind, &raw).chars().count() <= rule.max_len);
        }

        /// Re-masking a masked value is a no-op.
        #[test]
        fn masking_is_idempotent(kind in masked_kind(), raw in "[0-9 .()-]{0,30}") {
            let once = apply_mask(kind, &raw);
            prop_assert_eq!(apply_mask(kind, &once), once.clone());
        }
    }
}
