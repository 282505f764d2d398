use crate::coerce::{Coerced, coerce};
use crate::constraints::ConstraintSet;
use crate::decimal::Decimal;
use crate::grammar;
use crate::kind::ControlKind;
use crate::snapshot::{ControlSnapshot, ControlValue};
use crate::temporal::TemporalKind;
use crate::validity::ValidityState;

/// Computes the full validity state of a control.
///
/// This never consults participation: a barred control still gets its flags
/// computed, they are just not used by `checkValidity()`.
pub fn evaluate(snapshot: &ControlSnapshot, custom_validity_message: &str) -> ValidityState {
    let mut validity = ValidityState {
        custom_error: !custom_validity_message.is_empty(),
        ..ValidityState::default()
    };

    let kind = snapshot.kind;
    if kind == ControlKind::NonParticipating {
        return validity.finish();
    }

    let constraints = ConstraintSet::from_snapshot(snapshot);
    let profile = snapshot.profile;
    let email_multiple = kind == ControlKind::Email && snapshot.multiple;
    let value_is_empty = is_effectively_empty(&snapshot.value, email_multiple);

    if constraints.required() && value_is_empty {
        validity.value_missing = true;
    }
    if value_is_empty {
        return validity.finish();
    }

    let value = snapshot.text_value();

    if kind.supports_length() {
        let value_len = value.chars().count();
        if profile.enforce_min_length()
            && constraints
                .min_length()
                .present()
                .is_some_and(|&min_len| value_len < min_len)
        {
            validity.too_short = true;
        }
        if profile.enforce_max_length()
            && constraints
                .max_length()
                .present()
                .is_some_and(|&max_len| value_len > max_len)
        {
            validity.too_long = true;
        }
    }

    if profile.basic_email_url_grammar_checked() {
        match kind {
            ControlKind::Email => {
                validity.type_mismatch = if email_multiple {
                    !grammar::is_email_address_list(value)
                } else {
                    !grammar::is_simple_email(value)
                };
            }
            ControlKind::Url => {
                validity.type_mismatch = !grammar::is_absolute_url(value);
            }
            _ => {}
        }
    }

    if kind.supports_pattern() {
        validity.pattern_mismatch = if email_multiple {
            grammar::email_list_entries(value)
                .filter(|part| !part.is_empty())
                .any(|part| constraints.pattern_mismatch(part))
        } else {
            constraints.pattern_mismatch(value)
        };
    }

    if kind.has_value_domain() {
        match coerce(kind, value) {
            Coerced::Value(typed) => {
                if let Some(axis) = typed.axis() {
                    apply_range(&mut validity, kind, &constraints, &axis);
                    validity.step_mismatch = constraints.step_mismatch(&axis);
                }
            }
            Coerced::NotCoercible => {
                validity.bad_input = true;
            }
            Coerced::Absent => {}
        }
    }

    validity.finish()
}

fn is_effectively_empty(value: &ControlValue, email_multiple: bool) -> bool {
    match value {
        ControlValue::Text(text) if email_multiple => text.trim().is_empty(),
        ControlValue::Text(text) => text.is_empty(),
        ControlValue::Checked(checked) => !checked,
        ControlValue::Selected(values) => values.iter().all(String::is_empty),
    }
}

fn apply_range(
    validity: &mut ValidityState,
    kind: ControlKind,
    constraints: &ConstraintSet,
    value: &Decimal,
) {
    let min = constraints.min().present();
    let max = constraints.max().present();

    // A time range whose min is after its max wraps past midnight.
    if let (ControlKind::Temporal(TemporalKind::Time), Some(min), Some(max)) = (kind, min, max) {
        if min > max {
            if value < min && value > max {
                validity.range_underflow = true;
                validity.range_overflow = true;
            }
            return;
        }
    }

    if min.is_some_and(|min| value < min) {
        validity.range_underflow = true;
    }
    if max.is_some_and(|max| value > max) {
        validity.range_overflow = true;
    }
}
