use crate::decimal::Decimal;
use crate::kind::ControlKind;
use crate::temporal::TemporalValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedValue<'a> {
    Number(Decimal),
    Temporal(TemporalValue),
    Text(&'a str),
}

impl TypedValue<'_> {
    /// Position on the kind's ordering and step axis; text has none.
    pub fn axis(&self) -> Option<Decimal> {
        match self {
            Self::Number(number) => Some(number.clone()),
            Self::Temporal(temporal) => Some(temporal.to_decimal()),
            Self::Text(_) => None,
        }
    }
}

/// Result of reading a raw value in its kind's domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Coerced<'a> {
    /// The value is empty. Emptiness is the business of `valueMissing`.
    Absent,
    Value(TypedValue<'a>),
    /// Non-empty but outside the kind's grammar.
    NotCoercible,
}

impl<'a> Coerced<'a> {
    pub fn typed(&self) -> Option<&TypedValue<'a>> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::NotCoercible => None,
        }
    }

    pub fn is_not_coercible(&self) -> bool {
        matches!(self, Self::NotCoercible)
    }
}

pub fn coerce(kind: ControlKind, raw: &str) -> Coerced<'_> {
    if raw.is_empty() {
        return Coerced::Absent;
    }
    let typed = match kind {
        ControlKind::Numeric(_) => Decimal::parse(raw).map(TypedValue::Number),
        ControlKind::Temporal(temporal) => temporal.parse(raw).map(TypedValue::Temporal),
        _ => Some(TypedValue::Text(raw)),
    };
    match typed {
        Some(value) => Coerced::Value(value),
        None => Coerced::NotCoercible,
    }
}
