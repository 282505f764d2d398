use crate::decimal::{self, Decimal};
use crate::js_regex::Regex;
use crate::kind::ControlKind;
use crate::snapshot::ControlSnapshot;

/// One parsed constraint attribute.
///
/// `Malformed` keeps the distinction from `Absent` visible to callers, but the
/// rule table treats both the same: no constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bound<T> {
    Absent,
    Present(T),
    Malformed,
}

impl<T> Bound<T> {
    fn from_raw(raw: Option<&str>, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        match raw {
            None => Self::Absent,
            Some(raw) => parse(raw).map_or(Self::Malformed, Self::Present),
        }
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Malformed => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed)
    }
}

fn trim_ascii_whitespace(raw: &str) -> &str {
    raw.trim_matches(|ch: char| ch.is_ascii_whitespace())
}

/// Bounds on a control's axis (number value, or temporal position).
fn parse_axis_bound(kind: ControlKind, raw: &str) -> Option<Decimal> {
    let raw = trim_ascii_whitespace(raw);
    match kind {
        ControlKind::Numeric(_) => Decimal::parse(raw),
        ControlKind::Temporal(temporal) => temporal.parse(raw).map(|value| value.to_decimal()),
        _ => None,
    }
}

/// Steps count in axis units and must be strictly positive. `any` means no
/// step at all.
fn step_bound(raw: Option<&str>) -> Bound<Decimal> {
    if raw.is_some_and(|raw| trim_ascii_whitespace(raw).eq_ignore_ascii_case("any")) {
        return Bound::Absent;
    }
    Bound::from_raw(raw, |raw| {
        Decimal::parse(trim_ascii_whitespace(raw)).filter(Decimal::is_positive)
    })
}

fn parse_length(raw: &str) -> Option<usize> {
    let value = trim_ascii_whitespace(raw).parse::<i64>().ok()?;
    usize::try_from(value).ok()
}

fn parse_pattern(raw: &str) -> Option<Regex> {
    if raw.is_empty() {
        return None;
    }
    // The source must compile on its own, or `a)|(b` would escape the anchors.
    Regex::new(raw).ok()?;
    Regex::anchored(raw).ok()
}

/// The effective constraints of a control, each parsed on its own.
#[derive(Debug, Clone)]
pub struct ConstraintSet {
    pub(crate) required: bool,
    pub(crate) min: Bound<Decimal>,
    pub(crate) max: Bound<Decimal>,
    pub(crate) step: Bound<Decimal>,
    pub(crate) pattern: Bound<Regex>,
    pub(crate) min_length: Bound<usize>,
    pub(crate) max_length: Bound<usize>,
}

impl ConstraintSet {
    /// Parses the constraints that apply to the snapshot's kind. Attributes
    /// that do not apply to the kind are `Absent`.
    pub fn from_snapshot(snapshot: &ControlSnapshot) -> Self {
        let kind = snapshot.kind;
        let attrs = &snapshot.attrs;

        let (min, max, step) = if kind.has_value_domain() {
            (
                Bound::from_raw(attrs.min.as_deref(), |raw| parse_axis_bound(kind, raw)),
                Bound::from_raw(attrs.max.as_deref(), |raw| parse_axis_bound(kind, raw)),
                step_bound(attrs.step.as_deref()),
            )
        } else {
            (Bound::Absent, Bound::Absent, Bound::Absent)
        };

        let pattern = if kind.supports_pattern() {
            Bound::from_raw(attrs.pattern.as_deref(), parse_pattern)
        } else {
            Bound::Absent
        };

        let (min_length, max_length) = if kind.supports_length() {
            (
                Bound::from_raw(attrs.min_length.as_deref(), parse_length),
                Bound::from_raw(attrs.max_length.as_deref(), parse_length),
            )
        } else {
            (Bound::Absent, Bound::Absent)
        };

        Self {
            required: snapshot.required,
            min,
            max,
            step,
            pattern,
            min_length,
            max_length,
        }
    }

    pub fn required(&self) -> bool {
        self.required
    }

    pub fn min(&self) -> &Bound<Decimal> {
        &self.min
    }

    pub fn max(&self) -> &Bound<Decimal> {
        &self.max
    }

    pub fn step(&self) -> &Bound<Decimal> {
        &self.step
    }

    pub fn min_length(&self) -> &Bound<usize> {
        &self.min_length
    }

    pub fn max_length(&self) -> &Bound<usize> {
        &self.max_length
    }

    /// Source of the compiled `pattern`, including the anchoring wrapper.
    pub fn pattern_source(&self) -> Option<&str> {
        self.pattern.present().map(Regex::as_str)
    }

    /// Whether a full, anchored match of the pattern fails. No pattern, or a
    /// backtracking failure inside the matcher, never reports a mismatch.
    pub(crate) fn pattern_mismatch(&self, value: &str) -> bool {
        self.pattern
            .present()
            .is_some_and(|regex| matches!(regex.is_match(value), Ok(false)))
    }

    /// Step check against `min`, or zero when there is no usable `min`.
    pub fn step_mismatch(&self, value: &Decimal) -> bool {
        let Some(step) = self.step.present() else {
            return false;
        };
        let zero = Decimal::zero();
        let base = self.min.present().unwrap_or(&zero);
        decimal::step_mismatch(value, base, step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{NumericKind, TextKind};
    use crate::temporal::TemporalKind;

    fn number() -> ControlSnapshot {
        ControlSnapshot::new(ControlKind::Numeric(NumericKind::Number))
    }

    fn dec(raw: &str) -> Decimal {
        Decimal::parse(raw).unwrap_or_else(|| panic!("{raw} should parse"))
    }

    #[test]
    fn unparseable_bounds_are_malformed_not_present() {
        let set = ConstraintSet::from_snapshot(
            &number().attr("min", "foo").attr("max", "1..2").attr("step", "0"),
        );
        assert!(set.min().is_malformed());
        assert!(set.max().is_malformed());
        assert!(set.step().is_malformed());
        assert!(!set.step_mismatch(&dec("0.123")));
    }

    #[test]
    fn step_any_means_no_step() {
        let set = ConstraintSet::from_snapshot(&number().attr("step", "ANY"));
        assert_eq!(set.step(), &Bound::Absent);
        assert!(!set.step_mismatch(&dec("0.333")));
    }

    #[test]
    fn bounds_tolerate_surrounding_whitespace() {
        let set = ConstraintSet::from_snapshot(&number().attr("min", " 2 ").attr("step", "\t0.5\n"));
        assert_eq!(set.min(), &Bound::Present(dec("2")));
        assert!(!set.step_mismatch(&dec("3.5")));
        assert!(set.step_mismatch(&dec("3.25")));
    }

    #[test]
    fn step_base_defaults_to_zero_without_min() {
        let set = ConstraintSet::from_snapshot(&number().attr("step", "3"));
        assert!(!set.step_mismatch(&dec("-6")));
        assert!(set.step_mismatch(&dec("4")));
    }

    #[test]
    fn temporal_bounds_use_temporal_grammar() {
        let snapshot = ControlSnapshot::new(ControlKind::Temporal(TemporalKind::Month))
            .attr("min", "1970-03")
            .attr("max", "5");
        let set = ConstraintSet::from_snapshot(&snapshot);
        assert_eq!(set.min(), &Bound::Present(Decimal::from_integer(2)));
        assert!(set.max().is_malformed());
    }

    #[test]
    fn length_bounds_reject_negative_values() {
        let snapshot = ControlSnapshot::new(ControlKind::TextLike(TextKind::Text))
            .attr("minlength", "-1")
            .attr("maxlength", "8");
        let set = ConstraintSet::from_snapshot(&snapshot);
        assert!(set.min_length().is_malformed());
        assert_eq!(set.max_length(), &Bound::Present(8));
    }

    #[test]
    fn pattern_is_anchored_and_invalid_syntax_is_malformed() {
        let text = ControlSnapshot::new(ControlKind::TextLike(TextKind::Text));
        let set = ConstraintSet::from_snapshot(&text.clone().attr("pattern", "[a-z]+"));
        assert_eq!(set.pattern_source(), Some("^(?:[a-z]+)$"));
        assert!(set.pattern_mismatch("abc1"));
        assert!(!set.pattern_mismatch("abc"));

        let set = ConstraintSet::from_snapshot(&text.attr("pattern", "(unclosed"));
        assert!(set.pattern.is_malformed());
        assert!(!set.pattern_mismatch("anything"));
    }

    #[test]
    fn attributes_outside_kind_are_absent() {
        let snapshot = ControlSnapshot::new(ControlKind::TextArea)
            .attr("min", "1")
            .attr("pattern", "x");
        let set = ConstraintSet::from_snapshot(&snapshot);
        assert_eq!(set.min(), &Bound::Absent);
        assert_eq!(set.pattern_source(), None);
    }
}
