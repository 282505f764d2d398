use crate::kind::ControlKind;
use crate::snapshot::ControlSnapshot;

/// `willValidate`: whether the control is a candidate for constraint
/// validation.
///
/// Only the kind, `disabled`, and (when the profile says so) `readonly` bar a
/// control. The `hidden` attribute and CSS visibility do not.
pub fn will_validate(snapshot: &ControlSnapshot) -> bool {
    if snapshot.kind == ControlKind::NonParticipating {
        return false;
    }
    if snapshot.disabled {
        return false;
    }
    if snapshot.readonly && snapshot.profile.readonly_bars_validation() {
        return false;
    }
    true
}
