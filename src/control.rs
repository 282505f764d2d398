use crate::evaluator::evaluate;
use crate::participation;
use crate::snapshot::ControlSnapshot;
use crate::validity::ValidityState;

/// The validation-facing side of one form control.
///
/// The custom-validity message is the only state it keeps. Everything else is
/// read from the snapshot passed to each query, so a query never sees stale
/// data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormControl {
    custom_validity_message: String,
}

impl FormControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// `setCustomValidity(message)`. The message is stored verbatim; an empty
    /// string clears the custom error.
    pub fn set_custom_validity(&mut self, message: impl Into<String>) {
        self.custom_validity_message = message.into();
    }

    pub fn custom_validity_message(&self) -> &str {
        &self.custom_validity_message
    }

    pub fn validity(&self, snapshot: &ControlSnapshot) -> ValidityState {
        evaluate(snapshot, &self.custom_validity_message)
    }

    pub fn will_validate(&self, snapshot: &ControlSnapshot) -> bool {
        participation::will_validate(snapshot)
    }

    pub fn check_validity(&self, snapshot: &ControlSnapshot) -> bool {
        !self.will_validate(snapshot) || self.validity(snapshot).valid()
    }

    /// Same verdict as [`Self::check_validity`]. Showing the failure to a user
    /// is left to the caller.
    pub fn report_validity(&self, snapshot: &ControlSnapshot) -> bool {
        self.check_validity(snapshot)
    }

    /// `validationMessage`: empty for barred controls, otherwise the custom
    /// message or a message for the first failing flag.
    pub fn validation_message(&self, snapshot: &ControlSnapshot) -> String {
        if !self.will_validate(snapshot) {
            return String::new();
        }
        let validity = self.validity(snapshot);
        if validity.custom_error() {
            return self.custom_validity_message.clone();
        }
        validity.default_message().to_string()
    }
}
