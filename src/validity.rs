/// The validity flags of a control, as exposed through `element.validity`.
///
/// Always derived from a snapshot on demand. `valid` is kept in step with the
/// other ten flags by [`ValidityState::finish`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidityState {
    pub(crate) value_missing: bool,
    pub(crate) type_mismatch: bool,
    pub(crate) pattern_mismatch: bool,
    pub(crate) too_long: bool,
    pub(crate) too_short: bool,
    pub(crate) range_underflow: bool,
    pub(crate) range_overflow: bool,
    pub(crate) step_mismatch: bool,
    pub(crate) bad_input: bool,
    pub(crate) custom_error: bool,
    pub(crate) valid: bool,
}

impl Default for ValidityState {
    fn default() -> Self {
        Self {
            value_missing: false,
            type_mismatch: false,
            pattern_mismatch: false,
            too_long: false,
            too_short: false,
            range_underflow: false,
            range_overflow: false,
            step_mismatch: false,
            bad_input: false,
            custom_error: false,
            valid: true,
        }
    }
}

impl ValidityState {
    /// Flag names in DOM spelling, in the order `validationMessage` consults
    /// them.
    pub const FLAG_NAMES: [&'static str; 10] = [
        "customError",
        "valueMissing",
        "typeMismatch",
        "patternMismatch",
        "tooLong",
        "tooShort",
        "rangeUnderflow",
        "rangeOverflow",
        "stepMismatch",
        "badInput",
    ];

    pub(crate) fn finish(mut self) -> Self {
        self.valid = !(self.value_missing
            || self.type_mismatch
            || self.pattern_mismatch
            || self.too_long
            || self.too_short
            || self.range_underflow
            || self.range_overflow
            || self.step_mismatch
            || self.bad_input
            || self.custom_error);
        self
    }

    pub fn value_missing(&self) -> bool {
        self.value_missing
    }

    pub fn type_mismatch(&self) -> bool {
        self.type_mismatch
    }

    pub fn pattern_mismatch(&self) -> bool {
        self.pattern_mismatch
    }

    pub fn too_long(&self) -> bool {
        self.too_long
    }

    pub fn too_short(&self) -> bool {
        self.too_short
    }

    pub fn range_underflow(&self) -> bool {
        self.range_underflow
    }

    pub fn range_overflow(&self) -> bool {
        self.range_overflow
    }

    pub fn step_mismatch(&self) -> bool {
        self.step_mismatch
    }

    pub fn bad_input(&self) -> bool {
        self.bad_input
    }

    pub fn custom_error(&self) -> bool {
        self.custom_error
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Looks a flag up by its DOM name, `valid` included.
    pub fn flag(&self, name: &str) -> Option<bool> {
        let value = match name {
            "valueMissing" => self.value_missing,
            "typeMismatch" => self.type_mismatch,
            "patternMismatch" => self.pattern_mismatch,
            "tooLong" => self.too_long,
            "tooShort" => self.too_short,
            "rangeUnderflow" => self.range_underflow,
            "rangeOverflow" => self.range_overflow,
            "stepMismatch" => self.step_mismatch,
            "badInput" => self.bad_input,
            "customError" => self.custom_error,
            "valid" => self.valid,
            _ => return None,
        };
        Some(value)
    }

    /// Names of the error flags that are set, in [`Self::FLAG_NAMES`] order.
    pub fn failing_flags(&self) -> Vec<&'static str> {
        Self::FLAG_NAMES
            .into_iter()
            .filter(|name| self.flag(name) == Some(true))
            .collect()
    }

    /// The browser-style message for the first failing computed flag. The
    /// custom message is supplied by the owner of that message.
    pub(crate) fn default_message(&self) -> &'static str {
        if self.value_missing {
            "Please fill out this field."
        } else if self.type_mismatch {
            "Please enter a valid value."
        } else if self.pattern_mismatch {
            "Please match the requested format."
        } else if self.too_long {
            "Please shorten this text."
        } else if self.too_short {
            "Please lengthen this text."
        } else if self.range_underflow {
            "Value must be greater than or equal to the minimum."
        } else if self.range_overflow {
            "Value must be less than or equal to the maximum."
        } else if self.step_mismatch {
            "Please enter a valid value. The value is not on the allowed step."
        } else if self.bad_input {
            "Please enter a valid value."
        } else {
            ""
        }
    }
}
