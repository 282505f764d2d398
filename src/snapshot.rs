use crate::kind::ControlKind;
use crate::profile::CompatibilityProfile;

/// The current value of a control, in the shape its kind uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    Text(String),
    /// Checkbox checkedness, or for a radio whether any member of its group is
    /// checked.
    Checked(bool),
    /// Values of the selected options of a select.
    Selected(Vec<String>),
}

impl Default for ControlValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Unparsed constraint attributes, exactly as stored on the element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAttributes {
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    pub pattern: Option<String>,
    pub max_length: Option<String>,
    pub min_length: Option<String>,
}

impl RawAttributes {
    /// Returns the slot for a constraint attribute name, or `None` for names
    /// the engine does not read.
    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "min" => Some(&mut self.min),
            "max" => Some(&mut self.max),
            "step" => Some(&mut self.step),
            "pattern" => Some(&mut self.pattern),
            "maxlength" => Some(&mut self.max_length),
            "minlength" => Some(&mut self.min_length),
            _ => None,
        }
    }
}

/// Everything the engine needs to know about a control for one query.
///
/// Built fresh by the caller for each query and never retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSnapshot {
    pub(crate) kind: ControlKind,
    pub(crate) value: ControlValue,
    pub(crate) required: bool,
    pub(crate) disabled: bool,
    pub(crate) readonly: bool,
    pub(crate) hidden: bool,
    pub(crate) multiple: bool,
    pub(crate) attrs: RawAttributes,
    pub(crate) profile: CompatibilityProfile,
}

impl ControlSnapshot {
    pub fn new(kind: ControlKind) -> Self {
        let value = match kind {
            ControlKind::Checkbox | ControlKind::Radio => ControlValue::Checked(false),
            ControlKind::Select => ControlValue::Selected(Vec::new()),
            _ => ControlValue::default(),
        };
        Self {
            kind,
            value,
            required: false,
            disabled: false,
            readonly: false,
            hidden: false,
            multiple: false,
            attrs: RawAttributes::default(),
            profile: CompatibilityProfile::default(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = ControlValue::Text(value.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.value = ControlValue::Checked(checked);
        self
    }

    pub fn with_selected<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = ControlValue::Selected(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// The semantic `hidden` attribute. It has no effect on validation.
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Sets a raw constraint attribute (`min`, `max`, `step`, `pattern`,
    /// `maxlength`, `minlength`). Other names are ignored.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Some(slot) = self.attrs.slot_mut(name) {
            *slot = Some(value.into());
        }
        self
    }

    pub fn with_attributes(mut self, attrs: RawAttributes) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_profile(mut self, profile: CompatibilityProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn kind(&self) -> ControlKind {
        self.kind
    }

    pub fn value(&self) -> &ControlValue {
        &self.value
    }

    pub fn attributes(&self) -> &RawAttributes {
        &self.attrs
    }

    pub fn profile(&self) -> CompatibilityProfile {
        self.profile
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The value as text; checkable and select controls have none.
    pub(crate) fn text_value(&self) -> &str {
        match &self.value {
            ControlValue::Text(text) => text,
            ControlValue::Checked(_) | ControlValue::Selected(_) => "",
        }
    }
}
