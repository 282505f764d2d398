use std::fmt;

use crate::temporal::TemporalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Text,
    Password,
    Tel,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Number,
    Range,
}

/// The closed set of control kinds the rule table knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    TextLike(TextKind),
    Email,
    Url,
    Numeric(NumericKind),
    Temporal(TemporalKind),
    Checkbox,
    Radio,
    Select,
    TextArea,
    /// Fieldsets, objects, outputs, buttons and button-like or hidden inputs.
    NonParticipating,
}

impl ControlKind {
    /// Maps an element tag and its `type` attribute to a kind.
    ///
    /// Input types are matched ASCII case-insensitively. Missing or unknown
    /// input types fall back to `text`, as a browser does.
    pub fn from_element(tag_name: &str, type_attr: Option<&str>) -> Self {
        if tag_name.eq_ignore_ascii_case("select") {
            return Self::Select;
        }
        if tag_name.eq_ignore_ascii_case("textarea") {
            return Self::TextArea;
        }
        if !tag_name.eq_ignore_ascii_case("input") {
            return Self::NonParticipating;
        }

        let input_type = type_attr.unwrap_or_default().trim().to_ascii_lowercase();
        match input_type.as_str() {
            "password" => Self::TextLike(TextKind::Password),
            "tel" => Self::TextLike(TextKind::Tel),
            "search" => Self::TextLike(TextKind::Search),
            "email" => Self::Email,
            "url" => Self::Url,
            "number" => Self::Numeric(NumericKind::Number),
            "range" => Self::Numeric(NumericKind::Range),
            "date" => Self::Temporal(TemporalKind::Date),
            "time" => Self::Temporal(TemporalKind::Time),
            "month" => Self::Temporal(TemporalKind::Month),
            "datetime-local" => Self::Temporal(TemporalKind::DateTimeLocal),
            "checkbox" => Self::Checkbox,
            "radio" => Self::Radio,
            "button" | "submit" | "reset" | "hidden" | "image" => Self::NonParticipating,
            _ => Self::TextLike(TextKind::Text),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TextLike(TextKind::Text) => "text",
            Self::TextLike(TextKind::Password) => "password",
            Self::TextLike(TextKind::Tel) => "tel",
            Self::TextLike(TextKind::Search) => "search",
            Self::Email => "email",
            Self::Url => "url",
            Self::Numeric(NumericKind::Number) => "number",
            Self::Numeric(NumericKind::Range) => "range",
            Self::Temporal(kind) => kind.as_str(),
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::TextArea => "textarea",
            Self::NonParticipating => "non-participating",
        }
    }

    pub(crate) fn supports_pattern(self) -> bool {
        matches!(self, Self::TextLike(_) | Self::Email | Self::Url)
    }

    pub(crate) fn supports_length(self) -> bool {
        matches!(
            self,
            Self::TextLike(_) | Self::Email | Self::Url | Self::TextArea
        )
    }

    /// Kinds whose value has a typed domain and can therefore be bad input,
    /// out of range or off-step.
    pub(crate) fn has_value_domain(self) -> bool {
        matches!(self, Self::Numeric(_) | Self::Temporal(_))
    }
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
