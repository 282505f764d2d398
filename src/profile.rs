use std::str::FromStr;

use crate::{Error, Result};

pub(crate) const PROFILE_ENV_VAR: &str = "FORM_VALIDITY_PROFILE";

/// Toggles selecting which optional rules are active.
///
/// The rule engine reads these flags; it never knows which environment it is
/// emulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompatibilityProfile {
    readonly_bars_validation: bool,
    enforce_min_length: bool,
    enforce_max_length: bool,
    basic_email_url_grammar_checked: bool,
}

impl Default for CompatibilityProfile {
    fn default() -> Self {
        Self::standard()
    }
}

impl CompatibilityProfile {
    pub const NAMES: [&'static str; 3] = ["standard", "permissive", "legacy"];

    /// Every optional rule enabled.
    pub const fn standard() -> Self {
        Self {
            readonly_bars_validation: true,
            enforce_min_length: true,
            enforce_max_length: true,
            basic_email_url_grammar_checked: true,
        }
    }

    /// Every optional rule disabled.
    pub const fn permissive() -> Self {
        Self {
            readonly_bars_validation: false,
            enforce_min_length: false,
            enforce_max_length: false,
            basic_email_url_grammar_checked: false,
        }
    }

    /// Readonly and type checks as in `standard`, length attributes ignored.
    pub const fn legacy() -> Self {
        Self {
            readonly_bars_validation: true,
            enforce_min_length: false,
            enforce_max_length: false,
            basic_email_url_grammar_checked: true,
        }
    }

    pub fn named(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::standard()),
            "permissive" => Ok(Self::permissive()),
            "legacy" => Ok(Self::legacy()),
            _ => Err(Error::UnknownProfile(name.to_string())),
        }
    }

    /// Reads the preset name from `FORM_VALIDITY_PROFILE`; unset or blank
    /// selects `standard`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(PROFILE_ENV_VAR) {
            Ok(name) => Self::from_setting(Some(&name)),
            Err(std::env::VarError::NotPresent) => Self::from_setting(None),
            Err(std::env::VarError::NotUnicode(_)) => Err(Error::InvalidConfig(format!(
                "{PROFILE_ENV_VAR} is not valid unicode"
            ))),
        }
    }

    fn from_setting(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(name) if !name.trim().is_empty() => Self::named(name),
            _ => Ok(Self::standard()),
        }
    }

    pub const fn with_readonly_bars_validation(mut self, enabled: bool) -> Self {
        self.readonly_bars_validation = enabled;
        self
    }

    pub const fn with_enforce_min_length(mut self, enabled: bool) -> Self {
        self.enforce_min_length = enabled;
        self
    }

    pub const fn with_enforce_max_length(mut self, enabled: bool) -> Self {
        self.enforce_max_length = enabled;
        self
    }

    pub const fn with_basic_email_url_grammar_checked(mut self, enabled: bool) -> Self {
        self.basic_email_url_grammar_checked = enabled;
        self
    }

    pub const fn readonly_bars_validation(&self) -> bool {
        self.readonly_bars_validation
    }

    pub const fn enforce_min_length(&self) -> bool {
        self.enforce_min_length
    }

    pub const fn enforce_max_length(&self) -> bool {
        self.enforce_max_length
    }

    pub const fn basic_email_url_grammar_checked(&self) -> bool {
        self.basic_email_url_grammar_checked
    }
}

impl FromStr for CompatibilityProfile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::named(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_standard() {
        let profile = CompatibilityProfile::default();
        assert_eq!(profile, CompatibilityProfile::standard());
        assert!(profile.readonly_bars_validation());
        assert!(profile.enforce_min_length());
        assert!(profile.enforce_max_length());
        assert!(profile.basic_email_url_grammar_checked());
    }

    #[test]
    fn every_listed_name_resolves() -> Result<()> {
        for name in CompatibilityProfile::NAMES {
            CompatibilityProfile::named(name)?;
        }
        assert_eq!(
            " Legacy ".parse::<CompatibilityProfile>()?,
            CompatibilityProfile::legacy()
        );
        Ok(())
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = CompatibilityProfile::named("netscape").expect_err("unknown preset");
        assert_eq!(err, Error::UnknownProfile("netscape".into()));
        assert!(err.to_string().contains("netscape"));
    }

    #[test]
    fn unset_or_blank_setting_selects_standard() -> Result<()> {
        assert_eq!(
            CompatibilityProfile::from_setting(None)?,
            CompatibilityProfile::standard()
        );
        assert_eq!(
            CompatibilityProfile::from_setting(Some(" \t"))?,
            CompatibilityProfile::standard()
        );
        assert_eq!(
            CompatibilityProfile::from_setting(Some("PERMISSIVE"))?,
            CompatibilityProfile::permissive()
        );
        Ok(())
    }

    #[test]
    fn unknown_setting_is_an_error() {
        let err = CompatibilityProfile::from_setting(Some("mosaic")).expect_err("unknown preset");
        assert_eq!(err, Error::UnknownProfile("mosaic".into()));
    }

    #[test]
    fn from_env_resolves_to_a_preset() -> Result<()> {
        // The variable is never set by this suite; any preset it names is fine.
        if let Ok(profile) = CompatibilityProfile::from_env() {
            let presets = CompatibilityProfile::NAMES
                .into_iter()
                .map(CompatibilityProfile::named)
                .collect::<Result<Vec<_>>>()?;
            assert!(presets.contains(&profile));
        }
        Ok(())
    }

    #[test]
    fn setters_toggle_single_rules() {
        let profile = CompatibilityProfile::permissive().with_enforce_max_length(true);
        assert!(profile.enforce_max_length());
        assert!(!profile.enforce_min_length());
        assert!(!profile.readonly_bars_validation());
        assert!(!profile.basic_email_url_grammar_checked());
    }
}
