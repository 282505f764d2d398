//! Constraint validation for emulated HTML form controls.
//!
//! The engine takes a [`ControlSnapshot`] describing a control (its kind, value,
//! raw attributes and the active [`CompatibilityProfile`]) and answers the
//! questions a page script asks through the DOM: `validity`, `willValidate`,
//! `checkValidity()`, `reportValidity()` and `validationMessage`. The only state
//! kept between calls is the custom-validity message owned by a [`FormControl`].
//!
//! ```
//! use form_validity::{ControlKind, ControlSnapshot, FormControl, NumericKind};
//!
//! let control = FormControl::new();
//! let snapshot = ControlSnapshot::new(ControlKind::Numeric(NumericKind::Number))
//!     .with_value("0.6")
//!     .attr("min", "0.5")
//!     .attr("step", "0.1");
//! assert!(control.check_validity(&snapshot));
//! ```

use std::error::Error as StdError;
use std::fmt;

mod coerce;
mod constraints;
mod control;
mod decimal;
mod evaluator;
mod form;
mod grammar;
mod js_regex;
mod kind;
mod participation;
mod profile;
mod snapshot;
mod temporal;
mod validity;

pub use coerce::{Coerced, TypedValue, coerce};
pub use constraints::{Bound, ConstraintSet};
pub use control::FormControl;
pub use decimal::Decimal;
pub use evaluator::evaluate;
pub use form::{FormReport, FormValidator};
pub use kind::{ControlKind, NumericKind, TextKind};
pub use participation::will_validate;
pub use profile::CompatibilityProfile;
pub use snapshot::{ControlSnapshot, ControlValue, RawAttributes};
pub use temporal::{TemporalKind, TemporalValue};
pub use validity::ValidityState;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    UnknownControl(String),
    DuplicateControl(String),
    UnknownProfile(String),
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownControl(id) => write!(f, "control not found: {id}"),
            Self::DuplicateControl(id) => write!(f, "control already registered: {id}"),
            Self::UnknownProfile(name) => write!(f, "unknown compatibility profile: {name}"),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests;
