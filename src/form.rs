use std::collections::HashMap;

use crate::control::FormControl;
use crate::snapshot::ControlSnapshot;
use crate::validity::ValidityState;
use crate::{Error, Result};

/// Outcome of validating every control of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormReport {
    /// Controls that were candidates for validation.
    pub checked: usize,
    /// Ids of candidates that failed, in submission order.
    pub invalid: Vec<String>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Named controls plus a trace log of the validation calls made on them.
#[derive(Debug, Clone)]
pub struct FormValidator {
    controls: HashMap<String, FormControl>,
    trace: bool,
    trace_checks: bool,
    trace_custom: bool,
    trace_logs: Vec<String>,
    trace_log_limit: usize,
    trace_to_stderr: bool,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl FormValidator {
    pub fn new() -> Self {
        Self {
            controls: HashMap::new(),
            trace: false,
            trace_checks: true,
            trace_custom: true,
            trace_logs: Vec::new(),
            trace_log_limit: 10_000,
            trace_to_stderr: true,
        }
    }

    pub fn register(&mut self, id: &str) -> Result<()> {
        if self.controls.contains_key(id) {
            return Err(Error::DuplicateControl(id.to_string()));
        }
        self.controls.insert(id.to_string(), FormControl::new());
        Ok(())
    }

    pub fn control(&self, id: &str) -> Result<&FormControl> {
        self.controls
            .get(id)
            .ok_or_else(|| Error::UnknownControl(id.to_string()))
    }

    pub fn control_mut(&mut self, id: &str) -> Result<&mut FormControl> {
        self.controls
            .get_mut(id)
            .ok_or_else(|| Error::UnknownControl(id.to_string()))
    }

    pub fn set_custom_validity(&mut self, id: &str, message: &str) -> Result<()> {
        self.control_mut(id)?.set_custom_validity(message);
        if self.trace_custom {
            self.trace_line(format!("[validity] custom id={id} message={message}"));
        }
        Ok(())
    }

    pub fn validity(&self, id: &str, snapshot: &ControlSnapshot) -> Result<ValidityState> {
        Ok(self.control(id)?.validity(snapshot))
    }

    pub fn will_validate(&self, id: &str, snapshot: &ControlSnapshot) -> Result<bool> {
        Ok(self.control(id)?.will_validate(snapshot))
    }

    pub fn validation_message(&self, id: &str, snapshot: &ControlSnapshot) -> Result<String> {
        Ok(self.control(id)?.validation_message(snapshot))
    }

    pub fn check_validity(&mut self, id: &str, snapshot: &ControlSnapshot) -> Result<bool> {
        self.run_check("check", id, snapshot)
    }

    pub fn report_validity(&mut self, id: &str, snapshot: &ControlSnapshot) -> Result<bool> {
        self.run_check("report", id, snapshot)
    }

    /// `form.checkValidity()`: every candidate control must be valid.
    pub fn check_form_validity(
        &mut self,
        entries: &[(&str, &ControlSnapshot)],
    ) -> Result<FormReport> {
        let mut report = FormReport::default();
        for (id, snapshot) in entries {
            if !self.control(id)?.will_validate(snapshot) {
                continue;
            }
            report.checked += 1;
            if !self.run_check("form", id, snapshot)? {
                report.invalid.push((*id).to_string());
            }
        }
        Ok(report)
    }

    fn run_check(&mut self, label: &str, id: &str, snapshot: &ControlSnapshot) -> Result<bool> {
        let control = self.control(id)?;
        let will_validate = control.will_validate(snapshot);
        let validity = control.validity(snapshot);
        let valid = !will_validate || validity.valid();
        if self.trace_checks {
            self.trace_line(format!(
                "[validity] {label} id={id} kind={} will_validate={will_validate} valid={valid} flags={}",
                snapshot.kind(),
                validity.failing_flags().join(",")
            ));
        }
        Ok(valid)
    }

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_to_stderr = enabled;
    }

    pub fn set_trace_checks(&mut self, enabled: bool) {
        self.trace_checks = enabled;
    }

    pub fn set_trace_custom(&mut self, enabled: bool) {
        self.trace_custom = enabled;
    }

    pub fn set_trace_log_limit(&mut self, max_entries: usize) -> Result<()> {
        if max_entries == 0 {
            return Err(Error::InvalidConfig(
                "set_trace_log_limit requires at least 1 entry".into(),
            ));
        }
        self.trace_log_limit = max_entries;
        if self.trace_logs.len() > self.trace_log_limit {
            let excess = self.trace_logs.len() - self.trace_log_limit;
            self.trace_logs.drain(..excess);
        }
        Ok(())
    }

    fn trace_line(&mut self, line: String) {
        if self.trace {
            if self.trace_to_stderr {
                eprintln!("{line}");
            }
            if self.trace_logs.len() >= self.trace_log_limit {
                self.trace_logs.remove(0);
            }
            self.trace_logs.push(line);
        }
    }
}
