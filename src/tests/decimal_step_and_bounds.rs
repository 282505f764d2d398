use super::*;

#[test]
fn fractional_step_accepts_exact_multiples_from_min() -> Result<()> {
    let mut form = FormValidator::new();
    form.register("amount")?;
    for value in ["0.5", "0.6", "1.6", "2.1", "10.8", "123456789.90"] {
        let snapshot = number_with_step(value);
        let validity = form.validity("amount", &snapshot)?;
        assert!(!validity.step_mismatch(), "{value}");
        assert!(form.check_validity("amount", &snapshot)?, "{value}");
    }
    Ok(())
}

#[test]
fn fractional_step_rejects_values_off_the_grid() -> Result<()> {
    let mut form = FormValidator::new();
    form.register("amount")?;
    for value in [
        "0.50000000000001",
        "0.51",
        "1.51",
        "2.15",
        "10.10001",
        "123456789.1000001",
    ] {
        let snapshot = number_with_step(value);
        let validity = form.validity("amount", &snapshot)?;
        assert_eq!(validity.failing_flags(), vec!["stepMismatch"], "{value}");
        assert!(!form.check_validity("amount", &snapshot)?, "{value}");
    }
    Ok(())
}

#[test]
fn exponent_notation_values_are_stepped_exactly() {
    let control = FormControl::new();
    assert!(control.validity(&number_with_step("1.5e0")).valid());
    assert!(control.validity(&number_with_step("5e-1")).valid());
    assert!(
        control
            .validity(&number_with_step("5.0000000000001e-1"))
            .step_mismatch()
    );
}

#[test]
fn range_kind_uses_the_same_rules_as_number() {
    let control = FormControl::new();
    let snapshot = ControlSnapshot::new(ControlKind::from_element("input", Some("range")))
        .with_value("150")
        .attr("min", "0")
        .attr("max", "100")
        .attr("step", "25");
    assert_eq!(
        control.validity(&snapshot).failing_flags(),
        vec!["rangeOverflow"]
    );
}

#[test]
fn unparseable_bounds_never_constrain_any_value() {
    let control = FormControl::new();
    let kinds = [
        ControlKind::Numeric(NumericKind::Number),
        ControlKind::Numeric(NumericKind::Range),
        ControlKind::Temporal(TemporalKind::Date),
        ControlKind::Temporal(TemporalKind::Time),
        ControlKind::Temporal(TemporalKind::Month),
        ControlKind::Temporal(TemporalKind::DateTimeLocal),
    ];
    let values = [
        "-1000000",
        "0.123456789",
        "42",
        "1999-12-31",
        "23:59:59",
        "2030-06",
        "2024-02-29T12:30",
    ];
    for kind in kinds {
        for value in values {
            for attr in ["min", "max", "step"] {
                let snapshot = ControlSnapshot::new(kind).with_value(value).attr(attr, "foo");
                let validity = control.validity(&snapshot);
                assert!(!validity.range_underflow(), "{kind} {value} {attr}");
                assert!(!validity.range_overflow(), "{kind} {value} {attr}");
                assert!(!validity.step_mismatch(), "{kind} {value} {attr}");
            }
        }
    }
}

#[test]
fn malformed_min_does_not_shift_the_step_base() {
    let control = FormControl::new();
    let snapshot = ControlSnapshot::new(ControlKind::Numeric(NumericKind::Number))
        .with_value("4")
        .attr("min", "1x")
        .attr("step", "2");
    assert!(control.validity(&snapshot).valid());
}

#[test]
fn contradictory_bounds_still_produce_a_full_state() {
    let control = FormControl::new();
    let snapshot = ControlSnapshot::new(ControlKind::Temporal(TemporalKind::Date))
        .with_value("2024-06-15")
        .attr("min", "2024-12-01")
        .attr("max", "2024-01-01")
        .attr("step", "1");
    let validity = control.validity(&snapshot);
    assert!(validity.range_underflow());
    assert!(validity.range_overflow());
    assert!(!validity.step_mismatch());
    assert!(!validity.valid());
}

#[test]
fn non_numeric_value_is_bad_input_not_missing() {
    let control = FormControl::new();
    let snapshot = ControlSnapshot::new(ControlKind::Numeric(NumericKind::Number))
        .with_value("abc")
        .required(true);
    let validity = control.validity(&snapshot);
    assert_eq!(validity.failing_flags(), vec!["badInput"]);
    assert_eq!(
        control.validation_message(&snapshot),
        "Please enter a valid value."
    );
}
