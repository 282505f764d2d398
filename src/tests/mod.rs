use super::*;

mod decimal_step_and_bounds;

fn number_with_step(value: &str) -> ControlSnapshot {
    ControlSnapshot::new(ControlKind::Numeric(NumericKind::Number))
        .with_value(value)
        .attr("min", "0.5")
        .attr("step", "0.1")
}
