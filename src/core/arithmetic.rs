use crate::domain::model::Operator;

/// Apply `operator` to the two operands.
///
/// Total over its inputs: division by zero and unsupported operators give 0,
/// and overflow wraps instead of panicking.
pub fn apply(a: i64, b: i64, operator: Operator) -> i64 {
    match operator {
        Operator::Add => a.wrapping_add(b),
        Operator::Subtract => a.wrapping_sub(b),
        Operator::Multiply => a.wrapping_mul(b),
        Operator::Divide if b == 0 => 0,
        Operator::Divide => a.wrapping_div(b),
        Operator::Unsupported(symbol) => {
            tracing::debug!("Unsupported operator '{}', result defaults to 0", symbol);
            0
        }
    }
}
