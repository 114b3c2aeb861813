use crate::value::{ExpressionValue, Operator};

/// One of the six ways two values can be combined.
///
/// Subtraction and division do not commute, so both operand orders are
/// distinct operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionalOp {
    Add,
    Multiply,
    Subtract,
    SubtractReversed,
    Divide,
    DivideReversed,
}

impl DirectionalOp {
    pub const ALL: [DirectionalOp; 6] = [
        DirectionalOp::Add,
        DirectionalOp::Multiply,
        DirectionalOp::Subtract,
        DirectionalOp::SubtractReversed,
        DirectionalOp::Divide,
        DirectionalOp::DivideReversed,
    ];

    pub fn operator(&self) -> Operator {
        match self {
            DirectionalOp::Add => Operator::Add,
            DirectionalOp::Multiply => Operator::Multiply,
            DirectionalOp::Subtract | DirectionalOp::SubtractReversed => Operator::Subtract,
            DirectionalOp::Divide | DirectionalOp::DivideReversed => Operator::Divide,
        }
    }

    pub fn is_reversed(&self) -> bool {
        matches!(
            self,
            DirectionalOp::SubtractReversed | DirectionalOp::DivideReversed
        )
    }

    /// Combine `current` with `partner`, or `None` when the divisor is zero
    pub fn apply(
        &self,
        current: &ExpressionValue,
        partner: &ExpressionValue,
    ) -> Option<ExpressionValue> {
        let (left, right) = if self.is_reversed() {
            (partner, current)
        } else {
            (current, partner)
        };

        if self.operator() == Operator::Divide && right.value() == 0.0 {
            return None;
        }

        left.combine(self.operator(), right).ok()
    }
}

/// All results of combining `current` with `partner`.
///
/// Divisions by a zero-valued operand are skipped rather than reported.
pub fn operate(current: &ExpressionValue, partner: &ExpressionValue) -> Vec<ExpressionValue> {
    DirectionalOp::ALL
        .iter()
        .filter_map(|op| op.apply(current, partner))
        .collect()
}
