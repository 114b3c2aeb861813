use super::core::ExpressionValue;

/// Hashable identity of an [`ExpressionValue`].
///
/// Two keys are equal exactly when the values they were taken from compare
/// equal, which lets dedup and visited-state tracking use hash sets.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValueKey {
    value: u64,
    added: Vec<u64>,
    subtracted: Vec<u64>,
}

#[inline]
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl From<&ExpressionValue> for ValueKey {
    fn from(value: &ExpressionValue) -> Self {
        Self {
            value: canonical_bits(value.value()),
            added: value.added_terms().iter().copied().map(canonical_bits).collect(),
            subtracted: value
                .subtracted_terms()
                .iter()
                .copied()
                .map(canonical_bits)
                .collect(),
        }
    }
}
