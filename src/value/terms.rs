//! Helpers for the signed term sequences carried by every value.
//!
//! Every helper returns a sorted sequence so that equality of two values can be
//! decided with a plain element-wise comparison.

/// Fold `-0.0` into `0.0` so that sorting and hashing agree with `==`.
#[inline]
fn normalize(term: f64) -> f64 {
    term + 0.0
}

fn sorted(mut terms: Vec<f64>) -> Vec<f64> {
    terms.sort_by(f64::total_cmp);
    terms
}

pub(crate) fn single(term: f64) -> Vec<f64> {
    vec![normalize(term)]
}

/// Concatenation of two term sequences
pub(crate) fn merged(left: &[f64], right: &[f64]) -> Vec<f64> {
    let mut terms = Vec::with_capacity(left.len() + right.len());
    terms.extend_from_slice(left);
    terms.extend_from_slice(right);
    sorted(terms)
}

/// Pairwise products of `a x b` followed by `c x d`
pub(crate) fn cross_products(a: &[f64], b: &[f64], c: &[f64], d: &[f64]) -> Vec<f64> {
    let terms = a
        .iter()
        .flat_map(|x| b.iter().map(move |y| x * y))
        .chain(c.iter().flat_map(|x| d.iter().map(move |y| x * y)))
        .map(normalize)
        .collect();
    sorted(terms)
}

pub(crate) fn scaled(terms: &[f64], divisor: f64) -> Vec<f64> {
    sorted(terms.iter().map(|t| normalize(t / divisor)).collect())
}
