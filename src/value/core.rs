use log::debug;

use super::errors::ValueError;
use super::key::ValueKey;
use super::terms;

/// The four arithmetic operators a derivation can use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

/// A number together with the way it was reached.
///
/// Besides the numeric result, every value keeps the expanded signed terms of
/// its derivation. Two values are equal when their numbers and both term
/// sequences match, so `5-(3-5)` and `5+(5-3)` compare equal while `(5*2)-3`
/// stays distinct. Values are never mutated once built.
#[derive(Debug, Clone)]
pub struct ExpressionValue {
    value: f64,
    description: String,
    added_terms: Vec<f64>,
    subtracted_terms: Vec<f64>,
}

impl ExpressionValue {
    /// Wrap a raw input number
    pub fn leaf(number: f64) -> Self {
        Self {
            value: number,
            description: number.to_string(),
            added_terms: terms::single(number),
            subtracted_terms: Vec::new(),
        }
    }

    fn derive(
        &self,
        operator: Operator,
        other: &ExpressionValue,
        value: f64,
        added_terms: Vec<f64>,
        subtracted_terms: Vec<f64>,
    ) -> Self {
        let description = format!("({}{}{})", self.description, operator, other.description);
        debug!("Derived {} = {}", description, value);
        Self {
            value,
            description,
            added_terms,
            subtracted_terms,
        }
    }

    /// `(self+other)`
    pub fn add(&self, other: &ExpressionValue) -> Self {
        self.derive(
            Operator::Add,
            other,
            self.value + other.value,
            terms::merged(&self.added_terms, &other.added_terms),
            terms::merged(&self.subtracted_terms, &other.subtracted_terms),
        )
    }

    /// `(self*other)`, distributing the signs of both term sequences
    pub fn multiply(&self, other: &ExpressionValue) -> Self {
        self.derive(
            Operator::Multiply,
            other,
            self.value * other.value,
            terms::cross_products(
                &self.added_terms,
                &other.added_terms,
                &self.subtracted_terms,
                &other.subtracted_terms,
            ),
            terms::cross_products(
                &self.added_terms,
                &other.subtracted_terms,
                &self.subtracted_terms,
                &other.added_terms,
            ),
        )
    }

    /// `(self-other)`; the signs of `other`'s terms flip
    pub fn subtract(&self, other: &ExpressionValue) -> Self {
        self.derive(
            Operator::Subtract,
            other,
            self.value - other.value,
            terms::merged(&self.added_terms, &other.subtracted_terms),
            terms::merged(&self.subtracted_terms, &other.added_terms),
        )
    }

    /// `(self/other)`.
    ///
    /// Only the dividend's terms are scaled by the divisor; the divisor's own
    /// terms are not distributed.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] when `other` evaluates to zero.
    pub fn divide(&self, other: &ExpressionValue) -> Result<Self, ValueError> {
        if other.value == 0.0 {
            debug!("Refusing to divide {} by {}", self, other);
            return Err(ValueError::DivisionByZero);
        }

        Ok(self.derive(
            Operator::Divide,
            other,
            self.value / other.value,
            terms::scaled(&self.added_terms, other.value),
            terms::scaled(&self.subtracted_terms, other.value),
        ))
    }

    /// Apply `operator` with `self` on the left
    ///
    /// # Errors
    ///
    /// Fails only for a division by zero.
    pub fn combine(
        &self,
        operator: Operator,
        other: &ExpressionValue,
    ) -> Result<Self, ValueError> {
        match operator {
            Operator::Add => Ok(self.add(other)),
            Operator::Subtract => Ok(self.subtract(other)),
            Operator::Multiply => Ok(self.multiply(other)),
            Operator::Divide => self.divide(other),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn added_terms(&self) -> &[f64] {
        &self.added_terms
    }

    pub fn subtracted_terms(&self) -> &[f64] {
        &self.subtracted_terms
    }

    pub fn key(&self) -> ValueKey {
        ValueKey::from(self)
    }
}

impl PartialEq for ExpressionValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.added_terms == other.added_terms
            && self.subtracted_terms == other.subtracted_terms
    }
}
