//! Expression values: a number together with the derivation that produced it

mod core;
mod display;
mod errors;
mod key;
mod terms;

pub use self::core::{ExpressionValue, Operator};
pub use errors::ValueError;
pub use key::ValueKey;
