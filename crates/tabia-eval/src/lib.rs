//! Static piece valuation: base material value plus piece-square bonus.

pub mod error;
pub mod evaluate;
pub mod tables;

pub use error::EvalError;
pub use evaluate::{evaluate, evaluate_tag, BASE_VALUE};
pub use tables::square_bonus;
