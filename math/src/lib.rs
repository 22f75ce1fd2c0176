//! Arithmetic in GF(2^8) and the polynomials built over it.

pub mod error;
pub mod field_element;
mod macros;
pub mod poly;
pub mod prelude;
pub mod traits;

pub use error::{MathError, Result};
pub use field_element::FieldElement;
pub use poly::Polynomial;
