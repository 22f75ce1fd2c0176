pub use crate::{fe, fe_vec, poly};
pub use crate::{
    field_element::FieldElement,
    poly::{interpolate_at, Polynomial},
    traits::{FiniteField, Inverse},
};
pub use num_traits::{ConstOne, ConstZero, One, Zero};
