//! Shared macros for constructing core math primitives.

/// Simplifies constructing [`FieldElement`](crate::field_element::FieldElement)s
/// from byte literals.
///
/// ```
/// use gf256::prelude::*;
///
/// let a = fe!(42);
/// assert_eq!(a, FieldElement::from(42u8));
/// ```
#[macro_export]
macro_rules! fe {
    ($value:expr) => {
        $crate::field_element::FieldElement::new($value)
    };
}

/// Create a [`Vec`] of [`FieldElement`](crate::field_element::FieldElement)s.
///
/// ```
/// use gf256::prelude::*;
///
/// let repeated = fe_vec![7; 3];
/// assert_eq!(repeated, vec![fe!(7); 3]);
/// assert_eq!(fe_vec![1, 2], vec![fe!(1), fe!(2)]);
/// ```
#[macro_export]
macro_rules! fe_vec {
    ($b:expr; $n:expr) => {
        vec![$crate::field_element::FieldElement::new($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$($crate::field_element::FieldElement::new($b)),*]
    };
}

/// Construct a [`Polynomial`](crate::poly::Polynomial) from coefficients,
/// lowest degree first.
///
/// ```
/// use gf256::prelude::*;
///
/// let poly: Polynomial<FieldElement> = poly![1, 2, 3];
/// assert_eq!(poly.coefficients(), &[fe!(1), fe!(2), fe!(3)]);
/// ```
#[macro_export]
macro_rules! poly {
    ($($coeff:expr),+ $(,)?) => {{
        $crate::poly::Polynomial::from($crate::fe_vec![$($coeff),+])
    }};
}
