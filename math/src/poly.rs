//! Polynomials over a finite field and Lagrange interpolation.
//!
//! Secret sharing hides each secret byte in the intercept of a freshly drawn
//! random polynomial; any `degree + 1` evaluations pin the intercept down
//! again through [`interpolate_at`].

use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{MathError, Result};
use crate::traits::FiniteField;

/// Polynomial with coefficients stored lowest degree first.
///
/// Coefficients are wiped when the polynomial is dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<FF: FiniteField> {
    coefficients: Vec<FF>,
}

impl<FF: FiniteField> Polynomial<FF> {
    /// Draw a polynomial of the given degree whose value at zero is
    /// `intercept`.
    ///
    /// The remaining `degree` coefficients are uniformly random bytes read
    /// from `rng`. A failing random source is reported, never papered over.
    pub fn random<R>(intercept: FF, degree: usize, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let mut random_bytes = vec![0u8; degree];
        if let Err(err) = rng.try_fill_bytes(&mut random_bytes) {
            random_bytes.zeroize();
            return Err(MathError::RandomSource(err));
        }

        let coefficients = std::iter::once(intercept)
            .chain(random_bytes.iter().map(|byte| FF::from(*byte)))
            .collect();
        random_bytes.zeroize();

        Ok(Self { coefficients })
    }

    pub fn coefficients(&self) -> &[FF] {
        &self.coefficients
    }

    /// The constant term, i.e. the value at zero.
    pub fn intercept(&self) -> FF {
        self.coefficients.first().copied().unwrap_or(FF::ZERO)
    }

    /// Nominal degree: one less than the number of coefficients. A leading
    /// coefficient that happens to be zero does not lower it.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Evaluate at `x` using Horner's scheme.
    pub fn evaluate(&self, x: FF) -> FF {
        if x.is_zero() {
            return self.intercept();
        }

        self.coefficients
            .iter()
            .rev()
            .fold(FF::ZERO, |acc, &coefficient| acc * x + coefficient)
    }
}

impl<FF: FiniteField> From<Vec<FF>> for Polynomial<FF> {
    fn from(coefficients: Vec<FF>) -> Self {
        Self { coefficients }
    }
}

impl<FF: FiniteField> Drop for Polynomial<FF> {
    fn drop(&mut self) {
        self.coefficients.zeroize();
    }
}

/// Evaluate, at `x`, the unique polynomial of degree `< xs.len()` passing
/// through the points `(xs[i], ys[i])`.
///
/// In characteristic 2 subtraction is addition, so every basis factor is
/// `(x + x_j) / (x_i + x_j)`. Two equal x-coordinates make a denominator
/// vanish and yield [`MathError::DivisionByZero`].
pub fn interpolate_at<FF: FiniteField>(
    xs: &[FF],
    ys: &[FF],
    x: FF,
) -> Result<FF> {
    if xs.len() != ys.len() {
        return Err(MathError::SampleLengthMismatch {
            x_samples: xs.len(),
            y_samples: ys.len(),
        });
    }

    let mut result = FF::ZERO;
    for (i, (&x_i, &y_i)) in xs.iter().zip(ys).enumerate() {
        let mut numerator = FF::ONE;
        let mut denominator = FF::ONE;
        for (j, &x_j) in xs.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= x + x_j;
            denominator *= x_i + x_j;
        }
        result += y_i * numerator.checked_div(denominator)?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use test_strategy::proptest;

    use super::*;
    use crate::prelude::*;

    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(
            &mut self,
            _dest: &mut [u8],
        ) -> core::result::Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy source exhausted",
            )))
        }
    }

    impl CryptoRng for FailingRng {}

    fn seeded_rng(seed: u8) -> ChaCha20Rng {
        ChaCha20Rng::from_seed([seed; 32])
    }

    #[test]
    fn polynomial_creation_and_evaluation() {
        let mut rng = seeded_rng(1);
        let p = Polynomial::random(fe!(42), 1, &mut rng).unwrap();

        assert_eq!(p.coefficients().len(), 2);
        assert_eq!(p.intercept(), fe!(42));
        assert_eq!(p.evaluate(FieldElement::ZERO), fe!(42));

        let x = fe!(1);
        let expected = fe!(42) + x * p.coefficients()[1];
        assert_eq!(p.evaluate(x), expected);
    }

    #[test]
    fn random_polynomial_has_requested_degree() {
        let mut rng = seeded_rng(2);
        for degree in [1, 2, 7, 254] {
            let p = Polynomial::random(fe!(9), degree, &mut rng).unwrap();
            assert_eq!(p.degree(), degree);
            assert_eq!(p.coefficients().len(), degree + 1);
            assert_eq!(p.coefficients()[0], fe!(9));
        }
    }

    #[test]
    fn same_seed_gives_same_coefficients() {
        let a = Polynomial::random(fe!(5), 4, &mut seeded_rng(3)).unwrap();
        let b = Polynomial::random(fe!(5), 4, &mut seeded_rng(3)).unwrap();
        let c = Polynomial::random(fe!(5), 4, &mut seeded_rng(4)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn random_source_failure_is_propagated() {
        let result = Polynomial::<FieldElement>::random(fe!(1), 2, &mut FailingRng);
        assert!(matches!(result, Err(MathError::RandomSource(_))));
    }

    #[test]
    fn horner_evaluation_matches_known_values() {
        // 1 + 2x + 3x^2 at x = 2: 1 + 4 + 3 * 4 = 1 ^ 4 ^ 12 = 9
        let p: Polynomial<FieldElement> = poly![1, 2, 3];
        assert_eq!(p.evaluate(fe!(2)), fe!(9));
        assert_eq!(p.evaluate(fe!(1)), fe!(1) + fe!(2) + fe!(3));
    }

    #[test]
    fn empty_polynomial_evaluates_to_zero() {
        let p = Polynomial::<FieldElement>::from(Vec::new());
        assert_eq!(p.degree(), 0);
        assert_eq!(p.evaluate(fe!(0)), FieldElement::ZERO);
        assert_eq!(p.evaluate(fe!(17)), FieldElement::ZERO);
    }

    #[proptest]
    fn horner_matches_power_sum(
        #[strategy(proptest::collection::vec(any::<u8>(), 1..16))]
        coefficients: Vec<u8>,
        x: u8,
    ) {
        let x = fe!(x);
        let p = Polynomial::from(
            coefficients.iter().copied().map(FieldElement::new).collect::<Vec<_>>(),
        );
        let expected: FieldElement = p
            .coefficients()
            .iter()
            .enumerate()
            .map(|(i, &c)| c * x.pow(i as u32))
            .sum();
        prop_assert_eq!(p.evaluate(x), expected);
    }

    #[test]
    fn polynomial_interpolation() {
        let mut rng = seeded_rng(5);
        for intercept in 0..=u8::MAX {
            let p = Polynomial::random(fe!(intercept), 2, &mut rng).unwrap();

            let xs = fe_vec![1, 2, 3];
            let ys: Vec<_> = xs.iter().map(|&x| p.evaluate(x)).collect();
            let out = interpolate_at(&xs, &ys, FieldElement::ZERO).unwrap();
            assert_eq!(out, fe!(intercept));
        }
    }

    #[proptest]
    fn interpolation_recovers_value_at_any_point(
        #[strategy(1usize..10)] degree: usize,
        seed: u8,
        intercept: u8,
        target: u8,
    ) {
        let p = Polynomial::random(fe!(intercept), degree, &mut seeded_rng(seed))
            .unwrap();
        let xs: Vec<FieldElement> =
            (1..=degree as u8 + 1).map(FieldElement::new).collect();
        let ys: Vec<_> = xs.iter().map(|&x| p.evaluate(x)).collect();

        let target = fe!(target);
        prop_assert_eq!(interpolate_at(&xs, &ys, target).unwrap(), p.evaluate(target));
    }

    #[test]
    fn duplicate_x_coordinates_divide_by_zero() {
        let xs = fe_vec![1, 2, 1];
        let ys = fe_vec![10, 20, 30];
        assert!(matches!(
            interpolate_at(&xs, &ys, FieldElement::ZERO),
            Err(MathError::DivisionByZero)
        ));
    }

    #[test]
    fn mismatched_sample_lengths_are_rejected() {
        let xs = fe_vec![1, 2, 3];
        let ys = fe_vec![10, 20];
        assert!(matches!(
            interpolate_at(&xs, &ys, FieldElement::ZERO),
            Err(MathError::SampleLengthMismatch {
                x_samples: 3,
                y_samples: 2
            })
        ));
    }
}
