use std::fmt;
use std::iter::Product;
use std::iter::Sum;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;
use std::str::FromStr;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use zeroize::Zeroize;

use super::{error::ParseFieldElementError, traits::*};

/// Powers of the generator: `EXP[i] == g^i`.
///
/// The table is twice the group order long so that the sum of two
/// logarithms can index it directly.
const EXP: [u8; 2 * FieldElement::ORDER] = exp_table();

/// Discrete logarithms to the base of the generator. `LOG[0]` is unused.
const LOG: [u8; 256] = log_table();

const fn exp_table() -> [u8; 2 * FieldElement::ORDER] {
    let mut table = [0u8; 2 * FieldElement::ORDER];
    let mut acc = 1u8;
    let mut i = 0;
    while i < table.len() {
        table[i] = acc;
        acc = FieldElement::carryless_mul(acc, FieldElement::GENERATOR);
        i += 1;
    }
    table
}

const fn log_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < FieldElement::ORDER {
        table[EXP[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Element of GF(2^8), the Rijndael field `GF(2)[x] / (x^8 + x^4 + x^3 + x + 1)`.
///
/// The byte's bits are the coefficients of a polynomial of degree at most 7.
/// Addition and subtraction are both XOR, since the field has characteristic 2.
#[derive(Debug, Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct FieldElement(u8);

impl Zeroize for FieldElement {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::new(u8::deserialize(deserializer)?))
    }
}

impl FieldElement {
    pub const BYTES: usize = 1;

    /// The reduction polynomial `x^8 + x^4 + x^3 + x + 1`.
    pub const MODULUS: u16 = 0x11B;

    /// Order of the multiplicative group.
    pub const ORDER: usize = 255;

    /// Low byte of [`Self::MODULUS`], XORed in whenever a doubling overflows.
    const REDUCTION: u8 = 0x1B;

    /// `x + 1`, a generator of the multiplicative group.
    const GENERATOR: u8 = 0x03;

    #[inline]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    pub const fn generator() -> Self {
        Self(Self::GENERATOR)
    }

    /// Shift-and-add multiplication modulo [`Self::MODULUS`].
    ///
    /// `a` is doubled once per bit of `b`, reducing by `0x1B` whenever its
    /// high bit was set before the shift; the product accumulates `a`
    /// whenever the low bit of `b` is set. Runs at most 8 rounds.
    pub const fn carryless_mul(mut a: u8, mut b: u8) -> u8 {
        let mut product = 0u8;
        while b != 0 {
            if b & 1 == 1 {
                product ^= a;
            }
            let overflow = a & 0x80 != 0;
            a <<= 1;
            if overflow {
                a ^= Self::REDUCTION;
            }
            b >>= 1;
        }
        product
    }

    /// Inverse of a nonzero element by lookup in the log/exp tables.
    #[inline]
    const fn table_inverse(&self) -> Self {
        Self(EXP[Self::ORDER - LOG[self.0 as usize] as usize])
    }

    #[must_use]
    pub const fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::ONE;
        }
        if self.0 == 0 {
            return Self::ZERO;
        }
        let log = LOG[self.0 as usize] as u64 * exp as u64;
        Self(EXP[(log % Self::ORDER as u64) as usize])
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::LowerHex for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for FieldElement {
    type Err = ParseFieldElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>()
            .map(Self::new)
            .map_err(ParseFieldElementError::ParseU8Error)
    }
}

impl From<u8> for FieldElement {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<FieldElement> for u8 {
    fn from(elem: FieldElement) -> Self {
        elem.0
    }
}

impl From<&FieldElement> for u8 {
    fn from(elem: &FieldElement) -> Self {
        elem.0
    }
}

impl Inverse for FieldElement {
    #[inline]
    fn try_inverse(&self) -> Option<Self> {
        (!self.is_zero()).then(|| self.table_inverse())
    }
}

impl FiniteField for FieldElement {}

impl Zero for FieldElement {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ConstZero for FieldElement {
    const ZERO: Self = Self::new(0);
}

impl One for FieldElement {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl ConstOne for FieldElement {
    const ONE: Self = Self::new(1);
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Add for FieldElement {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for FieldElement {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for FieldElement {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl SubAssign for FieldElement {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl Neg for FieldElement {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self(Self::carryless_mul(self.0, rhs.0))
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Sum for FieldElement {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Product for FieldElement {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}
