use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Sub;
use std::ops::SubAssign;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::de::DeserializeOwned;
use serde::Serialize;
use zeroize::Zeroize;

use crate::error::{MathError, Result};

pub trait Inverse
where
    Self: Sized + Zero,
{
    /// Multiplicative inverse, `None` for zero.
    fn try_inverse(&self) -> Option<Self>;

    fn inverse_or_zero(&self) -> Self {
        self.try_inverse().unwrap_or_else(Self::zero)
    }
}

pub trait AddGroup:
    Copy
    + ConstZero
    + Zero
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
}

impl<T> AddGroup for T where
    T: Copy
        + ConstZero
        + Zero
        + Add<Output = T>
        + Sub<Output = T>
        + AddAssign
        + SubAssign
{
}

pub trait MulGroup:
    Copy + ConstOne + One + Mul<Output = Self> + MulAssign
{
}

impl<T> MulGroup for T where
    T: Copy + ConstOne + One + Mul<Output = T> + MulAssign
{
}

pub trait FieldCore:
    Debug + Display + Default + Eq + Serialize + DeserializeOwned + Hash + Zeroize
{
}

impl<T> FieldCore for T where
    T: Debug
        + Display
        + Default
        + Eq
        + Serialize
        + DeserializeOwned
        + Hash
        + Zeroize
{
}

/// Conversions between a field element and the byte it is encoded as.
pub trait ByteEncoding: From<u8> + Into<u8> {}

impl<T> ByteEncoding for T where T: From<u8> + Into<u8> {}

pub trait FiniteField:
    AddGroup + MulGroup + FieldCore + ByteEncoding + Inverse + Send + Sync
{
    /// Divide by `rhs`, failing when `rhs` is zero.
    fn checked_div(self, rhs: Self) -> Result<Self> {
        rhs.try_inverse()
            .map(|inverse| self * inverse)
            .ok_or(MathError::DivisionByZero)
    }

    #[inline(always)]
    fn square(self) -> Self {
        self * self
    }
}
