use gf256::prelude::*;
use log::{debug, trace};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::{
    error::{Result, ShamirError},
    params::validate_sharing_config,
    share::Share,
};

/// Shamir's secret sharing over GF(2^8), one random polynomial per secret
/// byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretSharing {
    parts: usize,
    threshold: usize,
}

impl SecretSharing {
    /// Initialize the scheme for `parts` shares, any `threshold` of which
    /// recover the secret.
    pub fn new(parts: usize, threshold: usize) -> Result<Self> {
        validate_sharing_config(parts, threshold)?;

        Ok(SecretSharing { parts, threshold })
    }

    pub fn parts(&self) -> usize {
        self.parts
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Split `secret` using the operating system's random source.
    pub fn split(&self, secret: &[u8]) -> Result<Vec<Share>> {
        self.split_with_rng(secret, &mut OsRng)
    }

    /// Split `secret` into [`Self::parts`] shares.
    ///
    /// Share `j` (zero based) gets x-coordinate `j + 1`; zero is where the
    /// secret itself lives. Byte `i` of every share is the evaluation of the
    /// polynomial hiding byte `i` of the secret, so each byte is protected
    /// by its own independent coefficients.
    pub fn split_with_rng<R>(
        &self,
        secret: &[u8],
        rng: &mut R,
    ) -> Result<Vec<Share>>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if secret.is_empty() {
            return Err(ShamirError::EmptySecret);
        }

        debug!(
            "splitting {} byte secret into {} shares with threshold {}",
            secret.len(),
            self.parts,
            self.threshold
        );

        let xs: Vec<FieldElement> = (1..=u8::MAX)
            .take(self.parts)
            .map(FieldElement::new)
            .collect();
        let mut shares: Vec<Share> = xs
            .iter()
            .map(|x| Share::blank(x.value(), secret.len()))
            .collect();

        let degree = self.threshold - 1;
        for (i, &byte) in secret.iter().enumerate() {
            let polynomial =
                Polynomial::random(FieldElement::new(byte), degree, &mut *rng)?;

            for (share, &x) in shares.iter_mut().zip(&xs) {
                share.values_mut()[i] = polynomial.evaluate(x).value();
            }
            trace!("byte {i}: evaluated at {} points", xs.len());
        }

        Ok(shares)
    }
}

/// Split `secret` into `parts` shares, any `threshold` of which recover it.
///
/// Parameter checks run before the secret is looked at, in this order:
/// parts against threshold, parts limit, threshold minimum, threshold
/// limit, then the empty secret.
pub fn split(secret: &[u8], parts: usize, threshold: usize) -> Result<Vec<Share>> {
    SecretSharing::new(parts, threshold)?.split(secret)
}

/// [`split`] with a caller-provided random source.
pub fn split_with_rng<R>(
    secret: &[u8],
    parts: usize,
    threshold: usize,
    rng: &mut R,
) -> Result<Vec<Share>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    SecretSharing::new(parts, threshold)?.split_with_rng(secret, rng)
}

/// Recover the secret from shares of a single split.
///
/// The shares must number at least the split's threshold and carry
/// distinct x-coordinates. Fewer shares cannot be detected: they still
/// interpolate to *some* byte string, just not the secret.
pub fn combine<S: AsRef<[u8]>>(shares: &[S]) -> Result<Vec<u8>> {
    let share_len = validate_shares(shares)?;
    debug!(
        "combining {} shares of {} bytes",
        shares.len(),
        share_len
    );

    let xs = x_coordinates(shares, share_len);
    interpolate_shares(shares, &xs, FieldElement::ZERO, share_len - 1)
}

/// Derive the share at x-coordinate `x` from existing shares, without
/// handing the secret to the caller.
///
/// Like [`combine`], this is only meaningful when given at least the
/// threshold number of shares.
pub fn reshare<S: AsRef<[u8]>>(shares: &[S], x: u8) -> Result<Share> {
    if x == 0 {
        return Err(ShamirError::InvalidShareIndex(x));
    }
    let share_len = validate_shares(shares)?;
    debug!("resharing {} shares at x = {x}", shares.len());

    let xs = x_coordinates(shares, share_len);
    let mut bytes =
        interpolate_shares(shares, &xs, FieldElement::new(x), share_len - 1)?;
    bytes.push(x);

    Ok(Share::from(bytes))
}

/// Check that the shares can be combined and return their common length.
fn validate_shares<S: AsRef<[u8]>>(shares: &[S]) -> Result<usize> {
    if shares.len() < 2 {
        return Err(ShamirError::InsufficientShares(shares.len()));
    }

    let share_len = shares[0].as_ref().len();
    if share_len < 2 {
        return Err(ShamirError::SharesTooShort(share_len));
    }

    if let Some((index, share)) = shares
        .iter()
        .enumerate()
        .find(|(_, share)| share.as_ref().len() != share_len)
    {
        return Err(ShamirError::InconsistentShareLength {
            index,
            expected: share_len,
            found: share.as_ref().len(),
        });
    }

    Ok(share_len)
}

fn x_coordinates<S: AsRef<[u8]>>(
    shares: &[S],
    share_len: usize,
) -> Vec<FieldElement> {
    shares
        .iter()
        .map(|share| FieldElement::new(share.as_ref()[share_len - 1]))
        .collect()
}

/// Interpolate every byte position of the shares at `x`.
fn interpolate_shares<S: AsRef<[u8]>>(
    shares: &[S],
    xs: &[FieldElement],
    x: FieldElement,
    secret_len: usize,
) -> Result<Vec<u8>> {
    let mut ys = vec![FieldElement::ZERO; shares.len()];
    let mut out = Vec::with_capacity(secret_len);

    for i in 0..secret_len {
        for (y, share) in ys.iter_mut().zip(shares) {
            *y = FieldElement::new(share.as_ref()[i]);
        }
        out.push(interpolate_at(xs, &ys, x)?.value());
    }

    Ok(out)
}
