use serde::{Deserialize, Serialize};

/// One share of a split secret.
///
/// Byte layout: one evaluation per secret byte, followed by the share's
/// x-coordinate. A share of an `n` byte secret is therefore `n + 1` bytes
/// long, and serializes as exactly those bytes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Share(Vec<u8>);

impl Share {
    /// A share for x-coordinate `x` whose values are still all zero.
    pub(crate) fn blank(x: u8, secret_len: usize) -> Self {
        let mut bytes = vec![0u8; secret_len + 1];
        bytes[secret_len] = x;
        Self(bytes)
    }

    /// The x-coordinate, `None` only for an empty share.
    pub fn x(&self) -> Option<u8> {
        self.0.last().copied()
    }

    /// The evaluations, one per secret byte.
    pub fn values(&self) -> &[u8] {
        self.0.split_last().map_or(&[][..], |(_, values)| values)
    }

    pub(crate) fn values_mut(&mut self) -> &mut [u8] {
        match self.0.split_last_mut() {
            Some((_, values)) => values,
            None => &mut [],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Share {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Share {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Share {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<Share> for Vec<u8> {
    fn from(share: Share) -> Self {
        share.0
    }
}
