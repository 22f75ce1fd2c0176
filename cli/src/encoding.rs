//! Text encodings that make shares printable.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::ValueEnum;

use crate::error::DecodeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    /// Standard alphabet, padded.
    #[default]
    Base64,
    /// Lowercase hexadecimal.
    Hex,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
        }
    }

    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Base64 => STANDARD.encode(bytes),
            Encoding::Hex => hex::encode(bytes),
        }
    }

    pub fn decode(self, text: &str) -> Result<Vec<u8>, DecodeError> {
        match self {
            Encoding::Base64 => Ok(STANDARD.decode(text)?),
            Encoding::Hex => Ok(hex::decode(text)?),
        }
    }
}
