use thiserror::Error;

pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Shamir(#[from] sss::ShamirError),
    #[error("share {index} is not valid {encoding}")]
    Decode {
        index: usize,
        encoding: &'static str,
        #[source]
        source: DecodeError,
    },
    #[error("no shares given; use --shares=<share1>,<share2>,...")]
    MissingShares,
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}
