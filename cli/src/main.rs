//! Command line front end: split a secret into printable shares, or
//! combine printed shares back into the secret.

mod encoding;
mod error;
mod logging;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::debug;

use crate::encoding::Encoding;
use crate::error::{CliError, Result};
use crate::logging::LogLevel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum Mode {
    #[default]
    Split,
    Combine,
}

#[derive(Debug, Parser)]
#[command(name = "sss", version, about = "Shamir's secret sharing over GF(2^8)")]
struct Cli {
    /// Split a secret or combine shares.
    #[arg(long, value_enum, default_value_t = Mode::Split)]
    mode: Mode,

    /// Text encoding of the shares.
    #[arg(long, value_enum, default_value_t = Encoding::Base64)]
    encoding: Encoding,

    /// The secret to split; the first line of stdin is used when omitted.
    #[arg(long)]
    secret: Option<String>,

    /// Comma-separated shares to combine.
    #[arg(long, value_delimiter = ',')]
    shares: Vec<String>,

    /// Total number of shares.
    #[arg(short = 'n', long = "parts", default_value_t = 5)]
    parts: usize,

    /// Number of shares needed to reconstruct the secret.
    #[arg(short = 't', long = "threshold", default_value_t = 3)]
    threshold: usize,

    /// Log verbosity; falls back to `RUST_LOG`, then `warn`.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn read_secret(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn split_secret(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let secret = match &cli.secret {
        Some(secret) => secret.clone(),
        None => read_secret(input)?,
    };

    let shares = sss::split(secret.as_bytes(), cli.parts, cli.threshold)?;
    debug!("writing {} {} shares", shares.len(), cli.encoding.name());
    for share in &shares {
        writeln!(out, "{}", cli.encoding.encode(share.as_bytes()))?;
    }
    Ok(())
}

fn combine_shares(cli: &Cli, out: &mut impl Write) -> Result<()> {
    if cli.shares.is_empty() {
        return Err(CliError::MissingShares);
    }

    let shares = cli
        .shares
        .iter()
        .enumerate()
        .map(|(index, text)| {
            cli.encoding
                .decode(text.trim())
                .map_err(|source| CliError::Decode {
                    index,
                    encoding: cli.encoding.name(),
                    source,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    let secret = sss::combine(&shares)?;
    writeln!(out, "{}", String::from_utf8_lossy(&secret))?;
    Ok(())
}

fn run(cli: &Cli, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    match cli.mode {
        Mode::Split => split_secret(cli, input, out),
        Mode::Combine => combine_shares(cli, out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_log(cli.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&cli, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("sss").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    fn run_to_string(cli: &Cli, stdin: &str) -> Result<String> {
        let mut out = Vec::new();
        run(cli, &mut Cursor::new(stdin.as_bytes()), &mut out)?;
        Ok(String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn defaults_match_original_tool() {
        let cli = parse(&[]);
        assert_eq!(cli.mode, Mode::Split);
        assert_eq!(cli.encoding, Encoding::Base64);
        assert_eq!(cli.parts, 5);
        assert_eq!(cli.threshold, 3);
        assert!(cli.secret.is_none());
        assert!(cli.shares.is_empty());
    }

    #[test]
    fn split_then_combine_round_trips() {
        for encoding in ["base64", "hex"] {
            let split = parse(&["--secret", "correct horse", "--encoding", encoding]);
            let printed = run_to_string(&split, "").unwrap();
            let lines: Vec<&str> = printed.lines().collect();
            assert_eq!(lines.len(), 5);

            let joined = lines[1..4].join(",");
            let combine = parse(&[
                "--mode",
                "combine",
                "--encoding",
                encoding,
                "--shares",
                &joined,
            ]);
            assert_eq!(run_to_string(&combine, "").unwrap(), "correct horse\n");
        }
    }

    #[test]
    fn secret_is_read_from_stdin_when_absent() {
        let split = parse(&["-n", "3", "-t", "2", "--encoding", "hex"]);
        let printed = run_to_string(&split, "  from stdin \nignored\n").unwrap();
        let lines: Vec<&str> = printed.lines().collect();
        assert_eq!(lines.len(), 3);
        // "from stdin" is 10 bytes, plus the x-coordinate, hex encoded
        assert!(lines.iter().all(|line| line.len() == 22));

        let shares = lines[..2].join(",");
        let combine = parse(&["--mode", "combine", "--encoding", "hex", "--shares", &shares]);
        assert_eq!(run_to_string(&combine, "").unwrap(), "from stdin\n");
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let split = parse(&["--secret", "x", "-n", "2", "-t", "3"]);
        assert!(matches!(
            run_to_string(&split, ""),
            Err(CliError::Shamir(sss::ShamirError::PartsLessThanThreshold { .. }))
        ));
    }

    #[test]
    fn combine_requires_shares() {
        let combine = parse(&["--mode", "combine"]);
        assert!(matches!(
            run_to_string(&combine, ""),
            Err(CliError::MissingShares)
        ));
    }

    #[test]
    fn undecodable_share_names_its_position() {
        let combine = parse(&["--mode", "combine", "--encoding", "hex", "--shares", "0a01,zz"]);
        assert!(matches!(
            run_to_string(&combine, ""),
            Err(CliError::Decode { index: 1, .. })
        ));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["sss", "--mode", "shuffle"]).is_err());
    }
}
