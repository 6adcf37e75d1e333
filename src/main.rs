//! asset-literal: embed build-time assets as source constants
//!
//! Usage:
//!   asset-literal <OUTPUT> <SOURCE>
//!
//! `SOURCE` ending in `.png` becomes an RGBA pixel constant (rows bottom to
//! top), `.glsl` a byte-array constant. `OUTPUT` ending in `.rs` gets a Rust
//! fragment, anything else a C++ header. A Make-style `<OUTPUT>: <SOURCE>`
//! rule is always written beside `OUTPUT` with a `.d` extension.

mod asset;
mod convert;
mod depfile;
mod emit;
mod error;
#[cfg(test)]
mod testing;

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use convert::{convert, Outcome};

#[derive(Parser)]
#[command(name = "asset-literal", version)]
#[command(about = "Convert a PNG or GLSL asset into an embeddable constant")]
struct Cli {
    /// Generated fragment to write (`.rs` for Rust, otherwise C++)
    output: PathBuf,
    /// Asset to convert (`.png` or `.glsl`)
    source: PathBuf,
}

/// Plain stderr logging; colors only when writing to a terminal
fn log_subscriber<W>(
    filter: EnvFilter,
    ansi: bool,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Quiet unless RUST_LOG asks otherwise; build logs stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    log_subscriber(filter, std::io::stderr().is_terminal(), std::io::stderr).init();

    match convert(&cli.output, &cli.source)? {
        Outcome::Written { kind, ident } => {
            tracing::debug!(kind = kind.label(), ident = %ident, "done");
        }
        Outcome::DependencyOnly => {
            tracing::debug!(output = %cli.output.display(), "dependency file only");
        }
    }
    Ok(())
}
