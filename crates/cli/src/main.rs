// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod output;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use color_eyre::Result;
use error::CliError;
use output::{Format, parse_declarations, render};
use postfix_transport::{PostfixAugeas, TransportDeclaration};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_log::AsTrace;

/// Postfix transport compiler - turns transport map declarations into augeas edits
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file holding one declaration or an array of them (`-` reads stdin)
    input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Directory holding the Postfix augeas lenses, if not on the default load path
    #[arg(long)]
    lens_dir: Option<PathBuf>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn augeas(&self) -> PostfixAugeas {
        self.lens_dir
            .as_ref()
            .map_or_else(PostfixAugeas::new, |dir| {
                PostfixAugeas::with_lens_dir(dir.as_path())
            })
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    // Logs go to stderr; stdout carries the rendered edits
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.log_level().to_string())),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let input: String = read_input(&args.input)?;
    let rendered: String = run(&args, &input)?;

    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .map_err(CliError::Write)?;

    Ok(())
}

fn run(args: &Args, input: &str) -> Result<String, CliError> {
    let declarations: Vec<TransportDeclaration> = parse_declarations(input)?;
    let rendered: String = render(args.format, &args.augeas(), &declarations)?;
    info!("Compiled {} declaration(s)", declarations.len());
    Ok(rendered)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut input: String = String::new();
    if path == "-" {
        debug!("Reading declarations from stdin");
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|source| CliError::Read {
                path: String::from("<stdin>"),
                source,
            })?;
    } else {
        debug!("Reading declarations from: {}", path);
        input = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        })?;
    }
    Ok(input)
}
