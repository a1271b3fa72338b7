use anyhow::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::logic::extract::AnnotationExtractor;
use crate::logic::parsing::{ManifestParser, YamlParser};
use crate::logic::quoting::shell_quote;
use crate::models::ControllerOverride;

#[derive(Args, Debug)]
pub struct ControllerMetaArgs {
    #[arg(help = "Path to the Secret manifest to inspect")]
    pub secret_path: PathBuf,
}

pub fn run(args: ControllerMetaArgs) -> Result<()> {
    let parser = YamlParser;
    let stdout = io::stdout();
    run_with(&args, Some(&parser), &mut stdout.lock())
}

/// Extracts the override for `args` and writes it to `out`.
pub fn run_with(
    args: &ControllerMetaArgs,
    parser: Option<&dyn ManifestParser>,
    out: &mut impl Write,
) -> Result<()> {
    let found = AnnotationExtractor::new(parser).extract(&args.secret_path);
    log::info!("controller override for {:?}: {:?}", args.secret_path, found);
    emit(out, &found)
}

/// Writes one `key=value` line per override field, values shell-quoted.
pub fn emit(out: &mut impl Write, found: &ControllerOverride) -> Result<()> {
    for (key, value) in found.entries() {
        writeln!(out, "{}={}", key, shell_quote(value))?;
    }
    out.flush()?;
    Ok(())
}
