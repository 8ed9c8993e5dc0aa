//! Argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use forge_diagnostic::emitter::ColorMode;
use forge_ir::TypeKind;
use forge_scan::Builder;

use crate::commands::{check_crate, explain_error, generate_crate};

#[derive(Parser, Debug)]
#[command(name = "forgec", version)]
#[command(about = "Generate id-based dispatchers for #[factory] types")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a crate and report problems with its `#[factory]` tags
    Check {
        #[command(flatten)]
        scan: ScanArgs,
    },
    /// Scan a crate and write one dispatcher file per capability type
    Generate {
        #[command(flatten)]
        scan: ScanArgs,

        /// Directory the dispatchers are written to
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,
    },
    /// Show the documentation for an error code
    Explain {
        /// Error code, e.g. F2001
        code: String,
    },
}

/// Options shared by every command that scans a crate.
#[derive(Args, Clone, Debug)]
pub struct ScanArgs {
    /// Crate root file, e.g. `src/lib.rs`
    pub root: PathBuf,

    /// Capability type from another crate, e.g. `menu::Meal=interface`
    #[arg(long = "extern", value_name = "PATH=KIND", value_parser = parse_extern)]
    pub externs: Vec<(String, TypeKind)>,

    /// Diagnostic output format
    #[arg(long, value_name = "human|json", default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// When to color human-readable diagnostics
    #[arg(long, value_name = "auto|always|never", default_value = "auto", value_parser = parse_color)]
    pub color: ColorMode,

    /// Stop reporting after this many errors (0 = no limit)
    #[arg(long, default_value_t = 10)]
    pub error_limit: usize,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl Cli {
    /// Run the selected command and return the process exit code.
    pub fn run(self) -> i32 {
        match self.command {
            Command::Check { scan } => check_crate(&scan),
            Command::Generate { scan, out_dir } => generate_crate(&scan, &out_dir),
            Command::Explain { code } => explain_error(&code),
        }
    }
}

impl ScanArgs {
    /// A scan builder for these options. Never prints `rerun-if-changed`.
    pub fn builder(&self) -> Builder {
        let mut builder = Builder::new()
            .root(&self.root)
            .color(self.color)
            .error_limit(self.error_limit)
            .rerun_if_changed(false);
        for (path, kind) in &self.externs {
            builder = builder.extern_type(path, *kind);
        }
        builder
    }
}

fn parse_extern(arg: &str) -> Result<(String, TypeKind), String> {
    let (path, kind) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `PATH=KIND`, found `{arg}`"))?;
    let kind = match kind.trim() {
        "interface" | "trait" => TypeKind::Interface,
        "class" | "type" => TypeKind::Class,
        other => {
            return Err(format!(
                "unknown kind `{other}`, expected `interface` or `class`"
            ))
        }
    };
    Ok((path.trim().to_string(), kind))
}

fn parse_format(arg: &str) -> Result<OutputFormat, String> {
    match arg {
        "human" => Ok(OutputFormat::Human),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!("unknown format `{other}`, expected `human` or `json`")),
    }
}

fn parse_color(arg: &str) -> Result<ColorMode, String> {
    match arg {
        "auto" => Ok(ColorMode::Auto),
        "always" => Ok(ColorMode::Always),
        "never" => Ok(ColorMode::Never),
        other => Err(format!(
            "unknown color mode `{other}`, expected `auto`, `always`, or `never`"
        )),
    }
}

#[cfg(test)]
mod tests;
