// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use super::parsers::{DateArg, VersionArg};
use super::value_enum::CliTarget;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "verstamp",
    version = crate::VERSION,
    about = "Deterministic version/product metadata stamping for build and resource tooling"
)]
pub struct Args {
    /// Manifest file describing the product (JSON; YAML with .yaml/.yml)
    #[arg(value_hint = ValueHint::FilePath)]
    pub manifest: Option<PathBuf>,

    /// Artifact formats to render (comma separated, e.g. header,rc,json)
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_value = "header",
        help_heading = "Output"
    )]
    pub target: Vec<CliTarget>,

    /// Write artifacts into this directory using conventional file names
    #[arg(long, value_hint = ValueHint::DirPath, help_heading = "Output")]
    pub out_dir: Option<PathBuf>,

    /// Write a single artifact to this exact path
    #[arg(long, conflicts_with = "out_dir", value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub out: Option<PathBuf>,

    /// Verify artifacts on disk instead of writing; exits nonzero when stale
    #[arg(long, help_heading = "Behavior")]
    pub check: bool,

    /// Suppress status messages on stderr
    #[arg(long, short = 'q', help_heading = "Behavior")]
    pub quiet: bool,

    /// Version triple, e.g. 2.7.1 (overrides the manifest)
    #[arg(long = "set-version", value_name = "X.Y.Z", help_heading = "Metadata")]
    pub set_version: Option<VersionArg>,

    /// Release date (MM-DD-YYYY or YYYY-MM-DD; defaults to today)
    #[arg(long, help_heading = "Metadata")]
    pub date: Option<DateArg>,

    /// Product name
    #[arg(long, help_heading = "Metadata")]
    pub product: Option<String>,

    /// Company name
    #[arg(long, help_heading = "Metadata")]
    pub company: Option<String>,

    /// Legal copyright notice
    #[arg(long, help_heading = "Metadata")]
    pub copyright: Option<String>,

    /// Legal trademarks notice
    #[arg(long, help_heading = "Metadata")]
    pub trademarks: Option<String>,

    /// Company domain URL
    #[arg(long, help_heading = "Metadata")]
    pub domain: Option<String>,

    /// File description shown in resource blocks and about-dialogs
    #[arg(long, help_heading = "Metadata")]
    pub description: Option<String>,

    /// Original filename of the shipped binary, e.g. app.exe
    #[arg(long = "original-filename", help_heading = "Metadata")]
    pub original_filename: Option<String>,

    /// Macro prefix for header artifacts (defaults to the filename stem)
    #[arg(long, help_heading = "Metadata")]
    pub prefix: Option<String>,
}
