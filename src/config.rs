// src/config.rs
use std::path::PathBuf;

use verstamp_core::{Manifest, Target};

use crate::cli::args::Args;

/// Resolved run configuration built from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    pub manifest_path: Option<PathBuf>,
    /// Metadata fields given as flags; layered over the manifest.
    pub overrides: Manifest,
    pub targets: Vec<Target>,
    pub out_dir: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub check: bool,
    pub quiet: bool,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let overrides = Manifest {
            version: args.set_version.map(|v| v.0.to_string()),
            date: args.date.map(|d| d.0.to_string()),
            product: args.product,
            company: args.company,
            copyright: args.copyright,
            trademarks: args.trademarks,
            domain: args.domain,
            description: args.description,
            original_filename: args.original_filename,
            prefix: args.prefix,
            ..Manifest::default()
        };

        // Deduplicate targets while keeping the order they were given in.
        let mut targets: Vec<Target> = Vec::new();
        for t in args.target {
            let t = Target::from(t);
            if !targets.contains(&t) {
                targets.push(t);
            }
        }

        Self {
            manifest_path: args.manifest,
            overrides,
            targets,
            out_dir: args.out_dir,
            out: args.out,
            check: args.check,
            quiet: args.quiet,
        }
    }
}
