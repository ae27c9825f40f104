// src/app.rs
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use verstamp_core::writer::ArtifactWriter;
use verstamp_core::{Manifest, Target, VersionMetadata, render, verify};

use crate::cli::args::Args;
use crate::config::Config;
use crate::presentation;

pub fn run() -> Result<ExitCode> {
    let args = Args::parse();
    let config = Config::from(args);

    if config.out.is_some() && config.targets.len() > 1 {
        bail!("--out accepts a single target; use --out-dir for multiple targets");
    }

    let manifest = match &config.manifest_path {
        Some(path) => Manifest::load(path)
            .with_context(|| format!("failed to load manifest {}", path.display()))?,
        None => Manifest::default(),
    };

    let meta = config
        .overrides
        .clone()
        .or(manifest)
        .into_metadata()
        .context("invalid metadata input set")?;

    if config.check {
        run_check(&config, &meta)
    } else {
        run_generate(&config, &meta)
    }
}

fn run_generate(config: &Config, meta: &VersionMetadata) -> Result<ExitCode> {
    for target in &config.targets {
        let text = render::render(meta, *target)?;
        match artifact_path(config, meta, *target) {
            Some(path) => {
                let changed = ArtifactWriter::write_if_changed(&path, &text)?;
                presentation::report_write(&path, changed, config.quiet);
            }
            None => print!("{text}"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check(config: &Config, meta: &VersionMetadata) -> Result<ExitCode> {
    let mut all_current = true;
    for target in &config.targets {
        // Without an output location, check the conventional name in cwd.
        let path = artifact_path(config, meta, *target)
            .unwrap_or_else(|| PathBuf::from(target.default_file_name(meta)));
        let outcome = verify::check(meta, *target, &path)?;
        presentation::report_check(&path, &outcome);
        all_current &= outcome.is_up_to_date();
    }

    Ok(if all_current {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn artifact_path(config: &Config, meta: &VersionMetadata, target: Target) -> Option<PathBuf> {
    if let Some(out) = &config.out {
        Some(out.clone())
    } else {
        config
            .out_dir
            .as_ref()
            .map(|dir| dir.join(target.default_file_name(meta)))
    }
}
