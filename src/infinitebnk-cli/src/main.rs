//! infinitebnk - extract Wwise SoundBanks from packed asset module dumps

mod cli;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};

use infinitebnk::{
    csv, module, Extractor, ManifestModule, ModuleSource, Outcome, Report, TagNames,
    TAG_TYPE_SOUNDBANK,
};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    if !args.deploy_dir.is_dir() {
        bail!("{}", invalid_deploy_message(&args.deploy_dir));
    }
    let deploy_dir = args
        .deploy_dir
        .canonicalize()
        .context("resolving deploy folder")?;
    println!("Using path to deploy folder: {}", deploy_dir.display());

    let names = load_tagnames(args.tagnames.as_deref());
    let modules = load_modules(&deploy_dir);

    if args.csv {
        let mut out = io::stdout().lock();
        csv::write_items(&mut out, modules.iter().map(|m| m as &dyn ModuleSource))
            .context("writing CSV")?;
        return Ok(());
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("creating extraction folder {}", args.output.display()))?;
    let extract_root = args
        .output
        .canonicalize()
        .context("resolving extraction folder")?;
    println!("Using extraction folder: {}", extract_root.display());

    let extractor = Extractor::new(&extract_root, &names);
    let mut report = Report::default();

    for module in &modules {
        println!("Scanning module {}", module.path().display());
        report.module_scanned(module.path());
        for item in module.items() {
            if item.tag_type != TAG_TYPE_SOUNDBANK {
                continue;
            }
            let outcome = extractor.extract_item(module, item);
            log_outcome(item.asset_id, &outcome);
            report.record(&outcome);
        }
    }

    println!("{}", report.summary());
    println!("All done.");
    Ok(())
}

/// Error text for a bad deploy path, with the usage line the original
/// parser would have shown.
fn invalid_deploy_message(path: &Path) -> String {
    format!(
        "specified path to deploy folder is invalid: {}\n{}",
        path.display(),
        cli::Args::command().render_usage()
    )
}

/// Load the tagnames index; failure degrades to hex-named output.
fn load_tagnames(path: Option<&Path>) -> TagNames {
    let Some(path) = path else {
        println!(
            "Warning: path to tagnames is unspecified. \
             All extracted SoundBanks will use hexadecimal tag ID as name."
        );
        return TagNames::default();
    };

    println!("Loading tag ID to path mapping from {}", path.display());
    match TagNames::load(path) {
        Ok(names) => {
            println!("Loaded {} SoundBank tag ID to path mappings", names.len());
            names
        }
        Err(err) => {
            eprintln!(
                "Warning: could not load tagnames from {}: {err}",
                path.display()
            );
            TagNames::default()
        }
    }
}

/// Open every module dump under the deploy folder, skipping unreadable ones.
fn load_modules(deploy_dir: &Path) -> Vec<ManifestModule> {
    let mut modules = Vec::new();
    for manifest in module::find_manifests(deploy_dir) {
        println!("Loading module: {}", manifest.display());
        match ManifestModule::open(&manifest) {
            Ok(module) => modules.push(module),
            Err(err) => eprintln!("Could not load module {}: {err}", manifest.display()),
        }
    }
    eprintln!("Loaded {} modules", modules.len());
    modules
}

fn log_outcome(asset_id: u32, outcome: &Outcome) {
    match outcome {
        Outcome::Extracted { path, bytes } => {
            println!("Extracted {} ({bytes} bytes)", path.display());
        }
        Outcome::SkippedMissing => {
            println!("Skipped missing SoundBank from tag asset {asset_id:#010x}");
        }
        Outcome::SkippedEmpty => {
            println!("Skipped empty SoundBank from tag asset {asset_id:#010x}");
        }
        Outcome::Failed(err) => {
            eprintln!("Error: failed extracting tag asset {asset_id:#010x}: {err}");
        }
    }
}
