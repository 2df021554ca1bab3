//! Init command implementation.
//!
//! Writes a `bible.yaml` manifest, pointing `input` at the first markdown
//! or text file found in the directory when there is one.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{BibleError, Result};
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, Printer};

/// Initialize a project by generating a bible.yaml manifest
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing bible.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    if manifest_path.exists() && !args.force {
        return Err(BibleError::Config {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut manifest = Manifest::default();
    if let Some(doc) = find_document(&args.path)? {
        printer.info("Found", &display_path(&doc));
        manifest.input = doc;
    }

    fs::write(&manifest_path, manifest.to_yaml()?).map_err(|e| BibleError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.status("Created", &display_path(&manifest_path));

    Ok(())
}

/// First `.md` or `.txt` file in `dir`, by name, relative to `dir`.
fn find_document(dir: &Path) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| BibleError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to read directory: {}", e),
    })?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("md") | Some("txt")
            )
        })
        .filter_map(|path| path.file_name().map(PathBuf::from))
        .collect();

    candidates.sort();
    Ok(candidates.into_iter().next())
}
