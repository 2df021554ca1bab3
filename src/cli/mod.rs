pub mod completions;
pub mod init;
pub mod list;
pub mod parse;
pub mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILENAME};

/// bible - Card records from freeform set design documents
#[derive(Parser, Debug)]
#[command(name = "bible")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show debug logging (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a design document and write the card export
    Parse(parse::ParseArgs),

    /// List cards with their derived group and colors
    List(list::ListArgs),

    /// Report malformed headers, empty cards, and duplicate ids
    Validate(validate::ValidateArgs),

    /// Initialize a project (generates bible.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the manifest from the working directory and pick the input path.
pub(crate) fn resolve_input(input: Option<&Path>) -> Result<(Manifest, PathBuf)> {
    resolve_input_in(Path::new("."), input)
}

/// Pick the input path, consulting `bible.yaml` in `dir`.
///
/// An explicit path on the command line wins over `input:` in bible.yaml.
/// With an explicit path a broken manifest is logged and replaced by
/// defaults; without one it is an error.
pub(crate) fn resolve_input_in(dir: &Path, input: Option<&Path>) -> Result<(Manifest, PathBuf)> {
    match input {
        Some(path) => {
            let manifest = Manifest::discover(dir).unwrap_or_else(|e| {
                log::warn!("ignoring {}: {}", MANIFEST_FILENAME, e);
                Manifest::default()
            });
            Ok((manifest, path.to_path_buf()))
        }
        None => {
            let manifest = Manifest::discover(dir)?;
            let path = manifest.input.clone();
            Ok((manifest, path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BibleError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_input_tolerates_broken_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "input: [unclosed").unwrap();

        let (manifest, path) =
            resolve_input_in(dir.path(), Some(Path::new("other.md"))).unwrap();

        assert_eq!(path, PathBuf::from("other.md"));
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_manifest_input_requires_valid_manifest() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "input: [unclosed").unwrap();

        let result = resolve_input_in(dir.path(), None);

        assert!(matches!(result, Err(BibleError::Config { .. })));
    }

    #[test]
    fn test_manifest_input_used_when_no_path_given() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(MANIFEST_FILENAME), "input: alara.md\n").unwrap();

        let (_, path) = resolve_input_in(dir.path(), None).unwrap();

        assert_eq!(path, PathBuf::from("alara.md"));
    }
}
