//! Lexicon command handlers (`lexicon show`, `lexicon init`).

use crate::lexicon::Lexicon;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the effective lexicon as YAML.
///
/// Shows the vocabulary a run would actually use: the given file merged
/// over nothing, or the built-ins when no file is given.
pub fn run_lexicon_show(path: Option<&Path>) -> Result<()> {
    let lexicon = match path {
        Some(path) => {
            eprintln!("# Loaded from: {}", path.display());
            Lexicon::load(path)?
        }
        None => {
            eprintln!("# No lexicon file given; showing built-ins");
            Lexicon::with_builtins()
        }
    };

    let yaml =
        serde_yaml::to_string(&lexicon.to_file()).context("failed to serialize lexicon")?;
    print!("{yaml}");
    Ok(())
}

/// Write the built-in lexicon to `vehicle-lexicon.yaml` as a starting
/// point for customization. Refuses to overwrite an existing file.
pub fn run_lexicon_init(output: Option<PathBuf>) -> Result<()> {
    let target = match output {
        Some(path) => path,
        None => std::env::current_dir()
            .context("cannot determine current directory")?
            .join("vehicle-lexicon.yaml"),
    };
    if target.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }

    let yaml = serde_yaml::to_string(&Lexicon::with_builtins().to_file())
        .context("failed to serialize lexicon")?;
    std::fs::write(&target, yaml)
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_loadable_lexicon() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("lexicon.yaml");

        run_lexicon_init(Some(target.clone())).unwrap();

        let lexicon = Lexicon::load(&target).unwrap();
        assert!(lexicon.is_color_word("silver"));
        assert_eq!(lexicon.canonical_make("chevy"), "chevrolet");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("lexicon.yaml");
        std::fs::write(&target, "body_words: []\n").unwrap();

        assert!(run_lexicon_init(Some(target)).is_err());
    }
}
