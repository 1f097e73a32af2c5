//! Vehicle vocabulary tables used by the normalizer.
//!
//! The lexicon holds three word-membership sets (body styles, trim
//! levels, colors) and an alias table mapping make synonyms to canonical
//! manufacturer names. All entries are lowercase with no surrounding
//! whitespace. The table is fixed at process start; analysis code only
//! performs membership and mapping lookups.

use crate::error::{Result, VehicleEvalError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Built-in body-style words stripped from descriptions.
const BODY_WORDS: &[&str] = &[
    "sedan",
    "coupe",
    "convertible",
    "wagon",
    "hatchback",
    "suv",
    "van",
    "cab",
    "crew",
    "regular",
    "extended",
    "cargo",
    "minivan",
    "roadster",
    "cabriolet",
    "car",
    "truck",
];

/// Built-in trim-level words stripped from descriptions.
const TRIM_WORDS: &[&str] = &[
    "hybrid",
    "sport",
    "gt",
    "ss",
    "srt",
    "rt",
    "lx",
    "ex",
    "le",
    "v8",
    "v6",
    "v12",
    "db9",
    "zr1",
    "z06",
    "xkr",
    "xk",
    "touring",
    "supersports",
    "super",
    "gti",
    "hse",
    "awd",
    "ff",
    "xl",
    "xlt",
    "lt",
    "ls",
    "sv",
    "rs",
    "rsx",
    "type",
    "series",
    "class",
];

/// Built-in color words.
const COLOR_WORDS: &[&str] = &[
    "black", "white", "silver", "grey", "gray", "blue", "red", "green", "yellow", "gold", "orange",
    "brown", "beige", "maroon", "pink", "purple", "burgundy", "tan", "teal",
];

/// Built-in make-synonym table (alias, canonical).
const MAKE_SYNONYMS: &[(&str, &str)] = &[
    ("vw", "volkswagen"),
    ("volkswagon", "volkswagen"),
    ("chevy", "chevrolet"),
    ("mb", "mercedes-benz"),
    ("mercedes", "mercedes-benz"),
    ("merc", "mercedes-benz"),
    ("rr", "rolls-royce"),
    ("rolls", "rolls-royce"),
    ("land", "land-rover"),
    ("rover", "land-rover"),
];

/// Word sets and make-synonym table consulted during normalization.
#[derive(Debug, Clone)]
pub struct Lexicon {
    body_words: HashSet<String>,
    trim_words: HashSet<String>,
    color_words: HashSet<String>,
    // BTreeMap keeps `lexicon show` output deterministic
    make_synonyms: BTreeMap<String, String>,
}

impl Lexicon {
    /// Create an empty lexicon (useful for tests with minimal vocabularies).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            body_words: HashSet::new(),
            trim_words: HashSet::new(),
            color_words: HashSet::new(),
            make_synonyms: BTreeMap::new(),
        }
    }

    /// Create a lexicon with the built-in vocabulary tables.
    #[must_use]
    pub fn with_builtins() -> Self {
        let to_set = |words: &[&str]| words.iter().map(|w| (*w).to_string()).collect();
        Self {
            body_words: to_set(BODY_WORDS),
            trim_words: to_set(TRIM_WORDS),
            color_words: to_set(COLOR_WORDS),
            make_synonyms: MAKE_SYNONYMS
                .iter()
                .map(|(a, c)| ((*a).to_string(), (*c).to_string()))
                .collect(),
        }
    }

    /// Load a lexicon from a YAML or JSON file, detected by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| VehicleEvalError::io(path, e))?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        let file: LexiconFile = match ext.as_str() {
            "json" => serde_json::from_str(&content)?,
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| {
                VehicleEvalError::config(format!("invalid lexicon file {}: {e}", path.display()))
            })?,
            other => {
                return Err(VehicleEvalError::config(format!(
                    "unsupported lexicon file extension '{other}' (expected yaml, yml or json)"
                )))
            }
        };

        Ok(file.into())
    }

    /// Whether a token is a body-style word.
    #[must_use]
    pub fn is_body_word(&self, token: &str) -> bool {
        self.body_words.contains(token)
    }

    /// Whether a token is a trim-level word.
    #[must_use]
    pub fn is_trim_word(&self, token: &str) -> bool {
        self.trim_words.contains(token)
    }

    /// Whether a token is a color word.
    #[must_use]
    pub fn is_color_word(&self, token: &str) -> bool {
        self.color_words.contains(token)
    }

    /// Resolve a make token through the synonym table.
    ///
    /// Unknown tokens are returned as-is: the alias table is a
    /// canonicalization aid, not a closed vocabulary of makes.
    #[must_use]
    pub fn canonical_make(&self, token: &str) -> String {
        self.make_synonyms
            .get(token)
            .cloned()
            .unwrap_or_else(|| token.to_string())
    }

    /// Serializable snapshot of the lexicon (sorted, for display/export).
    #[must_use]
    pub fn to_file(&self) -> LexiconFile {
        let to_sorted = |set: &HashSet<String>| {
            let mut v: Vec<String> = set.iter().cloned().collect();
            v.sort();
            v
        };
        LexiconFile {
            body_words: to_sorted(&self.body_words),
            trim_words: to_sorted(&self.trim_words),
            color_words: to_sorted(&self.color_words),
            make_synonyms: self.make_synonyms.clone(),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// On-disk representation of a lexicon (YAML or JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconFile {
    pub body_words: Vec<String>,
    pub trim_words: Vec<String>,
    pub color_words: Vec<String>,
    pub make_synonyms: BTreeMap<String, String>,
}

impl From<LexiconFile> for Lexicon {
    fn from(file: LexiconFile) -> Self {
        let normalize_set = |words: Vec<String>| {
            words
                .into_iter()
                .map(|w| w.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect()
        };
        Self {
            body_words: normalize_set(file.body_words),
            trim_words: normalize_set(file.trim_words),
            color_words: normalize_set(file.color_words),
            make_synonyms: file
                .make_synonyms
                .into_iter()
                .map(|(a, c)| (a.trim().to_lowercase(), c.trim().to_lowercase()))
                .collect(),
        }
    }
}
