//! Free-text description normalization.
//!
//! Reduces a raw vehicle description ("2012 Toyota Camry LE Silver") to a
//! structured triple of make, model tokens, and optional color, using the
//! [`Lexicon`] vocabulary tables.

use crate::lexicon::Lexicon;

/// A description reduced to comparable structured form.
///
/// Derived value, produced fresh per input string. `model_tokens`
/// preserves the original relative token order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDescription {
    /// Canonical manufacturer name (post synonym resolution, lowercase)
    pub make: String,
    /// Remaining descriptive tokens approximating the model name
    pub model_tokens: Vec<String>,
    /// First color word found, if any
    pub color: Option<String>,
}

/// Normalize a free-text description, or `None` if nothing survives
/// filtering (an unparseable description).
///
/// Steps, in order:
/// 1. lowercase; every character outside `[a-z0-9 ]` becomes a space
/// 2. split on whitespace
/// 3. drop exact-4-digit tokens (model years) before any other filtering
/// 4. capture the FIRST color word and remove it; drop every body-style
///    and trim word
/// 5. zero survivors → `None`
/// 6. first survivor, resolved through the synonym table, is the make;
///    the rest, in order, are the model tokens
///
/// A later second color word is an ordinary token and may survive into
/// the model tokens.
#[must_use]
pub fn normalize(text: &str, lexicon: &Lexicon) -> Option<NormalizedDescription> {
    let tokens = tokenize(text);

    let mut color: Option<String> = None;
    let mut filtered: Vec<String> = Vec::new();

    for token in tokens {
        if is_year_token(&token) {
            continue;
        }
        if color.is_none() && lexicon.is_color_word(&token) {
            color = Some(token);
            continue;
        }
        if lexicon.is_body_word(&token) || lexicon.is_trim_word(&token) {
            continue;
        }
        filtered.push(token);
    }

    let mut iter = filtered.into_iter();
    let make_candidate = iter.next()?;

    Some(NormalizedDescription {
        make: lexicon.canonical_make(&make_candidate),
        model_tokens: iter.collect(),
        color,
    })
}

/// Lowercase, strip punctuation, split into tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whether a token is exactly four ASCII digits (treated as a model year).
fn is_year_token(token: &str) -> bool {
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> Lexicon {
        Lexicon::with_builtins()
    }

    #[test]
    fn test_normalize_full_description() {
        let norm = normalize("2012 Toyota Camry LE Silver", &lex()).unwrap();
        assert_eq!(norm.make, "toyota");
        assert_eq!(norm.model_tokens, vec!["camry".to_string()]);
        assert_eq!(norm.color.as_deref(), Some("silver"));
    }

    #[test]
    fn test_normalize_resolves_synonym_and_strips_trim() {
        let norm = normalize("VW Golf GTI", &lex()).unwrap();
        assert_eq!(norm.make, "volkswagen");
        assert_eq!(norm.model_tokens, vec!["golf".to_string()]);
        assert_eq!(norm.color, None);
    }

    #[test]
    fn test_normalize_color_only_is_unparseable() {
        // The single token is captured as the color, leaving no survivors
        assert_eq!(normalize("Red", &lex()), None);
    }

    #[test]
    fn test_normalize_year_and_color_only() {
        assert_eq!(normalize("2015 Blue", &lex()), None);
    }

    #[test]
    fn test_normalize_single_token_becomes_make() {
        let norm = normalize("Honda", &lex()).unwrap();
        assert_eq!(norm.make, "honda");
        assert!(norm.model_tokens.is_empty());
        assert_eq!(norm.color, None);
    }

    #[test]
    fn test_normalize_empty_and_punctuation_only() {
        assert_eq!(normalize("", &lex()), None);
        assert_eq!(normalize("?!--", &lex()), None);
    }

    #[test]
    fn test_normalize_hyphenated_make() {
        // "Rolls-Royce" tokenizes to "rolls royce"; the alias table maps
        // the leading token back to the canonical hyphenated name
        let norm = normalize("Rolls-Royce Phantom", &lex()).unwrap();
        assert_eq!(norm.make, "rolls-royce");
        assert_eq!(
            norm.model_tokens,
            vec!["royce".to_string(), "phantom".to_string()]
        );
    }

    #[test]
    fn test_normalize_second_color_survives_as_model_token() {
        let norm = normalize("Red Ferrari Red", &lex()).unwrap();
        assert_eq!(norm.color.as_deref(), Some("red"));
        assert_eq!(norm.make, "ferrari");
        assert_eq!(norm.model_tokens, vec!["red".to_string()]);
    }

    #[test]
    fn test_year_filter_runs_before_color_capture() {
        // "2012" is removed as a year even though a color follows it
        let norm = normalize("2012 blue bmw m3", &lex()).unwrap();
        assert_eq!(norm.color.as_deref(), Some("blue"));
        assert_eq!(norm.make, "bmw");
        assert_eq!(norm.model_tokens, vec!["m3".to_string()]);
    }

    #[test]
    fn test_non_four_digit_numbers_survive() {
        let norm = normalize("Peugeot 206", &lex()).unwrap();
        assert_eq!(norm.make, "peugeot");
        assert_eq!(norm.model_tokens, vec!["206".to_string()]);
    }
}
