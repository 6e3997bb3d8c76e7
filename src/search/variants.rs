use tracing::warn;

use crate::convert::{ScriptConverter, contains_chinese};

/// Expands a keyword into its script variants: the trimmed original, then the
/// traditional form, then the simplified form, each only if not already present.
///
/// Non-Chinese keywords skip conversion entirely. A conversion error degrades to
/// the original keyword alone so that a search can still run.
pub fn expand_variants(keyword: &str, converter: &impl ScriptConverter) -> Vec<String> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if !contains_chinese(trimmed) {
        return vec![trimmed.to_string()];
    }

    let converted = converter
        .to_traditional(trimmed)
        .and_then(|t| converter.to_simplified(trimmed).map(|s| (t, s)));
    let (traditional, simplified) = match converted {
        Ok(pair) => pair,
        Err(e) => {
            warn!(keyword = %trimmed, error = %e, "script conversion failed");
            return vec![trimmed.to_string()];
        }
    };

    let mut variants = vec![trimmed.to_string()];
    for candidate in [traditional, simplified] {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// Whether a variant-aware search would issue more than the plain query.
pub fn should_use_variant_search(keyword: &str, converter: &impl ScriptConverter) -> bool {
    contains_chinese(keyword) && expand_variants(keyword, converter).len() > 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Traditional,
    Simplified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Original,
    Variant(Script),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub value: String,
    pub kind: SuggestionKind,
}

/// Search suggestions for a query: the query itself, followed by each script
/// variant labelled with the script it was converted to.
pub fn suggestions(query: &str, converter: &impl ScriptConverter) -> Vec<Suggestion> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut out = vec![Suggestion {
        value: query.to_string(),
        kind: SuggestionKind::Original,
    }];
    if !contains_chinese(query) {
        return out;
    }

    let traditional = match converter.to_traditional(query) {
        Ok(t) => t,
        Err(e) => {
            warn!(query = %query, error = %e, "failed to build search suggestions");
            return out;
        }
    };

    for variant in expand_variants(query, converter) {
        if variant == query {
            continue;
        }
        let script = if variant == traditional {
            Script::Traditional
        } else {
            Script::Simplified
        };
        out.push(Suggestion {
            value: variant,
            kind: SuggestionKind::Variant(script),
        });
    }
    out
}
