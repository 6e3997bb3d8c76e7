use crate::markdown::{escape_cell, sanitize_heading};
use crate::search::engine::SearchOutcome;
use crate::search::variants::{Script, Suggestion, SuggestionKind};

pub fn format_outcome(outcome: &SearchOutcome, keyword: Option<&str>, stats: &str) -> String {
    let mut out = match keyword {
        Some(k) => format!("# Groups: {}\n\n", sanitize_heading(k)),
        None => "# Groups\n\n".to_string(),
    };

    let page = match outcome {
        SearchOutcome::Success { page, .. } => page,
        SearchOutcome::Failure { code, message } => {
            out.push_str(&format!("Search failed ({code}): {message}\n"));
            return out;
        }
    };

    out.push_str(stats);
    out.push_str("\n\n");
    if page.data.is_empty() {
        return out;
    }

    out.push_str("| ID | Name | Members | Latest activity |\n");
    out.push_str("|----|------|---------|-----------------|\n");
    for group in &page.data {
        let members = group
            .members_count
            .map(|m| m.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "| {} | {} | {members} | {} |\n",
            group.id,
            escape_cell(group.display_name()),
            group.last_activity().unwrap_or("-"),
        ));
    }
    out
}

pub fn format_variants(
    keyword: &str,
    variants: &[String],
    use_variant_search: bool,
    suggestions: &[Suggestion],
) -> String {
    let mut out = format!("# Variants: {}\n\n", sanitize_heading(keyword));

    if variants.is_empty() {
        out.push_str("(empty keyword)\n");
        return out;
    }

    for variant in variants {
        out.push_str(&format!("- {variant}\n"));
    }
    out.push_str(&format!(
        "\nvariant search: {}\n",
        if use_variant_search { "yes" } else { "no" }
    ));

    if suggestions.len() > 1 {
        out.push_str("\n## Suggestions\n\n");
        for suggestion in suggestions {
            let label = match suggestion.kind {
                SuggestionKind::Original => "original",
                SuggestionKind::Variant(Script::Traditional) => "traditional",
                SuggestionKind::Variant(Script::Simplified) => "simplified",
            };
            out.push_str(&format!("- {} ({label})\n", suggestion.value));
        }
    }
    out
}
