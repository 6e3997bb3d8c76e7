use std::cmp::Ordering;
use std::collections::HashMap;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::convert::{ScriptConverter, contains_chinese};
use crate::groups::types::{Envelope, GroupListParams, GroupPage, TgGroup};
use crate::groups::{GENERIC_FAILURE_CODE, GroupApiError, GroupSource};
use crate::search::variants::expand_variants;

/// Result of one variant-aware search. Failures are values, never errors.
#[derive(Debug)]
pub enum SearchOutcome {
    Success {
        page: GroupPage,
        /// Keywords that were actually queried, in dispatch order.
        variants: Vec<String>,
    },
    Failure {
        code: i64,
        message: String,
    },
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }

    pub fn groups(&self) -> &[TgGroup] {
        match self {
            SearchOutcome::Success { page, .. } => &page.data,
            SearchOutcome::Failure { .. } => &[],
        }
    }

    /// Wire-shaped envelope; a failure carries a non-zero code and an empty `data` array.
    pub fn into_envelope(self) -> Envelope<GroupPage> {
        match self {
            SearchOutcome::Success { page, .. } => Envelope {
                err_code: 0,
                err_msg: String::new(),
                payload: page,
            },
            SearchOutcome::Failure { code, message } => Envelope {
                err_code: code,
                err_msg: message,
                payload: GroupPage::default(),
            },
        }
    }
}

/// Searches groups, querying every script variant of `group_name` concurrently
/// and merging the results by group id.
///
/// Without a name, or when the name has no distinct variants, a single query
/// with `params` unchanged is issued. If every variant query fails, the search
/// is retried exactly once with the original params.
pub async fn search_with_variants(
    source: &impl GroupSource,
    converter: &impl ScriptConverter,
    params: &GroupListParams,
) -> SearchOutcome {
    let variants = params
        .group_name
        .as_deref()
        .map(|name| expand_variants(name, converter))
        .unwrap_or_default();

    if variants.len() <= 1 {
        return match source.list(params).await {
            Ok(page) => SearchOutcome::Success { page, variants },
            Err(e) => {
                warn!(error = %e, "group search failed");
                failure_from(&e)
            }
        };
    }

    info!(keyword = ?params.group_name, variants = ?variants, "variant search");

    let variant_params: Vec<GroupListParams> =
        variants.iter().map(|v| params.with_group_name(v)).collect();
    let outcomes = join_all(variant_params.iter().map(|p| source.list(p))).await;

    let mut pages = Vec::with_capacity(outcomes.len());
    for (variant, outcome) in variants.iter().zip(outcomes) {
        match outcome {
            Ok(page) => {
                debug!(variant = %variant, results = page.data.len(), "variant search complete");
                pages.push(page);
            }
            Err(e) => {
                warn!(variant = %variant, error = %e, "variant search failed (continuing with other variants)");
            }
        }
    }

    if pages.is_empty() {
        warn!("all variant searches failed, falling back to plain search");
        return fallback(source, params).await;
    }

    let page = merge_pages(pages);
    info!(results = page.data.len(), "variant results merged");
    SearchOutcome::Success { page, variants }
}

async fn fallback(source: &impl GroupSource, params: &GroupListParams) -> SearchOutcome {
    match source.list(params).await {
        Ok(page) => SearchOutcome::Success {
            page,
            variants: params.group_name.iter().cloned().collect(),
        },
        Err(e) => {
            warn!(error = %e, "fallback search failed");
            SearchOutcome::Failure {
                code: GENERIC_FAILURE_CODE,
                message: "search failed".to_string(),
            }
        }
    }
}

fn failure_from(e: &GroupApiError) -> SearchOutcome {
    SearchOutcome::Failure {
        code: e.code(),
        message: e.to_string(),
    }
}

/// Merges pages in dispatch order. Auxiliary fields come from the first page.
fn merge_pages(pages: Vec<GroupPage>) -> GroupPage {
    let mut pages = pages.into_iter();
    let Some(first) = pages.next() else {
        return GroupPage::default();
    };
    let extra = first.extra;
    let data = merge_groups(std::iter::once(first.data).chain(pages.map(|p| p.data)));
    GroupPage { data, extra }
}

/// Deduplicates by id (a later copy replaces an earlier one in place), then
/// orders by last activity, newest first, groups without activity last.
fn merge_groups(batches: impl IntoIterator<Item = Vec<TgGroup>>) -> Vec<TgGroup> {
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut merged: Vec<TgGroup> = Vec::new();

    for group in batches.into_iter().flatten() {
        match index.get(&group.id) {
            Some(&i) => merged[i] = group,
            None => {
                index.insert(group.id, merged.len());
                merged.push(group);
            }
        }
    }

    merged.sort_by(by_latest_activity);
    merged
}

fn by_latest_activity(a: &TgGroup, b: &TgGroup) -> Ordering {
    match (a.last_activity(), b.last_activity()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => b.cmp(a),
    }
}

/// One-line summary of a finished search, naming the variants when more than one was searched.
pub fn search_stats(keyword: &str, result_count: usize, converter: &impl ScriptConverter) -> String {
    if contains_chinese(keyword) {
        let variants = expand_variants(keyword, converter);
        if variants.len() > 1 {
            return format!(
                "Variant search complete: searched {}; found {result_count} results",
                variants.join(", ")
            );
        }
    }
    format!("Search complete: found {result_count} results")
}
