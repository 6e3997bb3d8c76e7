//! Variant-aware group search: script variant expansion, concurrent per-variant
//! queries, and result merging.

pub(crate) mod engine;
pub(crate) mod variants;
