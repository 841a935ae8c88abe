use std::collections::HashSet;

use contracts::domain::catalog::{Catalog, CatalogId};
use leptos::prelude::*;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Clone, Debug)]
pub struct CatalogListState {
    /// The currently materialized page, ordered as the backend returned it
    /// (plus local reconciliation).
    pub items: Vec<Catalog>,
    /// Ids marked for bulk operations.
    pub selected_ids: HashSet<CatalogId>,
    pub search_text: String,
    pub multi_locale_only: bool,
    /// 0-based; the wire is 1-based.
    pub page: usize,
    pub rows_per_page: usize,
    pub total_count: usize,
}

impl Default for CatalogListState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected_ids: HashSet::new(),
            search_text: String::new(),
            multi_locale_only: false,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            total_count: 0,
        }
    }
}

pub fn create_state() -> RwSignal<CatalogListState> {
    RwSignal::new(CatalogListState::default())
}
