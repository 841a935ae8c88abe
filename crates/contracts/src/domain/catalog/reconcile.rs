//! Local reconciliation of the catalog list after backend mutations.
//!
//! The listing view keeps an ordered, id-unique snapshot of one page of
//! catalogs plus a selection set for bulk operations. After a successful
//! create/update/delete/index call the backend response is folded into that
//! snapshot here instead of refetching the page. The one non-trivial rule is
//! the primary cascade: the backend allows at most one primary catalog per
//! vertical, so a record that comes back with `primary = true` demotes every
//! other record of its vertical in the local list as well.

use std::collections::HashSet;

use thiserror::Error;

use super::aggregate::{Catalog, CatalogId, IndexedCatalog, Vertical};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReconcileError {
    /// Bulk operations must not reach the backend with an empty id set.
    #[error("no catalogs selected")]
    EmptySelection,
}

/// Fold a freshly created catalog into the list.
///
/// If the new record is primary, all same-vertical records are demoted
/// first. Insertion policy: with `page_limit = Some(n)` (paginated view) the
/// record goes to the head and the list is truncated to `n` rows so the
/// visible page never grows past the page size; with `None` it is appended.
pub fn apply_create(list: &mut Vec<Catalog>, created: Catalog, page_limit: Option<usize>) {
    if created.primary {
        demote_same_vertical(list, created.vertical, created.id);
    }
    match page_limit {
        Some(limit) => {
            list.insert(0, created);
            list.truncate(limit);
        }
        None => list.push(created),
    }
}

/// Replace the matching record with the backend's updated version.
///
/// Replacement is wholesale, never a field-by-field merge: the response is
/// the new source of truth for that record. An id not present in the
/// materialized page is a no-op. A primary update demotes every other
/// same-vertical record.
pub fn apply_update(list: &mut [Catalog], updated: Catalog) {
    if updated.primary {
        demote_same_vertical(list, updated.vertical, updated.id);
    }
    if let Some(existing) = list.iter_mut().find(|c| c.id == updated.id) {
        *existing = updated;
    }
}

/// Remove one catalog from the list and from the selection set.
///
/// Idempotent: deleting an id that is already gone changes nothing.
/// Deleting a primary catalog does not promote another one.
pub fn apply_delete(list: &mut Vec<Catalog>, selection: &mut HashSet<CatalogId>, id: CatalogId) {
    list.retain(|c| c.id != id);
    selection.remove(&id);
}

/// Remove every catalog whose id is in `ids`; consumed ids leave the
/// selection set. An empty `ids` is a validation error and mutates nothing.
pub fn apply_bulk_delete(
    list: &mut Vec<Catalog>,
    selection: &mut HashSet<CatalogId>,
    ids: &[CatalogId],
) -> Result<(), ReconcileError> {
    if ids.is_empty() {
        return Err(ReconcileError::EmptySelection);
    }
    let removed: HashSet<CatalogId> = ids.iter().copied().collect();
    list.retain(|c| !removed.contains(&c.id));
    selection.retain(|id| !removed.contains(id));
    Ok(())
}

/// Apply the backend's indexing report: only the reported ids get a new
/// `indexed_at` (partial success is not an error). The selection is cleared
/// unconditionally, however many ids were actually updated.
pub fn apply_index_result(
    list: &mut [Catalog],
    selection: &mut HashSet<CatalogId>,
    indexed: &[IndexedCatalog],
) {
    for entry in indexed {
        if let Some(catalog) = list.iter_mut().find(|c| c.id == entry.id) {
            catalog.indexed_at = Some(entry.indexed_at);
        }
    }
    selection.clear();
}

/// Demote every record of `vertical` except `keep`. `keep` does not have to
/// be present in the list (it is not yet, on create).
fn demote_same_vertical(list: &mut [Catalog], vertical: Vertical, keep: CatalogId) {
    for catalog in list.iter_mut() {
        if catalog.vertical == vertical && catalog.id != keep {
            catalog.primary = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn cat(id: i64, vertical: Vertical, primary: bool) -> Catalog {
        Catalog {
            id: CatalogId(id),
            name: format!("catalog-{id}"),
            vertical,
            primary,
            locales: vec!["en_US".to_string()],
            indexed_at: None,
            created_at: Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap(),
        }
    }

    fn primaries_in(list: &[Catalog], vertical: Vertical) -> Vec<CatalogId> {
        list.iter()
            .filter(|c| c.vertical == vertical && c.primary)
            .map(|c| c.id)
            .collect()
    }

    #[test]
    fn create_primary_demotes_same_vertical() {
        let mut list = vec![
            cat(1, Vertical::Fashion, true),
            cat(2, Vertical::Home, true),
        ];

        let mut new_catalog = cat(3, Vertical::Fashion, true);
        new_catalog.name = "Shoes".to_string();
        apply_create(&mut list, new_catalog, None);

        assert_eq!(primaries_in(&list, Vertical::Fashion), vec![CatalogId(3)]);
        // Other verticals are untouched.
        assert_eq!(primaries_in(&list, Vertical::Home), vec![CatalogId(2)]);
        assert!(!list.iter().find(|c| c.id == CatalogId(1)).unwrap().primary);
    }

    #[test]
    fn create_non_primary_appends_without_cascade() {
        let mut list = vec![cat(1, Vertical::Fashion, true)];
        apply_create(&mut list, cat(2, Vertical::Fashion, false), None);

        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, CatalogId(2));
        assert_eq!(primaries_in(&list, Vertical::Fashion), vec![CatalogId(1)]);
    }

    #[test]
    fn create_under_page_limit_inserts_at_head_and_truncates() {
        let mut list = vec![cat(1, Vertical::Home, false), cat(2, Vertical::Home, false)];
        apply_create(&mut list, cat(3, Vertical::Home, false), Some(2));

        let ids: Vec<CatalogId> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CatalogId(3), CatalogId(1)]);
    }

    #[test]
    fn update_primary_leaves_exactly_one_primary_in_vertical() {
        let mut list = vec![
            cat(1, Vertical::General, true),
            cat(2, Vertical::General, false),
            cat(3, Vertical::General, false),
        ];

        let mut updated = cat(2, Vertical::General, true);
        updated.name = "Everything".to_string();
        apply_update(&mut list, updated);

        assert_eq!(primaries_in(&list, Vertical::General), vec![CatalogId(2)]);
        assert_eq!(list[1].name, "Everything");
    }

    #[test]
    fn update_replaces_wholesale_not_merged() {
        let mut list = vec![cat(1, Vertical::Fashion, false)];
        list[0].indexed_at = Some(Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());

        // The backend response carries no indexed_at; the old value must not
        // survive the replacement.
        apply_update(&mut list, cat(1, Vertical::Fashion, false));
        assert!(list[0].indexed_at.is_none());
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut list = vec![cat(1, Vertical::Fashion, true)];
        let before = list.clone();

        apply_update(&mut list, cat(99, Vertical::Home, false));
        assert_eq!(list, before);
    }

    #[test]
    fn delete_removes_from_list_and_selection_and_is_idempotent() {
        let mut list = vec![cat(1, Vertical::Fashion, true), cat(2, Vertical::Fashion, false)];
        let mut selection: HashSet<CatalogId> = [CatalogId(1), CatalogId(2)].into();

        apply_delete(&mut list, &mut selection, CatalogId(1));
        assert_eq!(list.len(), 1);
        assert!(!selection.contains(&CatalogId(1)));
        // Deleting the primary does not promote another catalog.
        assert!(primaries_in(&list, Vertical::Fashion).is_empty());

        apply_delete(&mut list, &mut selection, CatalogId(1));
        assert_eq!(list.len(), 1);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn bulk_delete_empty_ids_rejected_without_mutation() {
        let mut list = vec![cat(1, Vertical::Home, false)];
        let mut selection: HashSet<CatalogId> = [CatalogId(1)].into();

        let result = apply_bulk_delete(&mut list, &mut selection, &[]);
        assert_eq!(result, Err(ReconcileError::EmptySelection));
        assert_eq!(list.len(), 1);
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn bulk_delete_removes_listed_ids_and_clears_them_from_selection() {
        let mut list = vec![
            cat(1, Vertical::Home, false),
            cat(2, Vertical::Home, false),
            cat(3, Vertical::Home, false),
        ];
        let mut selection: HashSet<CatalogId> = [CatalogId(1), CatalogId(3)].into();

        apply_bulk_delete(&mut list, &mut selection, &[CatalogId(1), CatalogId(3)]).unwrap();

        let ids: Vec<CatalogId> = list.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![CatalogId(2)]);
        assert!(selection.is_empty());
    }

    #[test]
    fn index_result_partial_success_updates_only_reported_ids() {
        let mut list = vec![
            cat(1, Vertical::Fashion, false),
            cat(2, Vertical::Fashion, false),
            cat(3, Vertical::Fashion, false),
        ];
        let mut selection: HashSet<CatalogId> =
            [CatalogId(1), CatalogId(2), CatalogId(3)].into();

        let t1 = Utc.with_ymd_and_hms(2025, 7, 1, 8, 0, 0).unwrap();
        apply_index_result(
            &mut list,
            &mut selection,
            &[IndexedCatalog {
                id: CatalogId(1),
                indexed_at: t1,
            }],
        );

        assert_eq!(list[0].indexed_at, Some(t1));
        assert!(list[1].indexed_at.is_none());
        assert!(list[2].indexed_at.is_none());
        // Selection is cleared regardless of how many ids were updated.
        assert!(selection.is_empty());
    }

    #[test]
    fn shoes_scenario_from_existing_primary() {
        let mut list = vec![cat(1, Vertical::Fashion, true)];

        let shoes = Catalog {
            id: CatalogId(2),
            name: "Shoes".to_string(),
            vertical: Vertical::Fashion,
            primary: true,
            locales: vec!["en_US".to_string()],
            indexed_at: None,
            created_at: Utc.with_ymd_and_hms(2025, 5, 2, 10, 0, 0).unwrap(),
        };
        apply_create(&mut list, shoes, None);

        let old = list.iter().find(|c| c.id == CatalogId(1)).unwrap();
        let new = list.iter().find(|c| c.id == CatalogId(2)).unwrap();
        assert!(!old.primary);
        assert!(new.primary);
    }
}
