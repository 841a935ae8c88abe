use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique catalog identifier, assigned by the backend on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CatalogId(pub i64);

impl CatalogId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Vertical
// ============================================================================

/// Vertical classification of a catalog. Closed set, known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vertical {
    Fashion,
    Home,
    General,
}

impl Vertical {
    /// Wire value used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Vertical::Fashion => "fashion",
            Vertical::Home => "home",
            Vertical::General => "general",
        }
    }

    /// Human readable label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Vertical::Fashion => "Fashion",
            Vertical::Home => "Home",
            Vertical::General => "General",
        }
    }

    pub fn all() -> Vec<Vertical> {
        vec![Vertical::Fashion, Vertical::Home, Vertical::General]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fashion" => Some(Vertical::Fashion),
            "home" => Some(Vertical::Home),
            "general" => Some(Vertical::General),
            _ => None,
        }
    }
}

impl Default for Vertical {
    fn default() -> Self {
        Vertical::Fashion
    }
}

impl std::fmt::Display for Vertical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Entity
// ============================================================================

/// A catalog record as returned by the backend.
///
/// The client-side list of catalogs is a disposable cache of backend state:
/// it is rebuilt on every fetch and only patched locally after mutations
/// (see `reconcile`). Invariant maintained by those patches: at most one
/// catalog with `primary = true` per vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub id: CatalogId,
    pub name: String,
    pub vertical: Vertical,
    pub primary: bool,
    pub locales: Vec<String>,
    /// Absent until the backend has indexed the catalog at least once.
    #[serde(rename = "indexedAt", default, skip_serializing_if = "Option::is_none")]
    pub indexed_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Catalog {
    pub fn is_multi_locale(&self) -> bool {
        self.locales.len() > 1
    }
}

// ============================================================================
// Requests / responses
// ============================================================================

/// Body of `POST /catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCatalogPayload {
    pub name: String,
    pub vertical: Vertical,
    pub primary: bool,
    pub locales: Vec<String>,
}

/// Body of `PUT /catalogs/{id}`. Unset fields are left unchanged by the
/// backend; the response is always the full updated record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCatalogPayload {
    pub id: CatalogId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<Vertical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<Vec<String>>,
}

/// One page of `GET /catalogs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogPage {
    pub data: Vec<Catalog>,
    pub total: u64,
}

/// Query parameters of `GET /catalogs`. `page` is 1-based on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "multiLocale", skip_serializing_if = "Option::is_none")]
    pub multi_locale: Option<bool>,
    pub page: u32,
    #[serde(rename = "rowsPerPage")]
    pub rows_per_page: u32,
}

/// Body of `POST /catalogs/bulk_delete`. Must never be sent with an empty
/// id set (callers validate first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeletePayload {
    pub ids: Vec<CatalogId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkDeleteResponse {
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}

/// Body of `POST /catalogs/index_selected`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexSelectedPayload {
    pub ids: Vec<CatalogId>,
}

/// New indexing timestamp for one catalog. The backend reports only the
/// catalogs it actually indexed; a subset of the requested ids is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedCatalog {
    pub id: CatalogId,
    #[serde(rename = "indexedAt")]
    pub indexed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexCatalogsResponse {
    #[serde(rename = "indexedCatalogs")]
    pub indexed_catalogs: Vec<IndexedCatalog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_wire_format_uses_camel_case() {
        let json = r#"{
            "id": 7,
            "name": "Shoes",
            "vertical": "fashion",
            "primary": true,
            "locales": ["en_US", "de_DE"],
            "indexedAt": "2025-06-01T12:00:00Z",
            "createdAt": "2025-05-01T09:30:00Z"
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.id, CatalogId(7));
        assert_eq!(catalog.vertical, Vertical::Fashion);
        assert!(catalog.primary);
        assert!(catalog.is_multi_locale());
        assert!(catalog.indexed_at.is_some());
    }

    #[test]
    fn missing_indexed_at_means_never_indexed() {
        let json = r#"{
            "id": 1,
            "name": "Sofas",
            "vertical": "home",
            "primary": false,
            "locales": ["en_US"],
            "createdAt": "2025-05-01T09:30:00Z"
        }"#;

        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.indexed_at.is_none());
        assert!(!catalog.is_multi_locale());
    }

    #[test]
    fn update_payload_skips_unset_fields() {
        let payload = UpdateCatalogPayload {
            id: CatalogId(3),
            name: Some("Renamed".to_string()),
            vertical: None,
            primary: None,
            locales: None,
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Renamed"}"#);
    }

    #[test]
    fn catalog_query_skips_unset_filters() {
        let query = CatalogQuery {
            name: None,
            multi_locale: None,
            page: 1,
            rows_per_page: 10,
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(json, r#"{"page":1,"rowsPerPage":10}"#);

        let query = CatalogQuery {
            name: Some("shoes".to_string()),
            multi_locale: Some(true),
            page: 2,
            rows_per_page: 25,
        };
        let json = serde_json::to_string(&query).unwrap();
        assert_eq!(
            json,
            r#"{"name":"shoes","multiLocale":true,"page":2,"rowsPerPage":25}"#
        );
    }

    #[test]
    fn vertical_parses_wire_values() {
        for vertical in Vertical::all() {
            assert_eq!(Vertical::from_str(vertical.as_str()), Some(vertical));
        }
        assert_eq!(Vertical::from_str("groceries"), None);
    }
}
