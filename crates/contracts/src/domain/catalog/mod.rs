pub mod aggregate;
pub mod reconcile;
pub mod validation;

pub use aggregate::{
    BulkDeletePayload, BulkDeleteResponse, Catalog, CatalogId, CatalogPage, CatalogQuery,
    CreateCatalogPayload, IndexCatalogsResponse, IndexSelectedPayload, IndexedCatalog,
    UpdateCatalogPayload, Vertical,
};
