pub mod view;
pub mod view_model;

pub use view::CatalogDetails;
pub use view_model::SaveOutcome;

use contracts::domain::catalog::Catalog;

/// Edit dialog lifecycle. The only transitions out of an open state are
/// Save (validate, network call, close on success) and Cancel (discard and
/// close).
#[derive(Debug, Clone, PartialEq)]
pub enum DialogState {
    Closed,
    Create,
    Edit(Catalog),
}
