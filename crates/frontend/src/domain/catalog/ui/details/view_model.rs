use contracts::domain::catalog::validation::{
    validate_catalog_form, validate_new_locale, LocaleError,
};
use contracts::domain::catalog::{
    Catalog, CatalogId, CreateCatalogPayload, UpdateCatalogPayload, Vertical,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::catalog::api;
use crate::shared::api_utils::ApiError;
use crate::shared::toast::ToastService;
use crate::system::auth::context::{clear_session, AuthState};

/// Result of a successful save, carrying the backend's record. The list
/// folds it in through the reconciler instead of refetching.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    Created(Catalog),
    Updated(Catalog),
}

#[derive(Clone, Debug, Default)]
pub struct CatalogForm {
    pub id: Option<CatalogId>,
    pub name: String,
    pub vertical: Vertical,
    pub primary: bool,
    pub locales: Vec<String>,
}

impl CatalogForm {
    fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            id: Some(catalog.id),
            name: catalog.name.clone(),
            vertical: catalog.vertical,
            primary: catalog.primary,
            locales: catalog.locales.clone(),
        }
    }
}

/// ViewModel for the catalog create/edit form.
#[derive(Clone)]
pub struct CatalogDetailsViewModel {
    pub form: RwSignal<CatalogForm>,
    pub error: RwSignal<Option<String>>,
    /// In-flight guard; the Save control is disabled while set.
    pub saving: RwSignal<bool>,
}

impl CatalogDetailsViewModel {
    pub fn new(existing: Option<&Catalog>) -> Self {
        let form = match existing {
            Some(catalog) => CatalogForm::from_catalog(catalog),
            None => CatalogForm::default(),
        };
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.get().id.is_some()
    }

    /// Validate and add one locale typed into the add field.
    pub fn add_locale(&self, candidate: &str) -> Result<(), LocaleError> {
        let candidate = candidate.trim();
        self.form
            .with_untracked(|f| validate_new_locale(&f.locales, candidate))?;
        self.form
            .update(|f| f.locales.push(candidate.to_string()));
        Ok(())
    }

    pub fn remove_locale(&self, locale: &str) {
        self.form.update(|f| f.locales.retain(|l| l != locale));
    }

    /// Validate the form, then create or update on the backend. The
    /// server's record goes to `on_saved`; the caller closes the dialog and
    /// reconciles its list. Re-entry while a request is in flight is a
    /// no-op.
    pub fn save(
        &self,
        toast: ToastService,
        set_auth_state: WriteSignal<AuthState>,
        on_saved: Callback<SaveOutcome>,
    ) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();

        if let Err(e) = validate_catalog_form(&current.name, &current.locales) {
            self.error.set(Some(e.to_string()));
            toast.error(e.to_string());
            return;
        }

        self.saving.set(true);
        self.error.set(None);
        let saving = self.saving;
        let error = self.error;

        spawn_local(async move {
            let result = match current.id {
                None => api::create_catalog(&CreateCatalogPayload {
                    name: current.name.clone(),
                    vertical: current.vertical,
                    primary: current.primary,
                    locales: current.locales.clone(),
                })
                .await
                .map(SaveOutcome::Created),
                Some(id) => api::update_catalog(&UpdateCatalogPayload {
                    id,
                    name: Some(current.name.clone()),
                    vertical: Some(current.vertical),
                    primary: Some(current.primary),
                    locales: Some(current.locales.clone()),
                })
                .await
                .map(SaveOutcome::Updated),
            };
            saving.set(false);

            match result {
                Ok(outcome) => on_saved.run(outcome),
                Err(ApiError::AuthExpired) => clear_session(set_auth_state),
                Err(e) => {
                    let message = if current.id.is_some() {
                        "Failed to update catalog"
                    } else {
                        "Failed to create catalog"
                    };
                    log::warn!("{}: {}", message, e);
                    error.set(Some(message.to_string()));
                    toast.error(message);
                }
            }
        });
    }
}
