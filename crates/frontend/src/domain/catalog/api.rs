//! REST calls for the catalog resource. Every call carries the bearer
//! header when a token is stored; 401 surfaces as `ApiError::AuthExpired`
//! via `check_status`.

use contracts::domain::catalog::{
    BulkDeletePayload, BulkDeleteResponse, Catalog, CatalogId, CatalogPage, CatalogQuery,
    CreateCatalogPayload, IndexCatalogsResponse, IndexSelectedPayload, UpdateCatalogPayload,
};
use gloo_net::http::{Request, RequestBuilder};

use crate::shared::api_utils::{api_url, check_status, ApiError};
use crate::system::auth::storage;

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn decode(e: gloo_net::Error) -> ApiError {
    ApiError::Decode(e.to_string())
}

/// `GET /catalogs?name=&multiLocale=&page=&rowsPerPage=`
pub async fn fetch_catalogs(query: &CatalogQuery) -> Result<CatalogPage, ApiError> {
    let params = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = authorized(Request::get(&api_url(&format!("/catalogs?{}", params))))
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    response.json::<CatalogPage>().await.map_err(decode)
}

/// `POST /catalogs` — returns the created record with backend-assigned id
/// and timestamps.
pub async fn create_catalog(payload: &CreateCatalogPayload) -> Result<Catalog, ApiError> {
    let response = authorized(Request::post(&api_url("/catalogs")))
        .json(payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    response.json::<Catalog>().await.map_err(decode)
}

/// `PUT /catalogs/{id}` — returns the full updated record.
pub async fn update_catalog(payload: &UpdateCatalogPayload) -> Result<Catalog, ApiError> {
    let response = authorized(Request::put(&api_url(&format!("/catalogs/{}", payload.id))))
        .json(payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    response.json::<Catalog>().await.map_err(decode)
}

/// `DELETE /catalogs/{id}` — no content on success.
pub async fn delete_catalog(id: CatalogId) -> Result<(), ApiError> {
    let response = authorized(Request::delete(&api_url(&format!("/catalogs/{}", id))))
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    Ok(())
}

/// `POST /catalogs/bulk_delete`. Callers validate the id set first; this
/// must never be sent empty.
pub async fn bulk_delete_catalogs(ids: Vec<CatalogId>) -> Result<BulkDeleteResponse, ApiError> {
    let payload = BulkDeletePayload { ids };
    let response = authorized(Request::post(&api_url("/catalogs/bulk_delete")))
        .json(&payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    response.json::<BulkDeleteResponse>().await.map_err(decode)
}

/// `POST /catalogs/index_selected` — the backend reports the subset of ids
/// it actually indexed.
pub async fn index_selected(ids: Vec<CatalogId>) -> Result<IndexCatalogsResponse, ApiError> {
    let payload = IndexSelectedPayload { ids };
    let response = authorized(Request::post(&api_url("/catalogs/index_selected")))
        .json(&payload)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    response
        .json::<IndexCatalogsResponse>()
        .await
        .map_err(decode)
}

/// `POST /catalogs/index-all` — acknowledgement only; the caller refetches.
pub async fn index_all() -> Result<(), ApiError> {
    let response = authorized(Request::post(&api_url("/catalogs/index-all")))
        .send()
        .await
        .map_err(network)?;
    check_status(&response)?;
    Ok(())
}
