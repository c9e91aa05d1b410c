//! Resource clients for the Paddle API.
//!
//! Every resource follows one of two request shapes:
//!
//! - **List / get**: the operation is flattened into query parameters through
//!   [`HasParameters`], the response `data` is decoded into a
//!   [`Collection`] (with a [`Paginator`](crate::entities::Paginator)) or a
//!   single entity.
//! - **Create / update**: the operation is encoded as the JSON body with
//!   [`PayloadEncoder`] and the response `data` is decoded into a single
//!   entity.
//!
//! Adding a resource means declaring its operation types and wiring them
//! through the `list`, `get` and `send` helpers in this module.
//!
//! # Example
//!
//! ```rust,ignore
//! use paddle_billing::resources::{ListProducts, Pager};
//! use paddle_billing::entities::{Status, TaxCategory};
//!
//! let operation = ListProducts {
//!     statuses: vec![Status::Active],
//!     tax_categories: vec![TaxCategory::Saas],
//!     pager: Pager::new().per_page(10),
//!     ..ListProducts::default()
//! };
//! let page = client.products().list(Some(operation)).await?;
//! ```

mod prices;
mod products;
mod shared;

pub use prices::{CreatePrice, GetPrice, ListPrices, PriceIncludes, PricesClient, UpdatePrice};
pub use products::{
    CreateProduct, GetProduct, ListProducts, ProductIncludes, ProductsClient, UpdateProduct,
};
pub use shared::{
    Direction, HasParameters, OrderBy, Pager, ParameterValue, Parameters, DEFAULT_PER_PAGE,
};

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError};
use crate::entities::Collection;
use crate::error::Error;
use crate::json::PayloadEncoder;

/// Builds the path of a single entity, percent-encoding `id`.
///
/// # Errors
///
/// Returns [`HttpError::InvalidRequest`] with
/// [`InvalidHttpRequestError::InvalidId`] if `id` is empty or a dot segment,
/// which URL normalization would resolve to another resource.
pub(crate) fn entity_path(collection: &str, id: &str) -> Result<String, HttpError> {
    if id.is_empty() || id == "." || id == ".." {
        return Err(InvalidHttpRequestError::InvalidId { id: id.to_string() }.into());
    }
    Ok(format!("{collection}/{}", urlencoding::encode(id)))
}

/// Lists entities at `path`, attaching a paginator for the following pages.
///
/// # Errors
///
/// Returns [`Error`] if the request fails or the data is not a list of `T`.
pub(crate) async fn list<T: DeserializeOwned>(
    http: &Arc<HttpClient>,
    path: &str,
    parameters: &Parameters,
) -> Result<Collection<T>, Error> {
    let request = HttpRequest::builder(HttpMethod::Get, path)
        .query(parameters.to_query())
        .build()
        .map_err(HttpError::from)?;

    let response = http.request(request).await?;
    Collection::from_response(Arc::clone(http), &response.into_parser())
}

/// Fetches a single entity at `path`.
///
/// # Errors
///
/// Returns [`Error`] if the request fails or the data does not decode as `T`.
pub(crate) async fn get<T: DeserializeOwned>(
    http: &HttpClient,
    path: &str,
    parameters: &Parameters,
) -> Result<T, Error> {
    let request = HttpRequest::builder(HttpMethod::Get, path)
        .query(parameters.to_query())
        .build()
        .map_err(HttpError::from)?;

    let response = http.request(request).await?;
    Ok(response.into_parser().get_data_as()?)
}

/// Sends `payload` as the JSON body of a mutating request to `path`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the payload cannot be encoded, before any
/// request is sent. Otherwise returns [`Error`] if the request fails or the
/// data does not decode as `T`.
pub(crate) async fn send<P, T>(
    http: &HttpClient,
    method: HttpMethod,
    path: &str,
    payload: &P,
) -> Result<T, Error>
where
    P: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let body = PayloadEncoder::encode(payload)?;

    let request = HttpRequest::builder(method, path)
        .body(body)
        .build()
        .map_err(HttpError::from)?;

    let response = http.request(request).await?;
    Ok(response.into_parser().get_data_as()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_path_keeps_plain_ids() {
        assert_eq!(
            entity_path("prices", "pri_01gsz8z1q1n00f12qt82y31smh").unwrap(),
            "prices/pri_01gsz8z1q1n00f12qt82y31smh"
        );
    }

    #[test]
    fn test_entity_path_encodes_reserved_characters() {
        assert_eq!(
            entity_path("products", "pro_01/prices?all#top").unwrap(),
            "products/pro_01%2Fprices%3Fall%23top"
        );
        assert_eq!(entity_path("products", "a b%").unwrap(), "products/a%20b%25");
    }

    #[test]
    fn test_entity_path_rejects_empty_and_dot_segments() {
        for id in ["", ".", ".."] {
            assert!(matches!(
                entity_path("products", id),
                Err(HttpError::InvalidRequest(InvalidHttpRequestError::InvalidId { id: rejected }))
                    if rejected == id
            ));
        }
    }
}
