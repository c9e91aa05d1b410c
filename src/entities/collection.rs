//! Pages of list results and the cursor that walks them.
//!
//! A [`Collection`] is one page of a list endpoint. It is a snapshot: fetching
//! further pages never changes it. The position of a walk lives in the
//! [`Paginator`], which keeps only the most recent pagination metadata and
//! moves forward only.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::error::Error;
use crate::response::{Pagination, ResponseParser};

/// One page of entities from a list endpoint.
///
/// `Collection<T>` derefs to `[T]`, so the page can be iterated and indexed
/// directly.
///
/// # Example
///
/// ```rust,ignore
/// let mut page = client.products().list(None).await?;
/// for product in page.iter() {
///     println!("{}", product.name);
/// }
///
/// while let Some(next) = page.next_page().await? {
///     page = next;
/// }
/// ```
pub struct Collection<T> {
    items: Vec<T>,
    paginator: Paginator<T>,
}

impl<T> Collection<T> {
    /// Returns the entities on this page.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the pagination metadata this page was returned with.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.paginator.pagination
    }

    /// Returns the paginator positioned after this page.
    #[must_use]
    pub const fn paginator(&self) -> &Paginator<T> {
        &self.paginator
    }

    /// Returns `true` if another page can be fetched.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.paginator.has_next()
    }

    /// Consumes the page, returning its entities.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Consumes the page, returning its entities and the paginator.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Paginator<T>) {
        (self.items, self.paginator)
    }
}

impl<T: DeserializeOwned> Collection<T> {
    /// Builds a page from a list response.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError`](crate::ResponseError) if the `data` section
    /// is missing or is not a list of `T`.
    pub fn from_response(
        http: Arc<HttpClient>,
        parser: &ResponseParser,
    ) -> Result<Self, Error> {
        let items: Vec<T> = parser.get_data_as()?;
        let paginator = Paginator::new(http, parser.get_pagination());
        Ok(Self { items, paginator })
    }

    /// Fetches the following page, leaving this page untouched.
    ///
    /// Returns `Ok(None)` without sending a request if this was the last page.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails.
    pub async fn next_page(&self) -> Result<Option<Self>, Error> {
        self.paginator.clone().fetch_next().await
    }

    /// Fetches every remaining page and returns all entities, starting with
    /// this page.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if any page request fails.
    pub async fn into_all(self) -> Result<Vec<T>, Error> {
        let (mut items, mut paginator) = self.into_parts();
        while let Some(page) = paginator.fetch_next().await? {
            items.extend(page.into_items());
        }
        Ok(items)
    }
}

impl<T> Deref for Collection<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("items", &self.items)
            .field("pagination", self.pagination())
            .finish()
    }
}

/// Forward-only cursor over the pages of a list endpoint.
///
/// The paginator holds the HTTP client used for the original request and the
/// pagination metadata of the last page it saw. Fetching the next page
/// requests the `next` URL from that metadata with the same client, so
/// authentication, base URL and parsing are identical to the first request.
///
/// # Concurrency
///
/// [`fetch_next`](Self::fetch_next) takes `&mut self`: one paginator models
/// one walk, and the borrow checker rules out concurrent calls on it. Clone
/// the paginator to start an independent walk from the same position.
///
/// The cursor only moves once a page has been received and decoded. A
/// failed, timed-out or cancelled fetch leaves it where it was, so the call
/// can simply be repeated.
pub struct Paginator<T> {
    http: Arc<HttpClient>,
    pagination: Pagination,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Paginator<T> {
    /// Creates a paginator positioned after the page described by `pagination`.
    #[must_use]
    pub const fn new(http: Arc<HttpClient>, pagination: Pagination) -> Self {
        Self {
            http,
            pagination,
            _marker: PhantomData,
        }
    }

    /// Returns the most recent pagination metadata.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns `true` if another page can be fetched.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.pagination.has_next()
    }
}

impl<T: DeserializeOwned> Paginator<T> {
    /// Fetches the next page and advances the cursor.
    ///
    /// Returns `Ok(None)` without sending a request once the walk is
    /// exhausted. The returned collection carries its own paginator, which
    /// starts at the same position as this one after the call.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the request fails or the page cannot be decoded.
    /// The cursor is not moved in that case.
    pub async fn fetch_next(&mut self) -> Result<Option<Collection<T>>, Error> {
        let Some(next) = self.pagination.next_url() else {
            return Ok(None);
        };

        tracing::debug!(next = %next, "Fetching next page");

        let request = HttpRequest::builder(HttpMethod::Get, next)
            .build()
            .map_err(crate::clients::HttpError::from)?;
        let response = self.http.request(request).await?;
        let page = Collection::from_response(Arc::clone(&self.http), &response.into_parser())?;

        self.pagination = page.pagination().clone();
        Ok(Some(page))
    }
}

impl<T> Clone for Paginator<T> {
    fn clone(&self) -> Self {
        Self {
            http: Arc::clone(&self.http),
            pagination: self.pagination.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Paginator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}

// Verify Paginator is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Paginator<crate::entities::Product>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, PaddleConfig};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn http() -> Arc<HttpClient> {
        let config = PaddleConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap();
        Arc::new(HttpClient::new(&config))
    }

    #[test]
    fn test_collection_from_response_reads_items_and_pagination() {
        let parser = ResponseParser::new(json!({
            "data": [{"id": "a"}, {"id": "b"}],
            "meta": {"pagination": {
                "per_page": 2,
                "next": "https://api.paddle.com/products?after=b",
                "has_more": true,
                "estimated_total": 3
            }}
        }));

        let collection: Collection<Item> = Collection::from_response(http(), &parser).unwrap();

        assert_eq!(collection.len(), 2);
        assert_eq!(collection[1].id, "b");
        assert!(collection.has_next());
        assert_eq!(collection.pagination().estimated_total, Some(3));
    }

    #[test]
    fn test_collection_rejects_non_list_data() {
        let parser = ResponseParser::new(json!({"data": {"id": "a"}}));
        let result: Result<Collection<Item>, Error> = Collection::from_response(http(), &parser);
        assert!(matches!(result, Err(Error::Response(_))));
    }

    #[tokio::test]
    async fn test_exhausted_paginator_returns_none_without_request() {
        let mut paginator: Paginator<Item> = Paginator::new(http(), Pagination::exhausted());

        assert!(!paginator.has_next());
        assert!(paginator.fetch_next().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_paginator_with_next_but_no_more_is_exhausted() {
        let mut paginator: Paginator<Item> = Paginator::new(
            http(),
            Pagination {
                per_page: 50,
                next: Some("https://api.paddle.com/products?after=z".to_string()),
                has_more: false,
                estimated_total: Some(1),
            },
        );

        assert!(paginator.fetch_next().await.unwrap().is_none());
    }
}
