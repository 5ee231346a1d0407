//! Lazy, sequential page streams.

use std::future::Future;

use futures::Stream;
use futures::stream;

use crate::error::GitHubError;

use super::models::Page;

/// Stream the pages produced by `fetch`, starting at page 1.
///
/// A page is only requested when the consumer polls for it, so a caller that
/// stops early never fetches the remaining pages. The stream ends after the
/// first page without a successor, or right after yielding an error.
pub fn paginate<T, F, Fut>(fetch: F) -> impl Stream<Item = Result<Vec<T>, GitHubError>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, GitHubError>>,
{
    stream::try_unfold((fetch, Some(1u32)), |(mut fetch, page)| async move {
        let Some(page) = page else {
            return Ok(None);
        };
        let Page { items, next } = fetch(page).await?;
        Ok(Some((items, (fetch, next))))
    })
}
