//! Paginated API fetching.
//!
//! Every list endpoint this tool consumes is cursor-paginated. The collector
//! below fetches one page at a time, in order, at the largest page size the
//! API allows, and either returns the complete result set or nothing: a
//! failed page discards everything collected so far, so an incomplete
//! listing is never rendered as if it were complete.

use std::future::Future;

use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::GitHubError;

/// Items requested per page, the maximum the GitHub API allows.
pub const PAGE_SIZE: usize = 100;

/// Collect every page from a page-fetching operation.
///
/// Pages are numbered from 1 and fetched strictly in order; results are
/// concatenated as received, never re-sorted. A page returning fewer than
/// [`PAGE_SIZE`] items is the end-of-listing signal. Any page error aborts
/// the whole collection.
pub async fn collect_pages<T, F, Fut>(mut fetch_page: F) -> Result<Vec<T>, GitHubError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Vec<T>, GitHubError>>,
{
    let mut all_items = Vec::new();
    let mut page = 1u32;

    loop {
        let items = fetch_page(page).await?;
        let count = items.len();
        all_items.extend(items);

        debug!(page, count, total = all_items.len(), "Fetched page");

        if count < PAGE_SIZE {
            break;
        }
        page += 1;
    }

    Ok(all_items)
}

/// Collect every page of a list endpoint via raw GETs.
///
/// `route_for_page` builds the API route for a given page number; it must
/// include the `per_page` and `page` query parameters (see the callers in
/// [`super::org`], [`super::repo`], and [`super::team`]).
pub async fn fetch_all<T>(
    client: &Octocrab,
    route_for_page: impl Fn(u32) -> String,
) -> Result<Vec<T>, GitHubError>
where
    T: DeserializeOwned,
{
    collect_pages(|page| {
        let route = route_for_page(page);
        async move {
            client
                .get(&route, None::<&()>)
                .await
                .map_err(GitHubError::Api)
        }
    })
    .await
}
