//! Bounded page-at-a-time reads over a remote row source.
//!
//! The store caps any single select, so large reads walk fixed-size pages
//! until a short page signals the end or the hard row ceiling is reached.
//! A failed page abandons the whole read; partial rosters are worse than
//! none because downstream matching silently loses records.

/// Rows requested per page.
pub const PAGE_SIZE: u64 = 1_000;

/// Hard ceiling on rows accumulated by a single read.
pub const MAX_ROWS: u64 = 10_000;

/// Read pages of up to `page_size` rows via `fetch_page(offset, limit)`
/// until a short page, `max_rows`, or an error.
///
/// The error from a failed page is returned as-is and any rows already
/// accumulated are discarded.
pub async fn read_all_pages<T, E, F, Fut>(
    page_size: u64,
    max_rows: u64,
    mut fetch_page: F,
) -> Result<Vec<T>, E>
where
    F: FnMut(u64, u64) -> Fut,
    Fut: Future<Output = Result<Vec<T>, E>>,
{
    let mut rows = Vec::new();
    let mut page: u64 = 0;
    while page * page_size < max_rows {
        let offset = page * page_size;
        let limit = page_size.min(max_rows - offset);
        let batch = fetch_page(offset, limit).await?;
        let short = (batch.len() as u64) < limit;
        rows.extend(batch);
        if short {
            break;
        }
        page += 1;
    }
    Ok(rows)
}
