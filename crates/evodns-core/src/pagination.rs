//! Offset pagination
//!
//! List endpoints return one page at a time together with the total number
//! of elements the server holds. [`fetch_all`] walks the offsets sequentially
//! until the reported total is covered.

use std::future::Future;

use crate::error::{Error, Result};

/// Position of one page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of elements requested
    pub page_size: u32,
    /// Index of the first element requested
    pub offset: u64,
}

/// A decoded page: its elements plus the server-reported total
pub trait PageEnvelope {
    /// Element type of the listing
    type Item;

    /// Split the page into its elements and the reported total
    fn into_parts(self) -> (Vec<Self::Item>, u64);
}

/// Fetch every page of a listing and concatenate the elements
///
/// Pages are requested strictly one after another, starting at offset 0 and
/// advancing by `page_size`, because each continuation depends on the total
/// reported by the previous page. The walk stops once
/// `total < offset + page_size`.
///
/// The number of iterations is bounded only by the server's total. A server
/// that keeps reporting a growing total keeps the loop going.
///
/// Elements are returned in server order, without deduplication. The first
/// failing page aborts the walk and its error is returned; no partial result
/// is produced.
pub async fn fetch_all<P, F, Fut>(page_size: u32, mut fetch_page: F) -> Result<Vec<P::Item>>
where
    P: PageEnvelope,
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<P>>,
{
    if page_size == 0 {
        return Err(Error::invalid_input("page size must be > 0"));
    }

    let step = u64::from(page_size);
    let mut items = Vec::new();
    let mut offset = 0u64;

    loop {
        let page = fetch_page(PageRequest { page_size, offset }).await?;
        let (elements, total) = page.into_parts();

        tracing::debug!(
            offset,
            total,
            received = elements.len(),
            "Fetched page"
        );

        items.extend(elements);

        if total < offset + step {
            break;
        }
        offset += step;
    }

    Ok(items)
}
