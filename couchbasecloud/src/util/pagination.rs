use crate::error::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Pagination metadata returned alongside every list response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cursor {
    pub pages: Pages,
    pub hrefs: Hrefs,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pages {
    pub page: u32,
    pub last: u32,
    pub per_page: u32,
    pub total_items: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hrefs {
    pub first: Option<String>,
    pub last: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Cursor {
    /// True once the current page is at or past the last page.
    pub fn is_last_page(&self) -> bool {
        self.pages.page >= self.pages.last
    }
}

/// A single page of a list response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub cursor: Cursor,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// List options that carry a page number.
pub trait PageOptions: Clone + Default {
    fn page(&self) -> u32;
    fn set_page(&mut self, page: u32);
}

/// Calls `list` page by page and hands every page to `callback`, together with
/// a flag telling whether it is the last one.
///
/// Iteration ends when the callback returns false, a page comes back empty
/// (the callback is not invoked for it) or the cursor reports the last page.
/// The first error returned by `list` aborts the iteration and is returned as is.
/// `options` is never modified; paging happens on a copy.
pub fn paginate<O, T, L, F>(options: Option<&O>, mut list: L, mut callback: F) -> Result<()>
where
    O: PageOptions,
    L: FnMut(&O) -> Result<Page<T>>,
    F: FnMut(Vec<T>, bool) -> bool,
{
    let mut opts = options.cloned().unwrap_or_default();

    loop {
        let page = list(&opts)?;
        if page.data.is_empty() {
            return Ok(());
        }

        let last = page.cursor.is_last_page();
        debug!(
            page = page.cursor.pages.page,
            last_page = page.cursor.pages.last,
            items = page.data.len(),
            "fetched page"
        );

        if !callback(page.data, last) || last {
            return Ok(());
        }

        let next = match page.cursor.pages.page.max(opts.page()).checked_add(1) {
            Some(next) => next,
            None => return Ok(()),
        };
        opts.set_page(next);
    }
}
