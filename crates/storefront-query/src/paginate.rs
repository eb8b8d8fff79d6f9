//! 1-indexed fixed-size pagination over product lists.

use storefront_core::Product;

/// Returns the products on `page`, counting pages from 1.
///
/// Page 0 and a page size of 0 are both out of range and yield an empty
/// page, as does any page past the end of the list. A trailing partial
/// page is returned as-is.
#[must_use]
pub fn paginate(products: &[Product], page: usize, page_size: usize) -> Vec<Product> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page - 1).saturating_mul(page_size);
    products.iter().skip(start).take(page_size).cloned().collect()
}

/// Number of pages needed to show `total` items at `page_size` per page.
///
/// A partial trailing page counts as a page; a page size of 0 yields 0.
#[must_use]
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}
