//! Page slicing for the question listing

/// Fixed page size for question listings
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slice one page out of the full ordered question list.
///
/// Pages are 1-indexed. Returns `None` when the requested page holds no
/// items: page below 1, page beyond the last, or an empty list.
pub fn page_slice<T>(items: &[T], page: i64) -> Option<&[T]> {
    if page < 1 {
        return None;
    }

    let start = usize::try_from(page - 1)
        .ok()?
        .checked_mul(QUESTIONS_PER_PAGE)?;
    if start >= items.len() {
        return None;
    }

    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    Some(&items[start..end])
}

/// Parse the `page` query value leniently: absent or non-numeric input
/// falls back to the first page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_is_first_ten() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 1), Some(&items[0..10]));
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 3), Some(&items[20..25]));
    }

    #[test]
    fn exact_boundary_page() {
        let items: Vec<u32> = (0..20).collect();
        assert_eq!(page_slice(&items, 2), Some(&items[10..20]));
        assert_eq!(page_slice(&items, 3), None);
    }

    #[test]
    fn page_beyond_range_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 1000), None);
    }

    #[test]
    fn page_below_one_is_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&items, 0), None);
        assert_eq!(page_slice(&items, -3), None);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let items: Vec<u32> = vec![];
        assert_eq!(page_slice(&items, 1), None);
    }

    #[test]
    fn lenient_page_parsing() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("4")), 4);
        assert_eq!(parse_page(Some("abc")), 1);
        assert_eq!(parse_page(Some("")), 1);
    }
}
