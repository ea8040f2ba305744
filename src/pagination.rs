use serde::Serialize;

/// How many numbered pages are shown around the current one.
const PAGE_RANGE: usize = 5;

const BREAK_LABEL: &str = "...";

/// One element of the page-selector control: either a numbered link or a
/// break marker standing in for elided pages.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub label: String,
    /// Zero-based link target. Meaningless for breaks.
    pub page: usize,
    pub current: bool,
    pub is_break: bool,
}

impl PageLink {
    fn number(page: usize, current: usize) -> Self {
        PageLink {
            label: (page + 1).to_string(),
            page,
            current: page == current,
            is_break: false,
        }
    }

    fn break_mark() -> Self {
        PageLink {
            label: BREAK_LABEL.to_string(),
            page: 0,
            current: false,
            is_break: true,
        }
    }
}

/// Builds the windowed page list: up to `PAGE_RANGE` numbered pages
/// around `current`, with the first and last page always reachable and
/// breaks where pages are elided. Empty when there are no pages.
pub fn page_links(current: usize, total: usize) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }
    let last = total - 1;

    // Small enough to show everything without breaks.
    if total <= PAGE_RANGE + 2 {
        return (0..total).map(|p| PageLink::number(p, current)).collect();
    }

    let mut start = current.saturating_sub(PAGE_RANGE / 2);
    let mut end = start + PAGE_RANGE - 1;
    if end > last {
        end = last;
        start = last + 1 - PAGE_RANGE;
    }

    let mut links = Vec::new();
    if start > 0 {
        links.push(PageLink::number(0, current));
        if start > 1 {
            links.push(PageLink::break_mark());
        }
    }
    for page in start..=end {
        links.push(PageLink::number(page, current));
    }
    if end < last {
        if end + 1 < last {
            links.push(PageLink::break_mark());
        }
        links.push(PageLink::number(last, current));
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[PageLink]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn no_pages_renders_nothing() {
        assert!(page_links(0, 0).is_empty());
    }

    #[test]
    fn small_totals_show_every_page() {
        let links = page_links(2, 7);
        assert_eq!(labels(&links), vec!["1", "2", "3", "4", "5", "6", "7"]);
        assert!(links[2].current);
        assert!(links.iter().all(|l| !l.is_break));
    }

    #[test]
    fn window_at_the_start_breaks_only_towards_the_end() {
        let links = page_links(0, 20);
        assert_eq!(labels(&links), vec!["1", "2", "3", "4", "5", "...", "20"]);
        assert!(links[0].current);
    }

    #[test]
    fn window_in_the_middle_breaks_on_both_sides() {
        let links = page_links(10, 20);
        assert_eq!(
            labels(&links),
            vec!["1", "...", "9", "10", "11", "12", "13", "...", "20"]
        );
        let current: Vec<_> = links.iter().filter(|l| l.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].page, 10);
    }

    #[test]
    fn window_at_the_end_keeps_the_last_pages_contiguous() {
        let links = page_links(19, 20);
        assert_eq!(labels(&links), vec!["1", "...", "16", "17", "18", "19", "20"]);
        assert!(links.last().unwrap().current);
    }

    #[test]
    fn adjacent_window_needs_no_break() {
        // Window starts right after page one: a break would elide nothing.
        let links = page_links(3, 10);
        assert_eq!(
            labels(&links),
            vec!["1", "2", "3", "4", "5", "6", "...", "10"]
        );
    }

    #[test]
    fn breaks_carry_no_target() {
        let links = page_links(10, 20);
        assert!(links.iter().any(|l| l.is_break));
        assert!(links.iter().filter(|l| l.is_break).all(|l| !l.current));
    }
}
