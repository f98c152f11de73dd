// ============================================================================
// PAGINATOR - client-side pagination over a fetched collection
// ============================================================================
// The collection is fetched once, cached here, and served back in fixed-size
// pages as the user scrolls. No rendering dependency: the owning hook feeds
// fetch results in and appends returned pages to the view.
// ============================================================================

/// Lifecycle of the cached collection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    /// Nothing fetched yet.
    Empty,
    /// Initial fetch outstanding.
    Loading,
    /// Collection cached, pages remaining.
    Ready,
    /// Every item has been served (or the backend returned no items).
    Exhausted,
    /// Initial fetch failed; the cache is discarded.
    Error,
}

/// Outcome of asking for the next page.
#[derive(Clone, PartialEq, Debug)]
pub enum PageRequest<T> {
    /// Next slice of the cached collection, in original order.
    Items(Vec<T>),
    /// No items left; nothing further will be served.
    Exhausted,
    /// A previous page request is still being applied; this call is a no-op.
    Busy,
    /// The collection is not in a pageable state (empty, loading or failed).
    Unavailable,
}

/// Pagination state machine: `Empty → Loading → Ready → Exhausted`, with
/// `Error` reachable from `Loading`. One instance is owned by one view
/// controller; there is no shared module state.
#[derive(Clone, PartialEq, Debug)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    page_index: usize,
    phase: Phase,
    page_in_flight: bool,
}

impl<T: Clone> Paginator<T> {
    pub fn new(page_size: usize) -> Self {
        assert!(page_size > 0, "page size must be positive");
        Self {
            items: Vec::new(),
            page_size,
            page_index: 0,
            phase: Phase::Empty,
            page_in_flight: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Total size of the cached collection.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// True once the backend answered with an empty collection. The view
    /// renders a "no results" placeholder instead of paging.
    pub fn is_empty_result(&self) -> bool {
        self.phase == Phase::Exhausted && self.items.is_empty()
    }

    /// Start the initial fetch. Returns false (and changes nothing) if a
    /// fetch is already outstanding, so rapid triggers collapse into one.
    pub fn begin_load(&mut self) -> bool {
        if self.phase == Phase::Loading {
            return false;
        }
        self.phase = Phase::Loading;
        self.page_in_flight = false;
        true
    }

    /// Cache the fetched collection and reset the cursor. An empty
    /// collection is terminal immediately: it never pages.
    pub fn complete_load(&mut self, items: Vec<T>) {
        self.phase = if items.is_empty() {
            Phase::Exhausted
        } else {
            Phase::Ready
        };
        self.items = items;
        self.page_index = 0;
        self.page_in_flight = false;
    }

    /// The initial fetch failed: discard any cached collection.
    pub fn fail_load(&mut self) {
        self.items.clear();
        self.page_index = 0;
        self.phase = Phase::Error;
        self.page_in_flight = false;
    }

    /// Discard everything (new filter / fresh initial load).
    pub fn reset(&mut self) {
        self.items.clear();
        self.page_index = 0;
        self.phase = Phase::Empty;
        self.page_in_flight = false;
    }

    /// Request the next page. A successful request holds the in-flight
    /// guard until `finish_next_page`; calls arriving meanwhile get `Busy`
    /// and are dropped, not queued. An empty slice transitions to
    /// `Exhausted`.
    pub fn begin_next_page(&mut self) -> PageRequest<T> {
        if self.page_in_flight {
            return PageRequest::Busy;
        }
        match self.phase {
            Phase::Ready => {}
            Phase::Exhausted => return PageRequest::Exhausted,
            Phase::Empty | Phase::Loading | Phase::Error => return PageRequest::Unavailable,
        }

        let start = self.page_index * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        if start >= end {
            self.phase = Phase::Exhausted;
            return PageRequest::Exhausted;
        }

        self.page_in_flight = true;
        PageRequest::Items(self.items[start..end].to_vec())
    }

    /// The page returned by `begin_next_page` has been applied to the view:
    /// advance the cursor by exactly one page and release the guard.
    pub fn finish_next_page(&mut self) {
        if self.page_in_flight {
            self.page_index += 1;
            self.page_in_flight = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(n: usize, page_size: usize) -> Paginator<usize> {
        let mut p = Paginator::new(page_size);
        assert!(p.begin_load());
        p.complete_load((0..n).collect());
        p
    }

    fn drain(p: &mut Paginator<usize>) -> (Vec<usize>, usize) {
        let mut served = Vec::new();
        let mut pages = 0;
        loop {
            match p.begin_next_page() {
                PageRequest::Items(items) => {
                    served.extend(items);
                    p.finish_next_page();
                    pages += 1;
                }
                PageRequest::Exhausted => return (served, pages),
                other => panic!("unexpected page request result: {:?}", other),
            }
        }
    }

    #[test]
    fn serves_all_items_in_order_without_duplicates() {
        let mut p = loaded(11, 4);
        let (served, pages) = drain(&mut p);
        assert_eq!(served, (0..11).collect::<Vec<_>>());
        assert_eq!(pages, 3); // ceil(11 / 4)
        assert_eq!(p.phase(), Phase::Exhausted);
    }

    #[test]
    fn exact_multiple_exhausts_only_after_the_last_full_page() {
        let mut p = loaded(8, 4);
        assert!(matches!(p.begin_next_page(), PageRequest::Items(_)));
        p.finish_next_page();
        assert!(matches!(p.begin_next_page(), PageRequest::Items(_)));
        p.finish_next_page();
        // Still Ready: exhaustion happens on the request after the last page.
        assert_eq!(p.phase(), Phase::Ready);
        assert_eq!(p.begin_next_page(), PageRequest::Exhausted);
        assert_eq!(p.phase(), Phase::Exhausted);
    }

    #[test]
    fn single_full_page_scenario() {
        // 8 items, page size 8: first call yields all 8, second exhausts.
        let mut p = loaded(8, 8);
        match p.begin_next_page() {
            PageRequest::Items(items) => assert_eq!(items.len(), 8),
            other => panic!("expected items, got {:?}", other),
        }
        p.finish_next_page();
        assert_eq!(p.phase(), Phase::Ready);
        assert_eq!(p.begin_next_page(), PageRequest::Exhausted);
    }

    #[test]
    fn in_flight_guard_makes_overlapping_calls_a_noop() {
        let mut p = loaded(10, 4);
        assert!(matches!(p.begin_next_page(), PageRequest::Items(_)));
        // Second call before the first completes: dropped, not queued.
        assert_eq!(p.begin_next_page(), PageRequest::Busy);
        assert_eq!(p.begin_next_page(), PageRequest::Busy);
        p.finish_next_page();
        match p.begin_next_page() {
            PageRequest::Items(items) => assert_eq!(items, vec![4, 5, 6, 7]),
            other => panic!("expected second page, got {:?}", other),
        }
    }

    #[test]
    fn empty_collection_is_terminal_immediately() {
        let mut p = Paginator::<usize>::new(8);
        p.begin_load();
        p.complete_load(Vec::new());
        assert_eq!(p.phase(), Phase::Exhausted);
        assert!(p.is_empty_result());
        assert_eq!(p.begin_next_page(), PageRequest::Exhausted);
    }

    #[test]
    fn begin_load_guards_against_overlapping_fetches() {
        let mut p = Paginator::<usize>::new(8);
        assert!(p.begin_load());
        assert!(!p.begin_load());
        assert_eq!(p.begin_next_page(), PageRequest::Unavailable);
    }

    #[test]
    fn failed_load_discards_the_cache() {
        let mut p = loaded(5, 2);
        assert!(p.begin_load());
        p.fail_load();
        assert_eq!(p.phase(), Phase::Error);
        assert_eq!(p.total(), 0);
        assert_eq!(p.begin_next_page(), PageRequest::Unavailable);
    }

    #[test]
    fn reload_resets_the_cursor() {
        let mut p = loaded(6, 2);
        assert!(matches!(p.begin_next_page(), PageRequest::Items(_)));
        p.finish_next_page();
        // New filter: fresh load starts paging from the beginning again.
        p.begin_load();
        p.complete_load(vec![100, 101, 102]);
        match p.begin_next_page() {
            PageRequest::Items(items) => assert_eq!(items, vec![100, 101]),
            other => panic!("expected first page, got {:?}", other),
        }
    }

    #[test]
    fn reset_returns_to_empty() {
        let mut p = loaded(6, 2);
        p.reset();
        assert_eq!(p.phase(), Phase::Empty);
        assert_eq!(p.total(), 0);
        assert_eq!(p.begin_next_page(), PageRequest::Unavailable);
    }
}
