/// Pure, 1-based pagination projection over an in-memory collection.
///
/// The pager owns nothing: the collection is the single source of
/// truth and a page is recomputed from it on every read. Switching
/// pages is purely local and never mutates the collection. Navigation
/// past either bound is a no-op; callers render the corresponding
/// control as disabled.
#[derive(Debug, Clone)]
pub struct Pager {
    page_size: usize,
    current: usize,
}

impl Pager {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current: 1,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page index, 1-based.
    pub fn current_page(&self) -> usize {
        self.current
    }

    /// `ceil(count / page_size)`.
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    pub fn can_go_back(&self) -> bool {
        self.current > 1
    }

    pub fn can_go_forward(&self, count: usize) -> bool {
        self.current < self.total_pages(count)
    }

    pub fn go_back(&mut self) {
        if self.can_go_back() {
            self.current -= 1;
        }
    }

    pub fn go_forward(&mut self, count: usize) {
        if self.can_go_forward(count) {
            self.current += 1;
        }
    }

    /// Jump to a page if it exists.
    pub fn go_to(&mut self, page: usize, count: usize) {
        if page >= 1 && page <= self.total_pages(count) {
            self.current = page;
        }
    }

    /// The slice of `items` visible on the current page.
    pub fn page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_is_ceiling_division() {
        let pager = Pager::new(5);
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(5), 1);
        assert_eq!(pager.total_pages(6), 2);
        assert_eq!(pager.total_pages(12), 3);
    }

    #[test]
    fn pages_concatenate_to_the_original_collection() {
        let items: Vec<u32> = (0..12).collect();
        let mut pager = Pager::new(5);

        let mut seen = Vec::new();
        loop {
            seen.extend_from_slice(pager.page(&items));
            if !pager.can_go_forward(items.len()) {
                break;
            }
            pager.go_forward(items.len());
        }
        assert_eq!(seen, items);
    }

    #[test]
    fn twelve_items_at_page_size_five_split_five_five_two() {
        let items: Vec<u32> = (0..12).collect();
        let mut pager = Pager::new(5);

        assert_eq!(pager.page(&items).len(), 5);
        pager.go_forward(items.len());
        assert_eq!(pager.page(&items).len(), 5);
        pager.go_forward(items.len());
        assert_eq!(pager.page(&items), &[10, 11]);
        assert!(!pager.can_go_forward(items.len()));
    }

    #[test]
    fn navigation_is_a_no_op_at_the_bounds() {
        let items = [1, 2, 3];
        let mut pager = Pager::new(5);

        assert!(!pager.can_go_back());
        pager.go_back();
        assert_eq!(pager.current_page(), 1);

        pager.go_forward(items.len());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn page_slicing_never_reads_out_of_bounds() {
        let items = [1, 2];
        let mut pager = Pager::new(2);
        pager.go_to(1, items.len());
        // Collection shrank behind the pager's back; the projection
        // stays a read-only view and just comes back empty.
        let empty: [i32; 0] = [];
        let mut beyond = Pager::new(2);
        beyond.current = 4;
        assert_eq!(beyond.page(&items), &empty);
    }
}
