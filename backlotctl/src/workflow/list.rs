use std::fmt::Display;

use crate::workflow::pager::Pager;

/// Render state of a listing screen.
///
/// The whole machine: `Loading -> Ready` on fetch success, `Loading ->
/// Failed` on fetch failure. A mutation-triggered refetch re-enters
/// from `Loading`; there is no merge or diffing, the fetched
/// collection replaces local state wholesale.
#[derive(Debug, Clone)]
pub enum ListPhase<T> {
    Loading,
    Ready(Vec<T>),
    Failed(String),
}

/// A remote collection plus its local pagination projection.
#[derive(Debug, Clone)]
pub struct ResourceList<T> {
    phase: ListPhase<T>,
    pager: Pager,
}

impl<T> ResourceList<T> {
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: ListPhase::Loading,
            pager: Pager::new(page_size),
        }
    }

    /// Re-enter the state machine ahead of a (re)fetch. The page index
    /// survives the refetch, matching the screen staying mounted.
    pub fn begin_refresh(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// Settle the in-flight fetch.
    pub fn resolve<E: Display>(&mut self, outcome: Result<Vec<T>, E>) {
        self.phase = match outcome {
            Ok(items) => ListPhase::Ready(items),
            Err(err) => ListPhase::Failed(err.to_string()),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, ListPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            ListPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The full collection; empty unless ready.
    pub fn items(&self) -> &[T] {
        match &self.phase {
            ListPhase::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// The slice visible on the current page.
    pub fn current_page(&self) -> &[T] {
        self.pager.page(self.items())
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn go_forward(&mut self) {
        let count = self.len();
        self.pager.go_forward(count);
    }

    pub fn go_back(&mut self) {
        self.pager.go_back();
    }

    /// Drop entries matching the predicate without a refetch.
    ///
    /// Used where the observed reconciliation is local removal after a
    /// successful delete rather than a full reload.
    pub fn remove_local<F: FnMut(&T) -> bool>(&mut self, mut is_deleted: F) {
        if let ListPhase::Ready(items) = &mut self.phase {
            items.retain(|item| !is_deleted(item));
        }
    }
}
