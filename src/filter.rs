use k8s_openapi::api::core::v1::Event;

/// Accept/reject predicate over Kubernetes events
///
/// Implementors are immutable after construction, so a filter can be shared
/// across threads for read-only querying without synchronization.
pub trait EventFilter: Send + Sync {
    /// Check if an event should be retained
    fn filter(&self, event: &Event) -> bool;
}

/// How a chain combines the verdicts of its filters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainMode {
    /// Every filter must accept; an empty chain accepts everything
    All,
    /// At least one filter must accept; an empty chain rejects everything
    Any,
}

/// Ordered set of filters combined under a single mode
///
/// The chain implements [`EventFilter`] itself, so chains nest to build
/// AND-of-OR or OR-of-AND trees without touching the individual filters.
pub struct FilterChain {
    filters: Vec<Box<dyn EventFilter>>,
    mode: ChainMode,
}

impl FilterChain {
    /// Create an empty chain with the given mode
    pub fn new(mode: ChainMode) -> Self {
        Self {
            filters: Vec::new(),
            mode,
        }
    }

    /// Append a filter to the chain
    pub fn push(&mut self, filter: Box<dyn EventFilter>) {
        self.filters.push(filter);
    }

    /// Builder-style variant of [`push`](Self::push)
    pub fn with(mut self, filter: Box<dyn EventFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Check if the chain holds no filters
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl EventFilter for FilterChain {
    fn filter(&self, event: &Event) -> bool {
        match self.mode {
            ChainMode::All => self.filters.iter().all(|f| f.filter(event)),
            ChainMode::Any => self.filters.iter().any(|f| f.filter(event)),
        }
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("mode", &self.mode)
            .field("len", &self.filters.len())
            .finish()
    }
}
