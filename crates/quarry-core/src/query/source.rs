use std::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Identifies a query source (a from, join or let clause) of a query model.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuerySourceId(usize);

impl QuerySourceId {
    pub(crate) fn next() -> QuerySourceId {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        QuerySourceId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for QuerySourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for QuerySourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
