/// Errors returned by [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The caller asked for a move from an empty candidate list.
    #[error("no candidate moves to choose from")]
    NoCandidates,
}
