//! Terminal outcome of a coordinator invocation.

/// Exactly one of these is produced per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion<R, E> {
    /// Every task reported success; `R` is the aggregated result.
    Done(R),
    /// The input collection was empty: nothing was dispatched, and there
    /// is no error and no result. Distinct from an empty aggregate.
    Skipped,
    /// A task reported an error. It is the first one observed, propagated
    /// verbatim; sibling reports after it were discarded.
    Failed(E),
}

impl<R, E> Completion<R, E> {
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The aggregated result, if this invocation succeeded.
    pub fn ok(self) -> Option<R> {
        match self {
            Self::Done(result) => Some(result),
            _ => None,
        }
    }

    /// The propagated error, if this invocation failed.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_accessors() {
        let done: Completion<u8, &str> = Completion::Done(3);
        assert!(done.is_done());
        assert_eq!(done.ok(), Some(3));

        let skipped: Completion<u8, &str> = Completion::Skipped;
        assert!(skipped.is_skipped());
        assert_eq!(skipped.clone().ok(), None);
        assert_eq!(skipped.err(), None);

        let failed: Completion<u8, &str> = Completion::Failed("boom");
        assert!(failed.is_failed());
        assert_eq!(failed.err(), Some("boom"));
    }
}
