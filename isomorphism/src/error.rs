use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Identifies one of the two graphs of a comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    /// The first graph passed to the matcher
    First,
    /// The second graph passed to the matcher
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Error raised while matching two graphs.
///
/// Note that two graphs *not* being isomorphic is not an error,
/// but a regular [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
pub enum MatchError<E1, E2>
where
    E1: Error + Send + Sync + 'static,
    E2: Error + Send + Sync + 'static,
{
    /// The first graph raised an error while being traversed
    #[error("Error in first graph: {0}")]
    FirstGraph(#[source] E1),
    /// The second graph raised an error while being traversed
    #[error("Error in second graph: {0}")]
    SecondGraph(#[source] E2),
    /// One of the graphs contains a statement that is not valid RDF
    /// (e.g. a blank node or a literal in predicate position)
    #[error("Malformed statement in {side} graph: {statement}")]
    MalformedStatement {
        /// The graph containing the statement
        side: Side,
        /// The offending statement, in N-Triples syntax
        statement: String,
    },
    /// The graphs have more blank nodes than the configured limit
    #[error("Too many blank nodes: {count} (limit is {limit})")]
    TooManyBlankNodes {
        /// The number of blank nodes in each graph
        count: usize,
        /// The configured limit
        limit: usize,
    },
    /// The cancellation callback interrupted the comparison
    #[error("Graph matching was cancelled")]
    Cancelled,
}

/// Type alias for the results of matching operations.
pub type MatchResult<T, E1, E2> = Result<T, MatchError<E1, E2>>;

impl<E1, E2> MatchError<E1, E2>
where
    E1: Error + Send + Sync + 'static,
    E2: Error + Send + Sync + 'static,
{
    /// Whether this error reports a malformed statement.
    pub fn is_malformed(&self) -> bool {
        matches!(self, MatchError::MalformedStatement { .. })
    }

    /// Swap the roles of the two graphs.
    ///
    /// Useful when a comparison is performed with its arguments swapped.
    pub fn reverse(self) -> MatchError<E2, E1> {
        use MatchError::*;
        match self {
            FirstGraph(e) => SecondGraph(e),
            SecondGraph(e) => FirstGraph(e),
            MalformedStatement { side, statement } => MalformedStatement {
                side: match side {
                    Side::First => Side::Second,
                    Side::Second => Side::First,
                },
                statement,
            },
            TooManyBlankNodes { count, limit } => TooManyBlankNodes { count, limit },
            Cancelled => Cancelled,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::convert::Infallible;
    use std::io;

    type IoVsNever = MatchError<io::Error, Infallible>;

    #[test]
    fn display() {
        let err = IoVsNever::FirstGraph(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(err.to_string(), "Error in first graph: boom");
        assert!(err.source().is_some());

        let err = IoVsNever::MalformedStatement {
            side: Side::Second,
            statement: "<tag:s> _:p <tag:o> .".into(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed statement in second graph: <tag:s> _:p <tag:o> ."
        );
        assert!(err.is_malformed());

        let err = IoVsNever::TooManyBlankNodes {
            count: 12,
            limit: 10,
        };
        assert_eq!(err.to_string(), "Too many blank nodes: 12 (limit is 10)");
        assert!(!err.is_malformed());
    }

    #[test]
    fn reverse() {
        let err = IoVsNever::FirstGraph(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(matches!(err.reverse(), MatchError::SecondGraph(_)));

        let err = IoVsNever::MalformedStatement {
            side: Side::First,
            statement: String::new(),
        };
        assert!(matches!(
            err.reverse(),
            MatchError::MalformedStatement {
                side: Side::Second,
                ..
            }
        ));
        assert!(matches!(
            IoVsNever::Cancelled.reverse(),
            MatchError::Cancelled
        ));
    }
}
