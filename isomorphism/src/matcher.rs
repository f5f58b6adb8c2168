use crate::error::{MatchError, MatchResult};
use crate::index::{index_graph, GroundIndex};
use crate::search::{BijectionSearch, SearchCancelled};
use crate::signature::candidate_buckets;
use graphmatch_api::graph::Graph;
use graphmatch_api::term::BnodeId;
use std::collections::BTreeMap;
use std::fmt;

/// A bijection between the blank nodes of two graphs,
/// keyed by the labels of the first graph.
pub type BnodeMapping = BTreeMap<BnodeId<Box<str>>, BnodeId<Box<str>>>;

/// The result of comparing two graphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The graphs are isomorphic, through the given mapping
    Isomorphic(BnodeMapping),
    /// The graphs are not isomorphic, as detected at the given stage
    NotIsomorphic(Mismatch),
}

impl Outcome {
    /// Whether the graphs are isomorphic.
    pub fn is_isomorphic(&self) -> bool {
        matches!(self, Outcome::Isomorphic(_))
    }

    /// The blank node mapping, if the graphs are isomorphic.
    pub fn mapping(self) -> Option<BnodeMapping> {
        match self {
            Outcome::Isomorphic(m) => Some(m),
            Outcome::NotIsomorphic(_) => None,
        }
    }

    /// The reason why the graphs are not isomorphic, if they are not.
    pub fn mismatch(&self) -> Option<Mismatch> {
        match self {
            Outcome::Isomorphic(_) => None,
            Outcome::NotIsomorphic(m) => Some(*m),
        }
    }
}

/// The stage at which two graphs were found not to be isomorphic.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mismatch {
    /// The graphs have a different number of (distinct) statements
    StatementCount,
    /// The graphs have different sets of statements without blank nodes
    GroundStatements,
    /// The graphs have a different number of blank nodes
    BlankNodeCount,
    /// Some signature is not shared by the same number of blank nodes in both graphs
    SignatureBuckets,
    /// The search exhausted all candidate bijections
    NoBijection,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let txt = match self {
            Mismatch::StatementCount => "different number of statements",
            Mismatch::GroundStatements => "different ground statements",
            Mismatch::BlankNodeCount => "different number of blank nodes",
            Mismatch::SignatureBuckets => "incompatible blank node signatures",
            Mismatch::NoBijection => "no bijection between blank nodes",
        };
        f.write_str(txt)
    }
}

/// Compares RDF graphs up to blank node renaming.
///
/// A matcher holds only configuration,
/// every comparison works on its own data.
///
/// ```
/// # use graphmatch_isomorphism::GraphMatcher;
/// # use graphmatch_api::term::SimpleTerm;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let knows = SimpleTerm::iri("http://xmlns.com/foaf/0.1/knows");
/// let g1 = vec![[SimpleTerm::bnode("x")?, knows.clone(), SimpleTerm::bnode("y")?]];
/// let g2 = vec![[SimpleTerm::bnode("p")?, knows, SimpleTerm::bnode("q")?]];
///
/// let matcher = GraphMatcher::new().with_blank_node_limit(1000);
/// let mapping = matcher.find_bijection(&g1, &g2)?.unwrap();
/// assert_eq!(mapping["x"].as_str(), "p");
/// assert_eq!(mapping["y"].as_str(), "q");
/// # Ok(()) }
/// ```
#[derive(Default)]
pub struct GraphMatcher<'c> {
    blank_node_limit: Option<usize>,
    cancellation: Option<Box<dyn Fn() -> bool + 'c>>,
}

impl<'c> GraphMatcher<'c> {
    /// A matcher with no blank node limit and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`MatchError::TooManyBlankNodes`]
    /// when the graphs have more than `limit` blank nodes.
    pub fn with_blank_node_limit(mut self, limit: usize) -> Self {
        self.blank_node_limit = Some(limit);
        self
    }

    /// Poll `cancelled` during the search,
    /// and fail with [`MatchError::Cancelled`] as soon as it returns `true`.
    pub fn with_cancellation<F>(mut self, cancelled: F) -> Self
    where
        F: Fn() -> bool + 'c,
    {
        self.cancellation = Some(Box::new(cancelled));
        self
    }

    /// Compare `g1` and `g2`.
    ///
    /// # Error
    /// Errors raised by `g1` (resp. `g2`) while being traversed
    /// are returned as [`MatchError::FirstGraph`] (resp. [`MatchError::SecondGraph`]).
    pub fn compare<G1, G2>(&self, g1: &G1, g2: &G2) -> MatchResult<Outcome, G1::Error, G2::Error>
    where
        G1: Graph + ?Sized,
        G2: Graph + ?Sized,
    {
        use Outcome::NotIsomorphic;

        let mut ground = GroundIndex::new();
        let a = index_graph(g1, &mut ground).map_err(|e| e.in_first::<G2::Error>())?;
        let b = index_graph(g2, &mut ground).map_err(|e| e.in_second::<G1::Error>())?;
        log::trace!(
            "indexed {} + {} statements, {} ground terms",
            a.len(),
            b.len(),
            ground.len()
        );

        if a.len() != b.len() {
            log::debug!("statement count: {} vs {}", a.len(), b.len());
            return Ok(NotIsomorphic(Mismatch::StatementCount));
        }
        if a.ground_statements() != b.ground_statements() {
            log::debug!("ground statements differ");
            return Ok(NotIsomorphic(Mismatch::GroundStatements));
        }
        let count = a.bnode_count();
        if count != b.bnode_count() {
            log::debug!("blank node count: {} vs {}", count, b.bnode_count());
            return Ok(NotIsomorphic(Mismatch::BlankNodeCount));
        }
        if let Some(limit) = self.blank_node_limit {
            if count > limit {
                return Err(MatchError::TooManyBlankNodes { count, limit });
            }
        }

        let Some(buckets) = candidate_buckets(&a, &b) else {
            return Ok(NotIsomorphic(Mismatch::SignatureBuckets));
        };
        log::trace!(
            "largest bucket: {} blank nodes",
            buckets
                .buckets()
                .iter()
                .map(|b| b.sources.len())
                .max()
                .unwrap_or(0)
        );
        let mut search = BijectionSearch::new(&a, &b, &buckets);
        let found = match &self.cancellation {
            Some(cancelled) => search.run(&**cancelled),
            None => search.run(&|| false),
        };
        log::trace!("search took {} steps", search.steps());
        match found {
            Err(SearchCancelled) => Err(MatchError::Cancelled),
            Ok(None) => Ok(NotIsomorphic(Mismatch::NoBijection)),
            Ok(Some(targets)) => {
                let mapping = targets
                    .into_iter()
                    .enumerate()
                    .map(|(i, j)| (a.bnode_label(i).clone(), b.bnode_label(j).clone()))
                    .collect();
                Ok(Outcome::Isomorphic(mapping))
            }
        }
    }

    /// Whether `g1` and `g2` are isomorphic.
    ///
    /// See [`compare`](GraphMatcher::compare) for errors.
    pub fn are_isomorphic<G1, G2>(&self, g1: &G1, g2: &G2) -> MatchResult<bool, G1::Error, G2::Error>
    where
        G1: Graph + ?Sized,
        G2: Graph + ?Sized,
    {
        Ok(self.compare(g1, g2)?.is_isomorphic())
    }

    /// A bijection from the blank nodes of `g1` to those of `g2`,
    /// if they are isomorphic.
    ///
    /// See [`compare`](GraphMatcher::compare) for errors.
    pub fn find_bijection<G1, G2>(
        &self,
        g1: &G1,
        g2: &G2,
    ) -> MatchResult<Option<BnodeMapping>, G1::Error, G2::Error>
    where
        G1: Graph + ?Sized,
        G2: Graph + ?Sized,
    {
        Ok(self.compare(g1, g2)?.mapping())
    }
}

impl<'c> fmt::Debug for GraphMatcher<'c> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphMatcher")
            .field("blank_node_limit", &self.blank_node_limit)
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}

/// Computes whether two graphs are isomorphic,
/// with a default [`GraphMatcher`].
///
/// # Error
/// If an error occurs while traversing `g1`,
/// a [`MatchError::FirstGraph`] is returned.
///
/// If an error occurs while traversing `g2`,
/// a [`MatchError::SecondGraph`] is returned.
pub fn isomorphic_graphs<G1, G2>(g1: &G1, g2: &G2) -> MatchResult<bool, G1::Error, G2::Error>
where
    G1: Graph + ?Sized,
    G2: Graph + ?Sized,
{
    GraphMatcher::new().are_isomorphic(g1, g2)
}

/// Computes a bijection between the blank nodes of two graphs,
/// with a default [`GraphMatcher`].
///
/// Return `None` if the graphs are not isomorphic.
/// See [`isomorphic_graphs`] for errors.
pub fn find_bijection<G1, G2>(
    g1: &G1,
    g2: &G2,
) -> MatchResult<Option<BnodeMapping>, G1::Error, G2::Error>
where
    G1: Graph + ?Sized,
    G2: Graph + ?Sized,
{
    GraphMatcher::new().find_bijection(g1, g2)
}
