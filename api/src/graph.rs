//! An RDF graph, the central notion of the RDF data model,
//! is a collection of triples.
//!
//! This module provides the [`Graph`] trait,
//! through which the matcher reads the graphs it compares,
//! as well as implementations for [standard collections](#foreign-impls).

use crate::triple::Triple;
use std::error::Error;

mod _foreign_impl;

/// Type alias for the triples returned by a graph.
pub type GTriple<'a, G> = <G as Graph>::Triple<'a>;
/// Type alias for results produced by a graph.
pub type GResult<G, T> = Result<T, <G as Graph>::Error>;
/// Type alias for fallible triple iterators produced by a graph.
///
/// See [`Graph::triples`] for more information about how to use it.
pub type GTripleSource<'a, G> = Box<dyn Iterator<Item = GResult<G, GTriple<'a, G>>> + 'a>;

/// Generic trait for RDF graphs.
///
/// For convenience, this trait is implemented
/// by [standard collections of triples](#foreign-impls).
///
/// NB: the semantics of this trait allows a graph to yield duplicate triples;
/// consumers must treat them as a single triple, since an RDF graph is a set.
pub trait Graph {
    /// Determine the type of [`Triple`]s
    /// that the methods of this graph will yield.
    type Triple<'x>: Triple
    where
        Self: 'x;
    /// The error type that this graph may raise.
    type Error: Error + Send + Sync + 'static;

    /// An iterator visiting all triples of this graph in arbitrary order.
    ///
    /// This iterator is fallible:
    /// its items are `Result`s,
    /// an error may occur at any time during the iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// # use graphmatch_api::graph::Graph;
    /// # use graphmatch_api::term::SimpleTerm;
    /// # fn foo() -> Result<(), std::convert::Infallible> {
    /// # let graph = Vec::<[SimpleTerm; 3]>::new();
    /// for t in graph.triples() {
    ///     let t = t?; // rethrow error if any
    ///     // do something with t
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn triples(&self) -> GTripleSource<'_, Self>;
}
