//! This crate is part of graphmatch,
//! a toolkit for comparing [RDF] graphs.
//!
//! This crate decides whether two graphs are [isomorphic],
//! i.e. identical up to a renaming of their blank nodes,
//! and computes that renaming.
//!
//! The comparison proceeds in stages, from cheapest to most expensive:
//! statement counts, ground statements, blank node counts,
//! color refinement of blank nodes (see [`Mismatch::SignatureBuckets`]),
//! and finally a backtracking search among the remaining candidates.
//! The answer is always exact.
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
#![deny(missing_docs)]

mod error;
mod index;
pub mod int_set;
mod matcher;
mod search;
mod signature;

pub use error::{MatchError, MatchResult, Side};
pub use matcher::{find_bijection, isomorphic_graphs, BnodeMapping, GraphMatcher, Mismatch, Outcome};


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
