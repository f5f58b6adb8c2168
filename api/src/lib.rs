//! This crate is part of graphmatch,
//! a toolkit for comparing [RDF] graphs up to blank node renaming.
//!
//! It defines the minimal abstractions consumed by the matcher:
//! [terms](term::Term), [triples](triple::Triple) and [graphs](graph::Graph).
//! Storage, parsing and serialization of RDF are left to other crates,
//! which only need to implement these traits.
//!
//! # Strict RDF model
//!
//! Only IRIs, literals and blank nodes are supported as terms.
//! The traits do not prevent a blank node or a literal from appearing in predicate position,
//! but consumers are expected to reject such triples
//! (the matcher reports them as malformed statements).
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

pub mod graph;
pub mod ns;
pub mod term;
pub mod triple;

/// Re-export of the error trait, for convenience.
pub use std::error::Error;
