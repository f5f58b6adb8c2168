//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented.
//!
//! I provide the main trait [`Term`],
//! and a number of auxiliary types and functions, such as [`TermKind`], [`nt`]...
use crate::ns::{rdf, xsd};
use std::fmt::Write;

mod _simple;
pub use _simple::*;

pub mod bnode_id;
pub use bnode_id::BnodeId;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// An RDF term.
///
/// # Implementation
///
/// The only method without a default implementation is [`kind`](Term::kind),
/// which indicates what kind of RDF term a given [`Term`] represents.
///
/// However, while all other methods have a default implementation (returning `None`),
/// those corresponding to the supported kinds MUST be overridden accordingly.
/// For example, a type whose `kind` may return [`TermKind::Literal`]
/// must implement [`lexical_form`](Term::lexical_form) and [`datatype`](Term::datatype).
pub trait Term: std::fmt::Debug {
    /// Return the kind of RDF term that this [`Term`] represents.
    fn kind(&self) -> TermKind;

    /// Return true if this [`Term`] is an IRI,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::Iri`].
    #[inline]
    fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Return true if this [`Term`] is a blank node,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::BlankNode`].
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal,
    /// i.e. if [`kind`](Term::kind) retuns [`TermKind::Literal`].
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Iri`],
    /// return this IRI.
    /// Otherwise return `None`.
    #[inline]
    fn iri(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::BlankNode`],
    /// return the locally unique label of this blank node.
    /// Otherwise return `None`.
    #[inline]
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the lexical form of this literal.
    /// Otherwise return `None`.
    #[inline]
    fn lexical_form(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the datatype IRI of this literal.
    /// Otherwise return `None`.
    ///
    /// NB: if this literal is a language-tagged string,
    /// then this method MUST return [`rdf::langString`].
    /// Implementations returning `None` for a literal
    /// are understood as having the datatype [`xsd::string`].
    #[inline]
    fn datatype(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// and if this literal is a language-tagged string,
    /// return its language tag.
    /// Otherwise return `None`.
    #[inline]
    fn language_tag(&self) -> Option<&str> {
        None
    }

    /// Check whether `self` and `other` represent the same RDF term.
    ///
    /// Blank nodes are compared by label;
    /// this is only meaningful for terms of the same graph.
    fn eq<T: Term + ?Sized>(&self, other: &T) -> bool {
        term_eq(self, other)
    }
}

impl<'a, T: Term + ?Sized> Term for &'a T {
    fn kind(&self) -> TermKind {
        (*self).kind()
    }
    fn iri(&self) -> Option<&str> {
        (*self).iri()
    }
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        (*self).bnode_id()
    }
    fn lexical_form(&self) -> Option<&str> {
        (*self).lexical_form()
    }
    fn datatype(&self) -> Option<&str> {
        (*self).datatype()
    }
    fn language_tag(&self) -> Option<&str> {
        (*self).language_tag()
    }
}

/// The datatype of literal `t`, with the defaults of RDF 1.1 applied
/// (`rdf:langString` for language-tagged strings, `xsd:string` otherwise).
///
/// Return `None` if `t` is not a literal.
pub fn effective_datatype<T: Term + ?Sized>(t: &T) -> Option<&str> {
    if !t.is_literal() {
        return None;
    }
    if t.language_tag().is_some() {
        return Some(rdf::langString);
    }
    Some(t.datatype().unwrap_or(xsd::string))
}

/// Compare two terms for RDF term equality.
///
/// Language tags are compared case-insensitively.
pub fn term_eq<T1, T2>(t1: &T1, t2: &T2) -> bool
where
    T1: Term + ?Sized,
    T2: Term + ?Sized,
{
    let k1 = t1.kind();
    if k1 != t2.kind() {
        return false;
    }
    match k1 {
        TermKind::Iri => t1.iri() == t2.iri(),
        TermKind::BlankNode => t1.bnode_id() == t2.bnode_id(),
        TermKind::Literal => {
            t1.lexical_form() == t2.lexical_form()
                && effective_datatype(t1) == effective_datatype(t2)
                && match (t1.language_tag(), t2.language_tag()) {
                    (None, None) => true,
                    (Some(tag1), Some(tag2)) => tag1.eq_ignore_ascii_case(tag2),
                    _ => false,
                }
        }
    }
}

/// Render `t` in [N-Triples](https://www.w3.org/TR/n-triples/) syntax.
pub fn nt<T: Term + ?Sized>(t: &T) -> String {
    let mut buffer = String::new();
    write_nt(t, &mut buffer);
    buffer
}

pub(crate) fn write_nt<T: Term + ?Sized>(t: &T, buffer: &mut String) {
    match t.kind() {
        TermKind::Iri => {
            buffer.push('<');
            buffer.push_str(t.iri().unwrap_or_default());
            buffer.push('>');
        }
        TermKind::BlankNode => {
            if let Some(bnid) = t.bnode_id() {
                // writing into a String can not fail
                let _ = write!(buffer, "{bnid}");
            }
        }
        TermKind::Literal => {
            buffer.push('"');
            for c in t.lexical_form().unwrap_or_default().chars() {
                match c {
                    '"' => buffer.push_str("\\\""),
                    '\\' => buffer.push_str("\\\\"),
                    '\n' => buffer.push_str("\\n"),
                    '\r' => buffer.push_str("\\r"),
                    c => buffer.push(c),
                }
            }
            buffer.push('"');
            if let Some(tag) = t.language_tag() {
                buffer.push('@');
                buffer.push_str(tag);
            } else if let Some(dt) = t.datatype().filter(|dt| *dt != xsd::string) {
                buffer.push_str("^^<");
                buffer.push_str(dt);
                buffer.push('>');
            }
        }
    }
}
