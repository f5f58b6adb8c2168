//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! You can think of a triple as a sentence of the form
//! "subject verb complement"
//! (although the *predicate* is often better expressed as a relationship than a verb).
//! Examples :
//!
//! * John is a person.
//! * John was born in Paris.
//! * John knows Jane.
//! * John's family name is "Doe".
//!
use crate::term::Term;

/// This trait represents an abstract RDF triple,
/// and provide convenient methods for working with triples.
pub trait Triple {
    /// The type of the terms of this triple.
    type Term: Term + ?Sized;
    /// The subject of this triple.
    fn s(&self) -> &Self::Term;
    /// The predicate of this triple.
    fn p(&self) -> &Self::Term;
    /// The object of this triple.
    fn o(&self) -> &Self::Term;

    /// The three components of this triple.
    fn spo(&self) -> [&Self::Term; 3] {
        [self.s(), self.p(), self.o()]
    }
}

impl<T: Term> Triple for [T; 3] {
    type Term = T;

    fn s(&self) -> &T {
        &self[0]
    }
    fn p(&self) -> &T {
        &self[1]
    }
    fn o(&self) -> &T {
        &self[2]
    }
}

impl<'a, T: Triple + ?Sized> Triple for &'a T {
    type Term = T::Term;

    fn s(&self) -> &Self::Term {
        (*self).s()
    }
    fn p(&self) -> &Self::Term {
        (*self).p()
    }
    fn o(&self) -> &Self::Term {
        (*self).o()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{term_eq, SimpleTerm};

    #[test]
    fn array_as_triple() {
        let t = [
            SimpleTerm::iri("tag:s"),
            SimpleTerm::iri("tag:p"),
            SimpleTerm::literal("o"),
        ];
        assert!(term_eq(t.s(), &SimpleTerm::iri("tag:s")));
        assert!(term_eq(t.p(), &SimpleTerm::iri("tag:p")));
        assert!(term_eq(t.o(), &SimpleTerm::literal("o")));

        let r = &t;
        let [s, p, o] = r.spo();
        assert!(term_eq(s, &t[0]));
        assert!(term_eq(p, &t[1]));
        assert!(term_eq(o, &t[2]));
    }
}
