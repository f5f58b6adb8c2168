//! IRIs of the standard vocabulary terms needed to interpret literals.
//!
//! These are plain `&str` constants,
//! so that they can be compared directly with [`Term::iri`](crate::term::Term::iri)
//! or [`Term::datatype`](crate::term::Term::datatype).

/// The standard `rdf:` namespace.
///
/// NB: since `type` is a reserved keyword in Rust,
/// the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
#[allow(non_upper_case_globals)]
pub mod rdf {
    /// The namespace IRI.
    pub const PREFIX: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// `rdf:langString`, the datatype of every language-tagged string.
    pub const langString: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdf:type`
    pub const type_: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// The standard `xsd:` namespace.
#[allow(non_upper_case_globals)]
pub mod xsd {
    /// The namespace IRI.
    pub const PREFIX: &str = "http://www.w3.org/2001/XMLSchema#";
    /// `xsd:string`, the datatype of simple literals.
    pub const string: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`
    pub const integer: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`
    pub const boolean: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn constants_are_in_their_namespace() {
        for iri in [rdf::langString, rdf::type_] {
            assert!(iri.starts_with(rdf::PREFIX));
        }
        for iri in [xsd::string, xsd::integer, xsd::boolean] {
            assert!(iri.starts_with(xsd::PREFIX));
        }
    }
}
