// this module is transparently re-exported by its parent `term`
use super::*;
use std::fmt;

/// A straightforward owned implementation of [`Term`].
///
/// Literals always carry their datatype
/// (`xsd:string` for simple literals, `rdf:langString` for language-tagged strings).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum SimpleTerm {
    /// An IRI
    Iri(Box<str>),
    /// A blank node
    BlankNode(BnodeId<Box<str>>),
    /// A literal
    Literal {
        /// The lexical form
        lexical: Box<str>,
        /// The datatype IRI
        datatype: Box<str>,
        /// The language tag, if any
        language: Option<Box<str>>,
    },
}

impl SimpleTerm {
    /// Build an IRI term.
    pub fn iri<T: Into<Box<str>>>(iri: T) -> Self {
        SimpleTerm::Iri(iri.into())
    }

    /// Build a blank node, checking its label.
    pub fn bnode<T: Into<Box<str>>>(id: T) -> Result<Self, bnode_id::InvalidBnodeId> {
        BnodeId::new(id.into()).map(SimpleTerm::BlankNode)
    }

    /// Build a simple literal (datatype `xsd:string`).
    pub fn literal<T: Into<Box<str>>>(lexical: T) -> Self {
        Self::literal_dt(lexical, xsd::string)
    }

    /// Build a datatyped literal.
    pub fn literal_dt<T, U>(lexical: T, datatype: U) -> Self
    where
        T: Into<Box<str>>,
        U: Into<Box<str>>,
    {
        SimpleTerm::Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    /// Build a language-tagged string (datatype `rdf:langString`).
    pub fn literal_lang<T, U>(lexical: T, tag: U) -> Self
    where
        T: Into<Box<str>>,
        U: Into<Box<str>>,
    {
        SimpleTerm::Literal {
            lexical: lexical.into(),
            datatype: rdf::langString.into(),
            language: Some(tag.into()),
        }
    }

    /// Copy any [`Term`] into a [`SimpleTerm`].
    pub fn from_term<T: Term + ?Sized>(t: &T) -> Self {
        match t.kind() {
            TermKind::Iri => Self::iri(t.iri().unwrap_or_default()),
            TermKind::BlankNode => match t.bnode_id() {
                Some(bnid) => SimpleTerm::BlankNode(bnid.to_boxed()),
                None => SimpleTerm::BlankNode(BnodeId::new_unchecked("".into())),
            },
            TermKind::Literal => match t.language_tag() {
                Some(tag) => Self::literal_lang(t.lexical_form().unwrap_or_default(), tag),
                None => Self::literal_dt(
                    t.lexical_form().unwrap_or_default(),
                    effective_datatype(t).unwrap_or(xsd::string),
                ),
            },
        }
    }
}

impl Term for SimpleTerm {
    fn kind(&self) -> TermKind {
        match self {
            SimpleTerm::Iri(_) => TermKind::Iri,
            SimpleTerm::BlankNode(_) => TermKind::BlankNode,
            SimpleTerm::Literal { .. } => TermKind::Literal,
        }
    }

    fn iri(&self) -> Option<&str> {
        match self {
            SimpleTerm::Iri(iri) => Some(&iri[..]),
            _ => None,
        }
    }

    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        match self {
            SimpleTerm::BlankNode(bnid) => Some(bnid.as_ref()),
            _ => None,
        }
    }

    fn lexical_form(&self) -> Option<&str> {
        match self {
            SimpleTerm::Literal { lexical, .. } => Some(&lexical[..]),
            _ => None,
        }
    }

    fn datatype(&self) -> Option<&str> {
        match self {
            SimpleTerm::Literal { datatype, .. } => Some(&datatype[..]),
            _ => None,
        }
    }

    fn language_tag(&self) -> Option<&str> {
        match self {
            SimpleTerm::Literal { language, .. } => language.as_deref(),
            _ => None,
        }
    }
}

impl fmt::Display for SimpleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&nt(self))
    }
}
