//! I define the [`BnodeId`] wrapper type,
//! which guarantees that the underlying `str`
//! satisfies the `BLANK_NODE_LABEL` rule in [Turtle](https://www.w3.org/TR/turtle/#grammar-production-BLANK_NODE_LABEL)
//! (without the leading `_:`).
use super::*;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

lazy_static! {
    /// Turtle's BLANK_NODE_LABEL production, without the leading `_:`.
    ///
    /// `BLANK_NODE_LABEL ::= (PN_CHARS_U | [0-9]) ((PN_CHARS | '.')* PN_CHARS)?`
    ///
    /// This regular expression matches the whole input (`^...$`).
    static ref BNODE_ID: Regex = Regex::new(r"(?x)
      ^
      [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_0-9]
      (
          [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
          |
          \u{2e} [A-Za-z\u{c0}-\u{d6}\u{d8}-\u{f6}\u{f8}-\u{2ff}\u{370}-\u{37D}\u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{2070}-\u{218F}\u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\u{10000}-\u{EFFFF}_\u{2d}0-9\u{00B7}\u{0300}-\u{036F}\u{203F}-\u{2040}]
      )*
      $
    ").unwrap();
}

/// A blank node label.
///
/// The label identifies the blank node *within one graph*;
/// two graphs using the same label do not share the blank node.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BnodeId<T>(T);

impl<T: Borrow<str>> BnodeId<T> {
    /// Wrap `id`, checking that it is a valid blank node label.
    pub fn new(id: T) -> Result<Self, InvalidBnodeId> {
        if BNODE_ID.is_match(id.borrow()) {
            Ok(BnodeId(id))
        } else {
            Err(InvalidBnodeId(id.borrow().to_string()))
        }
    }

    /// Wrap `id` without checking it.
    ///
    /// # Precondition
    /// `id` must satisfy Turtle's `BLANK_NODE_LABEL` rule,
    /// otherwise the N-Triples rendering of this blank node will be invalid.
    pub const fn new_unchecked(id: T) -> Self {
        BnodeId(id)
    }

    /// The label, as a `str`.
    pub fn as_str(&self) -> &str {
        self.0.borrow()
    }

    /// Borrow this label.
    pub fn as_ref(&self) -> BnodeId<&str> {
        BnodeId(self.as_str())
    }

    /// Copy this label into an owned [`BnodeId`].
    pub fn to_boxed(&self) -> BnodeId<Box<str>> {
        BnodeId(Box::from(self.as_str()))
    }

    /// Unwrap the inner value.
    pub fn unwrap(self) -> T {
        self.0
    }
}

impl<T: Borrow<str>> Borrow<str> for BnodeId<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T: Borrow<str>> fmt::Display for BnodeId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.as_str())
    }
}

impl<T> Term for BnodeId<T>
where
    T: Borrow<str> + fmt::Debug,
{
    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }
    fn bnode_id(&self) -> Option<BnodeId<&str>> {
        Some(self.as_ref())
    }
}

/// This error is raised when trying to parse an invalid blank node identifier.
#[derive(Debug, Error)]
#[error("The given blank node identifier '{0}' does not comply with Turtle's BLANK_NODE_LABEL")]
pub struct InvalidBnodeId(pub String);

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("a" ; "single letter")]
    #[test_case("42" ; "digits")]
    #[test_case("_" ; "underscore")]
    #[test_case("a.b" ; "inner dot")]
    #[test_case("a-b" ; "inner dash")]
    #[test_case("été" ; "non ascii")]
    fn valid_bnode_id(txt: &str) {
        let bnid = BnodeId::new(txt).unwrap();
        assert_eq!(bnid.as_str(), txt);
        assert_eq!(bnid.to_string(), format!("_:{txt}"));
    }

    #[test_case("" ; "empty")]
    #[test_case("-a" ; "leading dash")]
    #[test_case("a." ; "trailing dot")]
    #[test_case("a b" ; "space")]
    #[test_case("_:a" ; "with prefix")]
    fn invalid_bnode_id(txt: &str) {
        assert!(BnodeId::new(txt).is_err());
    }

    #[test]
    fn bnode_id_is_a_term() {
        let bnid = BnodeId::new_unchecked("b1");
        assert!(bnid.is_blank_node());
        assert_eq!(bnid.bnode_id(), Some(bnid));
        assert_eq!(bnid.iri(), None);
        assert!(term_eq(&bnid, &bnid.to_boxed()));
    }

    #[test]
    fn boxed_bnode_id_borrows_as_str() {
        let map: std::collections::BTreeMap<_, _> =
            [(BnodeId::new_unchecked(Box::<str>::from("x")), 1)].into_iter().collect();
        assert_eq!(map.get("x"), Some(&1));
    }
}
