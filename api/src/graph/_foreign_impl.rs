use super::*;
use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;

//
// foreign implementations
//

// reference to Graph

impl<'a, G: Graph + ?Sized> Graph for &'a G {
    type Triple<'x> = G::Triple<'x> where Self: 'x;
    type Error = G::Error;

    fn triples(&self) -> GTripleSource<'_, Self> {
        G::triples(*self)
    }
}

// slices and Vec of triples

impl<T: Triple> Graph for [T] {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Ok))
    }
}

impl<T: Triple> Graph for Vec<T> {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Ok))
    }
}

// HashSet and BTreeSet of triples

impl<T: Triple, S> Graph for HashSet<T, S> {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Ok))
    }
}

impl<T: Triple> Graph for BTreeSet<T> {
    type Triple<'x> = &'x T where Self: 'x;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Ok))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::{nt, SimpleTerm};

    fn ntriples<G: Graph + ?Sized>(g: &G) -> BTreeSet<String> {
        g.triples()
            .map(|t| {
                let t = t.unwrap();
                let [s, p, o] = t.spo();
                format!("{} {} {} .", nt(s), nt(p), nt(o))
            })
            .collect()
    }

    fn sample() -> Vec<[SimpleTerm; 3]> {
        let p = SimpleTerm::iri("tag:p");
        vec![
            [SimpleTerm::iri("tag:a"), p.clone(), SimpleTerm::literal("a")],
            [SimpleTerm::iri("tag:b"), p, SimpleTerm::literal("b")],
        ]
    }

    #[test]
    fn standard_collections_yield_the_same_triples() {
        let v = sample();
        let expected = ntriples(&v);
        assert_eq!(expected.len(), 2);
        assert_eq!(ntriples(&v[..]), expected);
        assert_eq!(ntriples(&&v), expected);
        let hs: HashSet<_> = v.iter().cloned().collect();
        assert_eq!(ntriples(&hs), expected);
        let bs: BTreeSet<_> = v.iter().cloned().collect();
        assert_eq!(ntriples(&bs), expected);
    }
}
