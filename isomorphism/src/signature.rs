//! Color refinement of blank nodes.
//!
//! Every blank node starts with the same color.
//! At each round, the new color of a blank node is determined by its previous color
//! and the multiset of its incident statements,
//! where other blank nodes are replaced by their previous color.
//! Colors are interned in a palette shared by both graphs,
//! so that equal colors denote equal signatures across graphs.
use crate::index::{IndexedGraph, Node};
use crate::int_set::IntSet;
use std::collections::HashMap;

/// A component of a statement, as seen from one of its blank nodes.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
enum Endpoint {
    Ground(usize),
    Blank(u32),
    /// The blank node whose signature is being computed
    Itself,
}

type Pattern = [Endpoint; 3];

/// The blank nodes of both graphs, grouped by color.
#[derive(Clone, Debug)]
pub struct CandidateBuckets {
    buckets: Vec<Bucket>,
    colors: Vec<u32>,
}

/// The nodes of each graph sharing one color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    pub sources: IntSet,
    pub targets: IntSet,
}

impl CandidateBuckets {
    /// Blank nodes of the second graph that blank node `a` of the first graph may map to.
    pub fn candidates(&self, a: usize) -> &IntSet {
        &self.buckets[self.colors[a] as usize].targets
    }

    pub fn bucket_size(&self, a: usize) -> usize {
        self.candidates(a).len()
    }

    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }
}

/// Refine the colors of the blank nodes of `a` and `b` until they are stable.
///
/// Return `None` as soon as some color is not shared by the same number of blank nodes
/// in both graphs, in which case they can not be isomorphic.
///
/// # Precondition
/// `a` and `b` must have the same number of blank nodes,
/// and their ground terms must have been indexed with the same `GroundIndex`.
pub fn candidate_buckets(a: &IndexedGraph, b: &IndexedGraph) -> Option<CandidateBuckets> {
    let n = a.bnode_count();
    debug_assert_eq!(n, b.bnode_count());
    let mut colors_a = vec![0_u32; n];
    let mut colors_b = vec![0_u32; n];
    let mut distinct = usize::from(n > 0);
    for round in 1..=n {
        let mut palette = HashMap::new();
        let next_a = recolor(a, &colors_a, &mut palette);
        let next_b = recolor(b, &colors_b, &mut palette);
        if histogram(&next_a, palette.len()) != histogram(&next_b, palette.len()) {
            log::debug!("signature mismatch at round {}", round);
            return None;
        }
        log::trace!("round {}: {} colors", round, palette.len());
        colors_a = next_a;
        colors_b = next_b;
        if palette.len() == distinct {
            break;
        }
        distinct = palette.len();
    }

    let mut buckets = vec![
        Bucket {
            sources: IntSet::new(),
            targets: IntSet::new(),
        };
        distinct
    ];
    for (i, c) in colors_a.iter().enumerate() {
        buckets[*c as usize].sources.insert(i);
    }
    for (i, c) in colors_b.iter().enumerate() {
        buckets[*c as usize].targets.insert(i);
    }
    log::debug!("{} blank nodes in {} buckets", n, buckets.len());
    Some(CandidateBuckets {
        buckets,
        colors: colors_a,
    })
}

fn recolor(
    g: &IndexedGraph,
    colors: &[u32],
    palette: &mut HashMap<(u32, Vec<Pattern>), u32>,
) -> Vec<u32> {
    (0..g.bnode_count())
        .map(|i| {
            let mut patterns: Vec<Pattern> = g
                .incident(i)
                .iter()
                .map(|k| {
                    g.statement(*k).map(|node| match node {
                        Node::Ground(t) => Endpoint::Ground(t),
                        Node::Blank(j) if j == i => Endpoint::Itself,
                        Node::Blank(j) => Endpoint::Blank(colors[j]),
                    })
                })
                .collect();
            patterns.sort_unstable();
            let next = palette.len() as u32;
            *palette.entry((colors[i], patterns)).or_insert(next)
        })
        .collect()
}

fn histogram(colors: &[u32], size: usize) -> Vec<usize> {
    let mut counts = vec![0; size];
    for c in colors {
        counts[*c as usize] += 1;
    }
    counts
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::index::{index_graph, GroundIndex};
    use graphmatch_api::term::SimpleTerm;

    fn bn(txt: &str) -> SimpleTerm {
        SimpleTerm::bnode(txt).unwrap()
    }

    fn index_both(g1: &[[SimpleTerm; 3]], g2: &[[SimpleTerm; 3]]) -> (IndexedGraph, IndexedGraph) {
        let mut ground = GroundIndex::new();
        let i1 = index_graph(g1, &mut ground).unwrap();
        let i2 = index_graph(g2, &mut ground).unwrap();
        (i1, i2)
    }

    #[test]
    fn no_blank_nodes() {
        let g = [[
            SimpleTerm::iri("tag:s"),
            SimpleTerm::iri("tag:p"),
            SimpleTerm::iri("tag:o"),
        ]];
        let (a, b) = index_both(&g, &g);
        let buckets = candidate_buckets(&a, &b).unwrap();
        assert!(buckets.buckets().is_empty());
    }

    #[test]
    fn symmetric_siblings_share_a_bucket() {
        let p = SimpleTerm::iri("tag:p");
        let r = SimpleTerm::iri("tag:root");
        let g1 = [[r.clone(), p.clone(), bn("a")], [r.clone(), p.clone(), bn("b")]];
        let g2 = [[r.clone(), p.clone(), bn("y")], [r, p, bn("x")]];
        let (a, b) = index_both(&g1, &g2);
        let buckets = candidate_buckets(&a, &b).unwrap();
        assert_eq!(buckets.buckets().len(), 1);
        assert_eq!(buckets.bucket_size(0), 2);
        assert_eq!(buckets.candidates(0), buckets.candidates(1));
    }

    #[test]
    fn distinguishable_nodes_get_distinct_buckets() {
        let p = SimpleTerm::iri("tag:p");
        let q = SimpleTerm::iri("tag:q");
        let o = SimpleTerm::literal("o");
        let g1 = [
            [bn("a"), p.clone(), bn("b")],
            [bn("b"), q.clone(), o.clone()],
        ];
        let g2 = [[bn("d"), q, o], [bn("c"), p, bn("d")]];
        let (a, b) = index_both(&g1, &g2);
        let buckets = candidate_buckets(&a, &b).unwrap();
        assert_eq!(buckets.buckets().len(), 2);
        // a -> c, b -> d
        assert_eq!(buckets.candidates(0).iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(buckets.candidates(1).iter().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn mismatch_is_detected() {
        let p = SimpleTerm::iri("tag:p");
        let g1 = [[bn("a"), p.clone(), bn("b")], [bn("c"), p.clone(), bn("c")]];
        let g2 = [[bn("x"), p.clone(), bn("y")], [bn("y"), p, bn("z")]];
        let (a, b) = index_both(&g1, &g2);
        assert!(candidate_buckets(&a, &b).is_none());
    }

    #[test]
    fn mismatch_found_in_later_round() {
        // two typed nodes on each side, with the same local view;
        // they are linked in the first graph only
        let p = SimpleTerm::iri("tag:p");
        let t = SimpleTerm::iri("tag:t");
        let c = SimpleTerm::iri("tag:C");
        let g1 = [
            [bn("a"), p.clone(), bn("b")],
            [bn("c"), p.clone(), bn("d")],
            [bn("a"), t.clone(), c.clone()],
            [bn("b"), t.clone(), c.clone()],
        ];
        let g2 = [
            [bn("a"), p.clone(), bn("b")],
            [bn("c"), p, bn("d")],
            [bn("a"), t.clone(), c.clone()],
            [bn("d"), t, c],
        ];
        let (a, b) = index_both(&g1, &g2);
        assert!(candidate_buckets(&a, &b).is_none());
    }
}
