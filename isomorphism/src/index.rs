//! Translate graphs into statements over small integers.
//!
//! Ground terms are indexed through a [`GroundIndex`] shared by both graphs of a comparison,
//! so that equal IRIs and literals get the same index on both sides.
//! Blank nodes are indexed per graph, in order of first occurrence.
use crate::error::{MatchError, Side};
use graphmatch_api::graph::Graph;
use graphmatch_api::term::{effective_datatype, nt, BnodeId, Term, TermKind};
use graphmatch_api::triple::Triple;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::error::Error;

/// A term of an indexed statement.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Node {
    /// Index in the shared [`GroundIndex`]
    Ground(usize),
    /// Index local to the graph
    Blank(usize),
}

impl Node {
    pub fn blank(self) -> Option<usize> {
        match self {
            Node::Blank(i) => Some(i),
            Node::Ground(_) => None,
        }
    }
}

pub type Statement = [Node; 3];

/// The value identifying a ground term across graphs.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
enum GroundKey {
    Iri(Box<str>),
    Literal {
        lexical: Box<str>,
        datatype: Box<str>,
        language: Option<Box<str>>,
    },
}

impl GroundKey {
    fn of<T: Term + ?Sized>(t: &T) -> Option<Self> {
        match t.kind() {
            TermKind::Iri => Some(GroundKey::Iri(t.iri()?.into())),
            TermKind::Literal => Some(GroundKey::Literal {
                lexical: t.lexical_form()?.into(),
                datatype: effective_datatype(t)?.into(),
                language: t.language_tag().map(|tag| tag.to_ascii_lowercase().into()),
            }),
            TermKind::BlankNode => None,
        }
    }
}

/// Assigns indices to ground terms.
#[derive(Clone, Debug, Default)]
pub struct GroundIndex {
    keys: HashMap<GroundKey, usize>,
}

impl GroundIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    fn ensure_index(&mut self, key: GroundKey) -> usize {
        let next = self.keys.len();
        match self.keys.entry(key) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(e) => *e.insert(next),
        }
    }
}

/// Error raised while indexing one graph.
#[derive(Debug)]
pub enum IndexError<E> {
    Graph(E),
    Malformed(String),
}

impl<E: Error + Send + Sync + 'static> IndexError<E> {
    pub fn in_first<E2>(self) -> MatchError<E, E2>
    where
        E2: Error + Send + Sync + 'static,
    {
        match self {
            IndexError::Graph(e) => MatchError::FirstGraph(e),
            IndexError::Malformed(statement) => MatchError::MalformedStatement {
                side: Side::First,
                statement,
            },
        }
    }

    pub fn in_second<E1>(self) -> MatchError<E1, E>
    where
        E1: Error + Send + Sync + 'static,
    {
        match self {
            IndexError::Graph(e) => MatchError::SecondGraph(e),
            IndexError::Malformed(statement) => MatchError::MalformedStatement {
                side: Side::Second,
                statement,
            },
        }
    }
}

/// A graph whose terms have been replaced by [`Node`]s.
#[derive(Clone, Debug)]
pub struct IndexedGraph {
    /// Sorted and without duplicates; ground-only statements come first.
    statements: Vec<Statement>,
    /// Blank node labels, by local index.
    bnodes: Vec<BnodeId<Box<str>>>,
    /// For each blank node, the indices of the statements it occurs in.
    incidence: Vec<Vec<usize>>,
}

impl IndexedGraph {
    /// Number of distinct statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn bnode_count(&self) -> usize {
        self.bnodes.len()
    }

    pub fn bnode_label(&self, i: usize) -> &BnodeId<Box<str>> {
        &self.bnodes[i]
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn statement(&self, k: usize) -> &Statement {
        &self.statements[k]
    }

    /// Statements containing no blank node.
    pub fn ground_statements(&self) -> &[Statement] {
        let end = self
            .statements
            .iter()
            .position(|st| st.iter().any(|n| n.blank().is_some()))
            .unwrap_or(self.statements.len());
        &self.statements[..end]
    }

    /// Indices of the statements where blank node `i` occurs.
    pub fn incident(&self, i: usize) -> &[usize] {
        &self.incidence[i]
    }

    /// Number of statements where blank node `i` occurs.
    pub fn degree(&self, i: usize) -> usize {
        self.incidence[i].len()
    }

    /// Distinct blank nodes sharing a statement with blank node `i`.
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let mut seen = Vec::new();
        self.incidence[i]
            .iter()
            .flat_map(move |k| self.statements[*k].iter().filter_map(|n| n.blank()))
            .filter(move |j| {
                if *j == i || seen.contains(j) {
                    false
                } else {
                    seen.push(*j);
                    true
                }
            })
    }
}

/// Index all statements of `graph`, using (and extending) `ground` for ground terms.
///
/// Fail on the first error raised by `graph`,
/// or on the first statement breaking RDF's structural rules
/// (subject must not be a literal, predicate must be an IRI).
pub fn index_graph<G>(
    graph: &G,
    ground: &mut GroundIndex,
) -> Result<IndexedGraph, IndexError<G::Error>>
where
    G: Graph + ?Sized,
{
    let mut indexer = Indexer {
        ground,
        bnode_index: HashMap::new(),
        bnodes: vec![],
    };
    let mut statements = vec![];
    for t in graph.triples() {
        let t = t.map_err(IndexError::Graph)?;
        let [s, p, o] = t.spo();
        if s.is_literal() || !p.is_iri() {
            return Err(malformed(s, p, o));
        }
        match (indexer.node(s), indexer.node(p), indexer.node(o)) {
            (Some(s), Some(p), Some(o)) => statements.push([s, p, o]),
            _ => return Err(malformed(s, p, o)),
        }
    }
    statements.sort_unstable_by_key(|st| (st.iter().any(|n| n.blank().is_some()), *st));
    statements.dedup();

    let bnodes = indexer.bnodes;
    let mut incidence = vec![vec![]; bnodes.len()];
    for (k, st) in statements.iter().enumerate() {
        for i in st.iter().filter_map(|n| n.blank()) {
            let inc: &mut Vec<usize> = &mut incidence[i];
            // a blank node may occur several times in the same statement
            if inc.last() != Some(&k) {
                inc.push(k);
            }
        }
    }
    Ok(IndexedGraph {
        statements,
        bnodes,
        incidence,
    })
}

fn malformed<T, E>(s: &T, p: &T, o: &T) -> IndexError<E>
where
    T: Term + ?Sized,
{
    IndexError::Malformed(format!("{} {} {} .", nt(s), nt(p), nt(o)))
}

struct Indexer<'a> {
    ground: &'a mut GroundIndex,
    bnode_index: HashMap<BnodeId<Box<str>>, usize>,
    bnodes: Vec<BnodeId<Box<str>>>,
}

impl<'a> Indexer<'a> {
    /// Return `None` if `t` is not a consistent term
    /// (e.g. a blank node without a label).
    fn node<T: Term + ?Sized>(&mut self, t: &T) -> Option<Node> {
        if t.is_blank_node() {
            let label = t.bnode_id()?.to_boxed();
            let next = self.bnodes.len();
            let i = match self.bnode_index.entry(label) {
                Entry::Occupied(e) => *e.get(),
                Entry::Vacant(e) => {
                    self.bnodes.push(e.key().clone());
                    *e.insert(next)
                }
            };
            Some(Node::Blank(i))
        } else {
            GroundKey::of(t).map(|key| Node::Ground(self.ground.ensure_index(key)))
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use graphmatch_api::ns::xsd;
    use graphmatch_api::term::SimpleTerm;
    use std::convert::Infallible;

    fn iri(txt: &str) -> SimpleTerm {
        SimpleTerm::iri(txt)
    }

    fn bn(txt: &str) -> SimpleTerm {
        SimpleTerm::bnode(txt).unwrap()
    }

    fn index(g: &[[SimpleTerm; 3]], ground: &mut GroundIndex) -> IndexedGraph {
        match index_graph(g, ground) {
            Ok(ig) => ig,
            Err(IndexError::Malformed(st)) => panic!("malformed {st}"),
            Err(IndexError::Graph(e)) => match e {},
        }
    }

    #[test]
    fn ground_terms_are_shared() {
        let mut ground = GroundIndex::new();
        let g1 = [[iri("tag:a"), iri("tag:p"), SimpleTerm::literal("x")]];
        let g2 = [[
            iri("tag:a"),
            iri("tag:p"),
            SimpleTerm::literal_dt("x", xsd::string),
        ]];
        let i1 = index(&g1, &mut ground);
        let i2 = index(&g2, &mut ground);
        assert_eq!(ground.len(), 3);
        assert_eq!(i1.statements(), i2.statements());
    }

    #[test]
    fn language_tags_are_normalized() {
        let mut ground = GroundIndex::new();
        let g1 = [[iri("tag:a"), iri("tag:p"), SimpleTerm::literal_lang("x", "en-GB")]];
        let g2 = [[iri("tag:a"), iri("tag:p"), SimpleTerm::literal_lang("x", "EN-gb")]];
        let i1 = index(&g1, &mut ground);
        let i2 = index(&g2, &mut ground);
        assert_eq!(i1.statements(), i2.statements());
    }

    #[test]
    fn blank_nodes_are_local_and_ordered() {
        let mut ground = GroundIndex::new();
        let p = iri("tag:p");
        let g = [
            [bn("y"), p.clone(), bn("x")],
            [bn("x"), p.clone(), iri("tag:o")],
            [bn("y"), p.clone(), bn("x")],
        ];
        let ig = index(&g, &mut ground);
        assert_eq!(ig.len(), 2);
        assert_eq!(ig.bnode_count(), 2);
        assert_eq!(ig.bnode_label(0).as_str(), "y");
        assert_eq!(ig.bnode_label(1).as_str(), "x");
        assert!(ig.ground_statements().is_empty());
        assert_eq!(ig.degree(0), 1);
        assert_eq!(ig.degree(1), 2);
        assert_eq!(ig.neighbors(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn ground_statements_come_first() {
        let mut ground = GroundIndex::new();
        let p = iri("tag:p");
        let g = [
            [bn("b"), p.clone(), iri("tag:o")],
            [iri("tag:s"), p.clone(), iri("tag:o")],
            [bn("b"), p.clone(), bn("b")],
        ];
        let ig = index(&g, &mut ground);
        assert_eq!(ig.ground_statements().len(), 1);
        assert_eq!(ig.incident(0), &[1, 2]);
        // a self-loop counts once
        assert_eq!(ig.degree(0), 2);
        assert_eq!(ig.neighbors(0).count(), 0);
    }

    #[test]
    fn malformed_statements() {
        let mut ground = GroundIndex::new();
        let bad_predicate = [[iri("tag:s"), bn("p"), iri("tag:o")]];
        match index_graph(&bad_predicate[..], &mut ground) {
            Err(IndexError::Malformed(st)) => assert_eq!(st, "<tag:s> _:p <tag:o> ."),
            other => panic!("unexpected {other:?}"),
        }
        let literal_predicate = [[iri("tag:s"), SimpleTerm::literal("p"), iri("tag:o")]];
        assert!(matches!(
            index_graph(&literal_predicate[..], &mut ground),
            Err(IndexError::Malformed(_))
        ));
        let literal_subject = [[SimpleTerm::literal("s"), iri("tag:p"), iri("tag:o")]];
        assert!(matches!(
            index_graph(&literal_subject[..], &mut ground),
            Err(IndexError::Malformed(_))
        ));
    }

    #[test]
    fn index_error_sides() {
        let e: IndexError<Infallible> = IndexError::Malformed("x".into());
        let m: MatchError<Infallible, Infallible> = e.in_second();
        assert!(matches!(
            m,
            MatchError::MalformedStatement {
                side: Side::Second,
                ..
            }
        ));
    }
}
