//! Backtracking search for a blank node bijection.
use crate::index::{IndexedGraph, Node, Statement};
use crate::int_set::IntSet;
use crate::signature::CandidateBuckets;
use std::collections::HashSet;

const UNMAPPED: usize = usize::MAX;

/// Raised when the cancellation callback fires during the search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchCancelled;

/// A decision point of the search.
#[derive(Debug)]
struct Frame {
    source: usize,
    candidates: Vec<usize>,
    next: usize,
}

/// Searches a bijection between the blank nodes of `a` and those of `b`
/// that maps the statements of `a` exactly onto the statements of `b`.
pub struct BijectionSearch<'a> {
    a: &'a IndexedGraph,
    buckets: &'a CandidateBuckets,
    b_statements: HashSet<Statement>,
    order: Vec<usize>,
    mapping: Vec<usize>,
    used: IntSet,
    steps: usize,
}

impl<'a> BijectionSearch<'a> {
    /// # Precondition
    /// `a` and `b` must have the same number of blank nodes,
    /// and `buckets` must have been computed from `a` and `b`.
    pub fn new(a: &'a IndexedGraph, b: &'a IndexedGraph, buckets: &'a CandidateBuckets) -> Self {
        let n = a.bnode_count();
        let mut search = BijectionSearch {
            a,
            buckets,
            b_statements: b.statements().iter().copied().collect(),
            order: Vec::with_capacity(n),
            mapping: vec![UNMAPPED; n],
            used: IntSet::with_capacity(n),
            steps: 0,
        };
        search.order = search.source_order();
        search
    }

    /// The number of candidate assignments tried so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Run the search to completion.
    ///
    /// `cancelled` is polled before every step.
    /// Return the bijection (indexed by blank nodes of `a`) if any.
    pub fn run(&mut self, cancelled: &dyn Fn() -> bool) -> Result<Option<Vec<usize>>, SearchCancelled> {
        if self.order.is_empty() {
            return Ok(self.verify().then(Vec::new));
        }
        let mut stack = vec![self.frame(0)];
        while let Some(frame) = stack.last_mut() {
            if cancelled() {
                log::debug!("bijection search cancelled after {} steps", self.steps);
                return Err(SearchCancelled);
            }
            let source = frame.source;
            let previous = self.mapping[source];
            if previous != UNMAPPED {
                self.used.remove(previous);
                self.mapping[source] = UNMAPPED;
            }
            if frame.next == frame.candidates.len() {
                stack.pop();
                continue;
            }
            let target = frame.candidates[frame.next];
            frame.next += 1;
            if self.used.contains(target) {
                continue;
            }
            self.steps += 1;
            self.mapping[source] = target;
            self.used.insert(target);
            if !self.consistent(source) {
                continue;
            }
            let depth = stack.len();
            if depth < self.order.len() {
                stack.push(self.frame(depth));
            } else if self.verify() {
                log::debug!("bijection found after {} steps", self.steps);
                return Ok(Some(self.mapping.clone()));
            }
        }
        log::debug!("no bijection, after {} steps", self.steps);
        Ok(None)
    }

    fn frame(&self, depth: usize) -> Frame {
        let source = self.order[depth];
        Frame {
            source,
            candidates: self.buckets.candidates(source).iter().collect(),
            next: 0,
        }
    }

    /// Order in which source nodes are assigned:
    /// smallest bucket first, then most neighbors already ordered, then highest degree.
    fn source_order(&self) -> Vec<usize> {
        let n = self.a.bnode_count();
        let mut ordered = IntSet::with_capacity(n);
        let mut order = Vec::with_capacity(n);
        while order.len() < n {
            let best = (0..n)
                .filter(|i| !ordered.contains(*i))
                .min_by_key(|i| {
                    let linked = self.a.neighbors(*i).filter(|j| ordered.contains(*j)).count();
                    (
                        self.buckets.bucket_size(*i),
                        std::cmp::Reverse(linked),
                        std::cmp::Reverse(self.a.degree(*i)),
                    )
                });
            match best {
                Some(i) => {
                    ordered.insert(i);
                    order.push(i);
                }
                None => break,
            }
        }
        order
    }

    /// Translate `st` through the current mapping, if all its blank nodes are mapped.
    fn translate(&self, st: &Statement) -> Option<Statement> {
        let mut ret = *st;
        for node in ret.iter_mut() {
            if let Node::Blank(i) = *node {
                let j = self.mapping[i];
                if j == UNMAPPED {
                    return None;
                }
                *node = Node::Blank(j);
            }
        }
        Some(ret)
    }

    /// Check that every fully mapped statement around `source` exists in `b`.
    fn consistent(&self, source: usize) -> bool {
        self.a.incident(source).iter().all(|k| {
            self.translate(self.a.statement(*k))
                .map_or(true, |st| self.b_statements.contains(&st))
        })
    }

    /// Check that the mapping is total and translates `a` exactly into `b`.
    fn verify(&self) -> bool {
        self.a.len() == self.b_statements.len()
            && self.a.statements().iter().all(|st| {
                self.translate(st)
                    .is_some_and(|st| self.b_statements.contains(&st))
            })
    }
}
