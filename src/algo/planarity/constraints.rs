/*!
Testing pass of the Left-Right planarity test.

The second DFS walks the palm tree in nesting-depth order and maintains a stack of
[`ConflictPair`]s. Each pair holds two intervals of return edges that have to be embedded on
different sides of the current DFS path. Whenever the return edges of a subtree can be placed on
neither side, the graph is not planar.

Intervals are never concatenated physically: merging two intervals only records a back-pointer
(`refs`) from the lower end of one interval to the upper end of the next one.
*/

use log::trace;

use super::{orientation::*, *};

/// Raised as soon as some subtree cannot be embedded consistently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Conflict;

/// A contiguous run of return edges that share a side, given by its lowest and highest edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Interval {
    low: Option<EdgeId>,
    high: Option<EdgeId>,
}

impl Interval {
    fn single(e: EdgeId) -> Self {
        Self {
            low: Some(e),
            high: Some(e),
        }
    }

    fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// Two intervals of return edges that must end up on opposite sides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ConflictPair {
    left: Interval,
    right: Interval,
}

impl ConflictPair {
    fn back_edge(e: EdgeId) -> Self {
        Self {
            left: Interval::default(),
            right: Interval::single(e),
        }
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }

    fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}

struct TestingFrame {
    node: Node,
    /// Position of the next edge in the (sorted) outgoing edges of `node`
    cursor: usize,
}

/// State of the testing pass over a fully oriented and sorted [`PalmTree`].
pub(super) struct ConstraintTest<'p> {
    tree: &'p PalmTree,

    stack: Vec<ConflictPair>,

    /// Height of `stack` at the moment an edge was opened
    stack_bottom: Vec<usize>,
    lowpt_edge: Vec<Option<EdgeId>>,
    refs: Vec<Option<EdgeId>>,

    /// Edges whose opening step already happened; revisiting them means resuming after the
    /// subtree below them has been processed
    opened: EdgeBitSet,
}

impl<'p> ConstraintTest<'p> {
    pub(super) fn new(tree: &'p PalmTree) -> Self {
        let m = tree.number_of_edges();
        Self {
            tree,
            stack: Vec::new(),
            stack_bottom: vec![0; m as usize],
            lowpt_edge: vec![None; m as usize],
            refs: vec![None; m as usize],
            opened: EdgeBitSet::new(m),
        }
    }

    /// Tests the DFS tree rooted at `root`.
    pub(super) fn test_from(&mut self, root: Node) -> Result<(), Conflict> {
        let tree = self.tree;
        self.stack.clear();

        let mut call_stack = vec![TestingFrame {
            node: root,
            cursor: 0,
        }];

        'recurse: while let Some(frame) = call_stack.last_mut() {
            let u = frame.node;
            let parent = tree.parent_edge[u as usize];
            let out_edges = &tree.out_edges[u as usize];

            while let Some(&e) = out_edges.get(frame.cursor) {
                if !self.opened.set_bit(e) {
                    self.stack_bottom[e as usize] = self.stack.len();

                    if tree.is_tree_edge(e) {
                        let v = tree.edges[e as usize].target();
                        call_stack.push(TestingFrame { node: v, cursor: 0 });
                        continue 'recurse;
                    }

                    self.lowpt_edge[e as usize] = Some(e);
                    self.stack.push(ConflictPair::back_edge(e));
                }

                // `e` has a return edge above `u` (never the case at the root)
                if let Some(p) = parent.filter(|_| tree.lowpt[e as usize] < tree.heights[u as usize]) {
                    if frame.cursor == 0 {
                        self.lowpt_edge[p as usize] = self.lowpt_edge[e as usize];
                    } else {
                        self.apply_constraints(e, p).inspect_err(|_| {
                            trace!("conflicting return edges below {}", tree.edges[e as usize]);
                        })?;
                    }
                }

                frame.cursor += 1;
            }

            if let Some(p) = parent {
                self.remove_back_edges(p);
            }

            call_stack.pop();
        }

        Ok(())
    }

    /// Returns *true* if the interval contains a return edge that lies strictly above the
    /// lowpoint of `e`
    fn conflicting(&self, interval: &Interval, e: EdgeId) -> bool {
        interval
            .high
            .is_some_and(|h| self.tree.lowpt[h as usize] > self.tree.lowpt[e as usize])
    }

    /// Lowest return point of any edge in the pair
    fn lowest(&self, pair: &ConflictPair) -> Height {
        let lowpt = |e: Option<EdgeId>| e.map_or(NO_HEIGHT, |e| self.tree.lowpt[e as usize]);
        lowpt(pair.left.low).min(lowpt(pair.right.low))
    }

    fn set_ref(&mut self, at: Option<EdgeId>, to: Option<EdgeId>) {
        if let Some(at) = at {
            self.refs[at as usize] = to;
        }
    }

    /// Integrates the return edges of `e` into the constraints of its parent edge `parent`.
    /// All conflict pairs above `stack_bottom[e]` stem from the subtree of `e`; they are merged
    /// into the right interval of a fresh pair, and all earlier pairs conflicting with `e` are
    /// merged into its left interval.
    fn apply_constraints(&mut self, e: EdgeId, parent: EdgeId) -> Result<(), Conflict> {
        let tree = self.tree;
        let lowpt = &tree.lowpt;
        let bottom = self.stack_bottom[e as usize];
        let mut merged = ConflictPair::default();

        // merge return edges of `e` into `merged.right`
        while self.stack.len() > bottom {
            let Some(mut pair) = self.stack.pop() else {
                break;
            };

            if !pair.left.is_empty() {
                pair.swap();
            }
            if !pair.left.is_empty() {
                return Err(Conflict);
            }

            let above_parent = pair
                .right
                .low
                .is_some_and(|low| lowpt[low as usize] > lowpt[parent as usize]);

            if above_parent {
                if merged.right.is_empty() {
                    merged.right = pair.right;
                } else {
                    self.set_ref(merged.right.low, pair.right.high);
                }
                merged.right.low = pair.right.low;
            } else {
                self.set_ref(pair.right.low, self.lowpt_edge[parent as usize]);
            }
        }

        // merge conflicting return edges of earlier siblings into `merged.left`
        while self
            .stack
            .last()
            .is_some_and(|top| self.conflicting(&top.left, e) || self.conflicting(&top.right, e))
        {
            let Some(mut pair) = self.stack.pop() else {
                break;
            };

            if self.conflicting(&pair.right, e) {
                pair.swap();
            }
            if self.conflicting(&pair.right, e) {
                return Err(Conflict);
            }

            // the part of the pair below lowpoint(e) joins the right side
            self.set_ref(merged.right.low, pair.right.high);
            if pair.right.low.is_some() {
                merged.right.low = pair.right.low;
            }

            if merged.left.is_empty() {
                merged.left = pair.left;
            } else {
                self.set_ref(merged.left.low, pair.left.high);
            }
            merged.left.low = pair.left.low;
        }

        if !merged.is_empty() {
            self.stack.push(merged);
        }

        Ok(())
    }

    /// Called once all outgoing edges of the target `v` of `parent = (u, v)` are processed.
    /// Drops all return edges ending at `u`, as they impose no constraints above `u`.
    fn remove_back_edges(&mut self, parent: EdgeId) {
        let tree = self.tree;
        let u = tree.edges[parent as usize].source();
        let height = tree.heights[u as usize];

        // drop entire conflict pairs
        while self
            .stack
            .last()
            .is_some_and(|top| self.lowest(top) == height)
        {
            self.stack.pop();
        }

        // one more conflict pair to consider
        if let Some(mut pair) = self.stack.pop() {
            // trim left interval
            while let Some(high) = pair
                .left
                .high
                .filter(|&h| tree.edges[h as usize].target() == u)
            {
                pair.left.high = self.refs[high as usize];
            }
            if pair.left.high.is_none() {
                if let Some(low) = pair.left.low.take() {
                    self.refs[low as usize] = pair.right.low;
                }
            }

            // trim right interval
            while let Some(high) = pair
                .right
                .high
                .filter(|&h| tree.edges[h as usize].target() == u)
            {
                pair.right.high = self.refs[high as usize];
            }
            if pair.right.high.is_none() {
                if let Some(low) = pair.right.low.take() {
                    self.refs[low as usize] = pair.left.low;
                }
            }

            self.stack.push(pair);
        }

        // the side of `parent` is the side of its highest return edge
        if tree.lowpt[parent as usize] < height {
            if let Some(top) = self.stack.last() {
                let lowpt = &tree.lowpt;
                let highest = match (top.left.high, top.right.high) {
                    (Some(l), Some(r)) if lowpt[l as usize] > lowpt[r as usize] => Some(l),
                    (Some(l), None) => Some(l),
                    (_, r) => r,
                };
                self.refs[parent as usize] = highest;
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::*;

    fn sorted_palm_tree<G: AdjacencyList + GraphEdgeOrder>(graph: &G) -> PalmTree {
        let mut tree = PalmTree::default();
        tree.reset(graph.number_of_nodes(), graph.number_of_edges());
        tree.orient(graph);
        tree.sort_by_nesting_depth();
        tree
    }

    fn test_all_roots(tree: &PalmTree) -> Result<(), Conflict> {
        let mut test = ConstraintTest::new(tree);
        tree.roots()
            .iter()
            .try_for_each(|&root| test.test_from(root))
    }

    #[test]
    fn interval_basics() {
        assert!(Interval::default().is_empty());
        assert!(!Interval::single(3).is_empty());

        let mut pair = ConflictPair::back_edge(7);
        assert!(pair.left.is_empty());
        pair.swap();
        assert_eq!(pair.left, Interval::single(7));
        assert!(pair.right.is_empty());
        assert!(!pair.is_empty());
        assert!(ConflictPair::default().is_empty());
    }

    #[test]
    fn triangle_leaves_empty_stack() {
        let graph = AdjArrayUndir::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let tree = sorted_palm_tree(&graph);

        let mut test = ConstraintTest::new(&tree);
        assert_eq!(test.test_from(0), Ok(()));
        assert!(test.stack.is_empty());

        // the back edge (2,0) realises the lowpoint of both tree edges
        assert_eq!(test.lowpt_edge[0], Some(2));
        assert_eq!(test.lowpt_edge[1], Some(2));
    }

    #[test]
    fn k33_conflicts() {
        let mut graph = AdjArrayUndir::new(6);
        graph.connect_biclique(0..3, 3..6);

        let tree = sorted_palm_tree(&graph);
        assert_eq!(test_all_roots(&tree), Err(Conflict));
    }

    #[test]
    fn k5_conflicts() {
        let mut graph = AdjArrayUndir::new(5);
        graph.connect_clique(0..5);

        let tree = sorted_palm_tree(&graph);
        assert_eq!(test_all_roots(&tree), Err(Conflict));
    }

    #[test]
    fn k4_and_wheel_are_consistent() {
        let mut graph = AdjArrayUndir::new(4);
        graph.connect_clique(0..4);
        assert_eq!(test_all_roots(&sorted_palm_tree(&graph)), Ok(()));

        let mut wheel = AdjArrayUndir::new(9);
        wheel.connect_cycle(1..9);
        wheel.connect_biclique([0], 1..9);
        assert_eq!(test_all_roots(&sorted_palm_tree(&wheel)), Ok(()));
    }

    #[test]
    fn conflict_in_second_component() {
        let mut graph = AdjArrayUndir::new(9);
        graph.connect_cycle(0..3);
        graph.connect_biclique(3..6, 6..9);

        let tree = sorted_palm_tree(&graph);
        assert_eq!(tree.roots(), &[0, 3]);

        let mut test = ConstraintTest::new(&tree);
        assert_eq!(test.test_from(0), Ok(()));
        assert_eq!(test.test_from(3), Err(Conflict));
    }
}
