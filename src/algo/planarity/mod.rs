/*!
# Planarity

Linear-time **Left-Right planarity test** for undirected graphs.

The test consists of two depth-first searches:
1. the *orientation* pass turns the graph into a palm tree and computes lowpoints and nesting
   depths of all edges (see [`PalmTree`]),
2. after the outgoing edges of every node are stably sorted by nesting depth, the *testing* pass
   tracks which return edges have to lie on different sides of the DFS path and stops as soon as
   no consistent assignment exists.

Both passes simulate recursion with explicit call stacks, so deep graphs (e.g. long paths) cannot
overflow the native stack.

# Example
```rust
use lrplanar::{prelude::*, algo::*, gens::*};

let mut k5 = AdjArrayUndir::new(5);
k5.connect_clique(0..5);
assert!(!k5.is_planar());

let mut k4 = AdjArrayUndir::new(4);
k4.connect_clique(0..4);
assert!(k4.is_planar());

// disable the edge-count shortcut to let the full test reject K5
let mut test = LeftRightPlanarity::new(&k5).with_euler_bound(false);
test.run();
assert_eq!(test.is_planar(), Ok(false));
assert_eq!(test.rejected_by_euler_bound(), Ok(false));
```
*/

use log::{debug, trace};

use super::*;

mod constraints;
mod error;
mod orientation;

use constraints::ConstraintTest;

pub use error::*;
pub use orientation::{EdgeId, EdgeKind, Height, NestingDepth, OrientedEdge, PalmTree};

/// Returns *true* if a simple graph with `n` nodes and `m` edges has too many edges to be planar,
/// i.e. if `n > 2` and `m > 3n - 6`.
///
/// ```rust
/// use lrplanar::algo::exceeds_euler_bound;
///
/// assert!(!exceeds_euler_bound(4, 6));
/// assert!(exceeds_euler_bound(5, 10));
/// assert!(!exceeds_euler_bound(2, 1000));
/// ```
pub fn exceeds_euler_bound(n: NumNodes, m: NumEdges) -> bool {
    let n = n as u64;
    n > 2 && m as u64 > 3 * n - 6
}

/// Planarity test as a method on the graph itself.
///
/// Only available for graphs with `GraphType<Dir = Undirected>`; a directed graph does not
/// compile:
/// ```rust,compile_fail
/// use lrplanar::{prelude::*, algo::*};
///
/// struct DirectedPath;
/// impl GraphType for DirectedPath {
///     type Dir = Directed;
/// }
///
/// DirectedPath.is_planar();
/// ```
pub trait PlanarityTest: GraphType<Dir = Undirected> {
    /// Returns *true* if the graph can be drawn in the plane without crossing edges.
    /// Self-loops are ignored, also by the edge bound.
    fn is_planar(&self) -> bool;
}

impl<G> PlanarityTest for G
where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected>,
{
    fn is_planar(&self) -> bool {
        LeftRightPlanarity::new(self).compute()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunState {
    NotRun,
    EulerRejected,
    Tested { planar: bool },
}

/// Configurable Left-Right planarity test on a borrowed graph.
///
/// The fast rejection via the edge bound `m <= 3n - 6` is enabled by default. It assumes that the
/// graph has no parallel edges; self-loops are not counted.
pub struct LeftRightPlanarity<'a, G>
where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected>,
{
    graph: &'a G,
    euler_bound: bool,
    palm_tree: PalmTree,
    state: RunState,
}

impl<'a, G> LeftRightPlanarity<'a, G>
where
    G: AdjacencyList + GraphEdgeOrder + GraphType<Dir = Undirected>,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            euler_bound: true,
            palm_tree: PalmTree::default(),
            state: RunState::NotRun,
        }
    }

    /// Enables/disables the rejection of graphs with more than `3n - 6` edges before any search.
    /// Takes effect with the next call to [`LeftRightPlanarity::run`].
    pub fn set_euler_bound(&mut self, enabled: bool) {
        self.euler_bound = enabled;
    }

    /// Builder-variant of [`LeftRightPlanarity::set_euler_bound`]
    pub fn with_euler_bound(mut self, enabled: bool) -> Self {
        self.set_euler_bound(enabled);
        self
    }

    /// Runs the test from scratch; results of earlier runs are discarded.
    pub fn run(&mut self) {
        let n = self.graph.number_of_nodes();
        let m = self.graph.number_of_edges();
        debug!("Planarity test on n={n}, m={m}");

        self.palm_tree.reset(n, m);

        // self-loops are skipped by the search, so they must not count towards the bound
        if self.euler_bound
            && exceeds_euler_bound(n, m)
            && exceeds_euler_bound(n, m.saturating_sub(self.number_of_self_loops()))
        {
            debug!("Rejected by edge bound: m={m} > 3n-6");
            self.state = RunState::EulerRejected;
            return;
        }

        self.palm_tree.orient(self.graph);
        self.palm_tree.sort_by_nesting_depth();

        let tree = &self.palm_tree;
        debug!(
            "Oriented {} edges into {} DFS trees",
            tree.number_of_edges(),
            tree.roots().len()
        );

        let mut test = ConstraintTest::new(tree);
        let planar = tree
            .roots()
            .iter()
            .try_for_each(|&root| {
                trace!("Testing DFS tree rooted at {root}");
                test.test_from(root)
            })
            .is_ok();

        debug!("Graph is {}planar", if planar { "" } else { "not " });
        self.state = RunState::Tested { planar };
    }

    fn number_of_self_loops(&self) -> NumEdges {
        self.graph
            .vertices()
            .filter(|&u| self.graph.neighbors_of(u).any(|v| v == u))
            .count() as NumEdges
    }

    /// Returns the verdict of the last run
    pub fn is_planar(&self) -> PlanarityResult<bool> {
        match self.state {
            RunState::NotRun => Err(PlanarityError::NotRun),
            RunState::EulerRejected => Ok(false),
            RunState::Tested { planar } => Ok(planar),
        }
    }

    pub fn has_run(&self) -> bool {
        self.state != RunState::NotRun
    }

    /// Returns *true* if the last run rejected the graph by its number of edges alone
    pub fn rejected_by_euler_bound(&self) -> PlanarityResult<bool> {
        match self.state {
            RunState::NotRun => Err(PlanarityError::NotRun),
            state => Ok(state == RunState::EulerRejected),
        }
    }

    /// The palm tree computed by the last run; `None` if the test was not run (yet) or if the
    /// graph was rejected by the edge bound.
    pub fn palm_tree(&self) -> Option<&PalmTree> {
        matches!(self.state, RunState::Tested { .. }).then_some(&self.palm_tree)
    }

    /// Runs the test and returns the verdict
    pub fn compute(mut self) -> bool {
        self.run();
        matches!(self.state, RunState::Tested { planar: true })
    }
}
