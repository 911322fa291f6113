/*!
Orientation pass of the Left-Right planarity test.

A depth-first search turns the undirected graph into a *palm tree*: every edge is oriented in the
direction it was first traversed and classified as either a tree edge (leading to an unvisited node)
or a back edge (leading to an ancestor). Along the way we compute for each oriented edge the
lowest and second lowest height reachable from its subtree via a single back edge, and the
nesting depth derived from them.
*/

use std::cmp::Ordering;

use fxhash::FxHashSet;

use super::*;

/// DFS depth of a node; roots have height `0`.
pub type Height = NumNodes;

/// Height of a node that was not visited (yet).
pub const NO_HEIGHT: Height = Height::MAX;

/// Dense id of an oriented edge, assigned in discovery order.
pub type EdgeId = NumEdges;

/// Sort key of an oriented edge; `2 * lowpoint + 1` may exceed the range of [`Height`].
pub type NestingDepth = u64;

/// Classification of an oriented edge of the palm tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    /// Edge by which its target was discovered
    Tree,
    /// Edge from a node to one of its proper ancestors
    Back,
}

/// Read-only view of a single oriented edge together with its lowpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedEdge {
    pub edge: Edge,
    pub kind: EdgeKind,
    pub lowpoint: Height,
    pub second_lowpoint: Height,
    pub nesting_depth: NestingDepth,
}

/// The DFS forest produced by the orientation pass, including all per-edge lowpoint information.
///
/// All buffers are kept between runs and only resized, so repeatedly testing graphs of similar
/// size does not reallocate.
#[derive(Debug, Clone, Default)]
pub struct PalmTree {
    pub(super) heights: Vec<Height>,
    pub(super) parent_edge: Vec<Option<EdgeId>>,
    pub(super) roots: Vec<Node>,

    pub(super) edges: Vec<Edge>,
    pub(super) lowpt: Vec<Height>,
    pub(super) lowpt2: Vec<Height>,
    pub(super) nesting_depth: Vec<NestingDepth>,

    /// Outgoing oriented edges per node; after [`PalmTree::sort_by_nesting_depth`] in
    /// ascending nesting depth
    pub(super) out_edges: Vec<Vec<EdgeId>>,

    /// Normalized copies of all edges oriented so far
    oriented: FxHashSet<Edge>,
}

struct OrientationFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    node: Node,
    neighbors: G::NeighborIter<'a>,
    /// Tree edge we descended along; it is closed when this frame resumes
    descended_by: Option<EdgeId>,
}

impl<'a, G> OrientationFrame<'a, G>
where
    G: AdjacencyList + 'a,
{
    fn new(graph: &'a G, node: Node) -> Self {
        Self {
            node,
            neighbors: graph.neighbors_of(node),
            descended_by: None,
        }
    }
}

impl PalmTree {
    /// Resets all per-node and per-edge data for a graph with `n` nodes and `m` edges.
    pub(super) fn reset(&mut self, n: NumNodes, m: NumEdges) {
        let n = n as usize;
        let m = m as usize;

        self.heights.clear();
        self.heights.resize(n, NO_HEIGHT);
        self.parent_edge.clear();
        self.parent_edge.resize(n, None);
        self.roots.clear();

        self.edges.clear();
        self.edges.reserve(m);
        self.lowpt.clear();
        self.lowpt.reserve(m);
        self.lowpt2.clear();
        self.lowpt2.reserve(m);
        self.nesting_depth.clear();
        self.nesting_depth.reserve(m);

        self.out_edges.iter_mut().for_each(Vec::clear);
        self.out_edges.resize_with(n, Vec::new);

        self.oriented.clear();
        self.oriented.reserve(m);
    }

    /// Orients all edges of the graph, starting a new DFS tree at every node not reached yet.
    /// Requires a prior call to [`PalmTree::reset`].
    pub(super) fn orient<G>(&mut self, graph: &G)
    where
        G: AdjacencyList,
    {
        for u in graph.vertices() {
            if self.heights[u as usize] == NO_HEIGHT {
                self.orient_from(graph, u);
            }
        }
    }

    /// Orients all edges reachable from `root`.
    ///
    /// The recursive DFS is simulated with an explicit call stack. Each frame keeps its own
    /// neighbor iterator, so after returning from a child the parent continues exactly with the
    /// neighbor following the tree edge it descended along.
    fn orient_from<G>(&mut self, graph: &G, root: Node)
    where
        G: AdjacencyList,
    {
        self.heights[root as usize] = 0;
        self.roots.push(root);

        let mut call_stack = vec![OrientationFrame::new(graph, root)];

        'recurse: while let Some(frame) = call_stack.last_mut() {
            let u = frame.node;
            let parent = self.parent_edge[u as usize];

            if let Some(e) = frame.descended_by.take() {
                self.close_edge(e, parent);
            }

            for v in frame.neighbors.by_ref() {
                // self-loops never influence planarity
                if u == v || !self.oriented.insert(Edge(u, v).normalized()) {
                    continue;
                }

                let e = self.open_edge(u, v);

                if self.heights[v as usize] == NO_HEIGHT {
                    self.parent_edge[v as usize] = Some(e);
                    self.heights[v as usize] = self.heights[u as usize] + 1;

                    frame.descended_by = Some(e);
                    call_stack.push(OrientationFrame::new(graph, v));
                    continue 'recurse;
                }

                self.lowpt[e as usize] = self.heights[v as usize];
                self.close_edge(e, parent);
            }

            call_stack.pop();
        }
    }

    /// Registers the oriented edge `(u, v)` and returns its id
    fn open_edge(&mut self, u: Node, v: Node) -> EdgeId {
        let e = self.edges.len() as EdgeId;
        let height = self.heights[u as usize];

        self.edges.push(Edge(u, v));
        self.lowpt.push(height);
        self.lowpt2.push(height);
        self.nesting_depth.push(0);
        self.out_edges[u as usize].push(e);

        e
    }

    /// Computes the nesting depth of `e` (whose lowpoints are final at this point) and
    /// merges its lowpoints into those of the parent edge
    fn close_edge(&mut self, e: EdgeId, parent: Option<EdgeId>) {
        let e = e as usize;
        let source_height = self.heights[self.edges[e].source() as usize];
        let (low, low2) = (self.lowpt[e], self.lowpt2[e]);

        self.nesting_depth[e] = 2 * low as NestingDepth + NestingDepth::from(low2 < source_height);

        let Some(p) = parent else {
            return;
        };
        let p = p as usize;

        match low.cmp(&self.lowpt[p]) {
            Ordering::Less => {
                self.lowpt2[p] = self.lowpt[p].min(low2);
                self.lowpt[p] = low;
            }
            Ordering::Greater => {
                self.lowpt2[p] = self.lowpt2[p].min(low);
            }
            Ordering::Equal => {
                self.lowpt2[p] = self.lowpt2[p].min(low2);
            }
        }
    }

    /// Stably sorts the outgoing edges of every node by ascending nesting depth.
    /// Edges of equal depth keep their discovery order.
    pub(super) fn sort_by_nesting_depth(&mut self) {
        let depth = &self.nesting_depth;
        for out in &mut self.out_edges {
            out.sort_by_key(|&e| depth[e as usize]);
        }
    }

    pub(super) fn is_tree_edge(&self, e: EdgeId) -> bool {
        self.parent_edge[self.edges[e as usize].target() as usize] == Some(e)
    }

    /// Roots of the DFS forest in the order they were discovered
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Height of `u` in its DFS tree, or `None` if `u` was not visited
    /// ** Panics if `u >= n` **
    pub fn height_of(&self, u: Node) -> Option<Height> {
        let h = self.heights[u as usize];
        (h != NO_HEIGHT).then_some(h)
    }

    /// Tree edge by which `u` was discovered; `None` for roots and unvisited nodes
    /// ** Panics if `u >= n` **
    pub fn parent_edge_of(&self, u: Node) -> Option<Edge> {
        self.parent_edge[u as usize].map(|e| self.edges[e as usize])
    }

    /// Number of oriented edges, i.e. the number of edges without self-loops
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    fn oriented_edge(&self, e: EdgeId) -> OrientedEdge {
        let idx = e as usize;
        OrientedEdge {
            edge: self.edges[idx],
            kind: if self.is_tree_edge(e) {
                EdgeKind::Tree
            } else {
                EdgeKind::Back
            },
            lowpoint: self.lowpt[idx],
            second_lowpoint: self.lowpt2[idx],
            nesting_depth: self.nesting_depth[idx],
        }
    }

    /// Iterates over all oriented edges in discovery order
    pub fn oriented_edges(&self) -> impl Iterator<Item = OrientedEdge> + '_ {
        (0..self.number_of_edges()).map(|e| self.oriented_edge(e))
    }

    /// Iterates over the outgoing oriented edges of `u` in the order the testing pass visits them
    /// ** Panics if `u >= n` **
    pub fn out_edges_of(&self, u: Node) -> impl Iterator<Item = OrientedEdge> + '_ {
        self.out_edges[u as usize]
            .iter()
            .map(|&e| self.oriented_edge(e))
    }
}
