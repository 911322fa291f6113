use super::*;

/// An undirected graph representation
#[derive(Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using an Adjacency-Array
pub type AdjArrayUndir = UndirectedGraph<ArrNeighborhood>;

/// Representation using a sparse Adjacency-Array
pub type SparseAdjArrayUndir = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> GraphType for UndirectedGraph<Nbs> {
    type Dir = Undirected;
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    type NeighborIter<'a>
        = Nbs::NeighborhoodIter<'a>
    where
        Self: 'a;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_add_neighbor(v) {
            if u != v {
                assert!(!self.nbs[v as usize].try_add_neighbor(u));
            }
            self.num_edges += 1;
            false
        } else {
            true
        }
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_remove_neighbor(v) {
            if u != v {
                assert!(self.nbs[v as usize].try_remove_neighbor(u));
            }
            self.num_edges -= 1;
            true
        } else {
            false
        }
    }
}

crate::testing::test_graph_ops!(
    test_adj_array_undir,
    AdjArrayUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

crate::testing::test_graph_ops!(
    test_sparse_adj_array_undir,
    SparseAdjArrayUndir,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
