/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

# Example

```rust
use lrplanar::{prelude::*, gens::*};

let mut g = AdjArrayUndir::new(6);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);
g.connect_clique([0, 4, 5]);

assert_eq!(
    g.ordered_edges(true).collect::<Vec<Edge>>(),
    vec![Edge(0, 1), Edge(0, 4), Edge(0, 5), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4), Edge(4, 5)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** inside an already existing graph.
///
/// Implemented for all graphs that support edge editing and type queries.
/// Edges that are already present are not added a second time.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// # Example
    /// ```rust
    /// use lrplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(4);
    /// g.connect_path([0, 1, 2, 3]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// # Example
    /// ```rust
    /// use lrplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(3);
    /// g.connect_cycle([0, 1, 2]);
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 0));
    /// ```
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph) without self-loops.
    ///
    /// # Example
    /// ```rust
    /// use lrplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(5);
    /// g.connect_clique(0..5);
    ///
    /// assert_eq!(g.number_of_edges(), 10);
    /// ```
    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects every node of `left` with every node of `right` (**complete bipartite graph**).
    ///
    /// # Example
    /// ```rust
    /// use lrplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(6);
    /// g.connect_biclique(0..3, 3..6);
    ///
    /// assert_eq!(g.number_of_edges(), 9);
    /// assert!(!g.has_edge(0, 1));
    /// ```
    fn connect_biclique<L, R>(&mut self, left: L, right: R)
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>;

    /// Connects the nodes `offset..offset + rows * cols` into a `rows x cols` **grid**,
    /// where node `offset + r * cols + c` sits in row `r` and column `c`.
    ///
    /// # Example
    /// ```rust
    /// use lrplanar::{prelude::*, gens::*};
    ///
    /// let mut g = AdjArrayUndir::new(9);
    /// g.connect_grid(0, 3, 3);
    ///
    /// assert_eq!(g.number_of_edges(), 12);
    /// assert!(g.has_edge(4, 7));
    /// ```
    fn connect_grid(&mut self, offset: Node, rows: NumNodes, cols: NumNodes);
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + GraphType,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // we use a rather tedious implementation to avoid needing to clone the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.try_add_edge(prev, cur);
                prev = cur;
            }

            if prev != first {
                self.try_add_edge(prev, first);
            }
        }
    }

    fn connect_clique<C>(&mut self, nodes: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().collect_vec();
        for (u, v) in nodes.into_iter().tuple_combinations() {
            let e = Edge(u, v);
            if e.is_loop() {
                continue;
            }

            self.try_add_edge(u, v);
            if Self::is_directed() {
                self.try_add_edge(v, u);
            }
        }
    }

    fn connect_biclique<L, R>(&mut self, left: L, right: R)
    where
        L: IntoIterator<Item = Node>,
        R: IntoIterator<Item = Node>,
    {
        let right = right.into_iter().collect_vec();
        for u in left {
            for &v in &right {
                self.try_add_edge(u, v);
            }
        }
    }

    fn connect_grid(&mut self, offset: Node, rows: NumNodes, cols: NumNodes) {
        let node_at = |r: NumNodes, c: NumNodes| offset + r * cols + c;
        for r in 0..rows {
            for c in 0..cols {
                if c + 1 < cols {
                    self.try_add_edge(node_at(r, c), node_at(r, c + 1));
                }
                if r + 1 < rows {
                    self.try_add_edge(node_at(r, c), node_at(r + 1, c));
                }
            }
        }
    }
}
