/*!
`lrplanar` is a small graph library built around a linear-time **planarity test** for graphs that are
- **unlabelled** : Nodes are numbered `0` to `n - 1`
- **unweighted** : Neither nodes nor edges have a weight attached to them
- **undirected** : Directed graphs are rejected at compile time

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

Graphs are accessed through the traits in [`ops`]. Any type implementing
[`AdjacencyList`](crate::ops::AdjacencyList), [`GraphEdgeOrder`](crate::ops::GraphEdgeOrder) and
[`GraphType<Dir = Undirected>`](crate::ops::GraphType) can be tested, as long as it iterates
neighbors in a stable order. See the [`repr`] module for the representations shipped with the crate:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

# Design

Algorithms are provided as configurable structs that one can alter to their needs using either the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
The common use case is additionally implemented via a trait on the graph itself.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all standard graph representations,
- [`algo`] includes the planarity test, both as a trait on the graph (`graph.is_planar()`) and as the configurable [`LeftRightPlanarity`](crate::algo::LeftRightPlanarity),
- [`gens`] includes deterministic substructures such as paths/cycles/cliques/grids to build graphs with known planarity.

In most use-cases, `use lrplanar::{prelude::*, algo::*};` suffices for your needs.

```rust
use lrplanar::{prelude::*, algo::*, gens::*};

let mut g = AdjArrayUndir::new(6);
g.connect_biclique(0..3, 3..6);
assert!(!g.is_planar());

g.remove_edge(0, 3);
assert!(g.is_planar());
```

The library emits diagnostics through the [`log`](https://crates.io/crates/log) facade; install any
logger in your binary to see them.
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

/// `lrplanar::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
