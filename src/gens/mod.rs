/*!
# Graph Generators

Deterministic helpers that add well-known **substructures** (paths, cycles, cliques, complete
bipartite graphs, grids) to an existing graph. They are mostly used to build test and benchmark
instances with known planarity.
*/

use crate::{edge::*, node::*, ops::*};

mod substructures;

pub use substructures::*;
