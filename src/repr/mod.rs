/*!
# Graph Representations

Storage backends implementing the traits of [`ops`](crate::ops).

- [`AdjArrayUndir`]: undirected graph with one `Vec<Node>` per node
- [`SparseAdjArrayUndir`]: undirected graph with one `SmallVec` per node; prefer this if the graph
  is known to be sparse

Both keep neighbors in insertion order, so neighbor iteration is stable and repeatable as long as
the graph is not edited.
*/

use crate::{edge::*, node::*, ops::*};

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
