/*!
# Graph Algorithms

This module provides **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lrplanar::algo::*;
```
Algorithms are implemented as configurable structs; the most common use is additionally exposed
as a trait implemented on the graph itself (e.g. `graph.is_planar()`).
*/

mod planarity;

use crate::prelude::*;

pub use planarity::*;
