/*!
# Graph Representations

Storage backends for undirected simple graphs that can grow node by node.

- [`AdjArrayUndir`]: one `Vec<Node>` per node,
- [`SparseAdjArrayUndir`]: one `SmallVec<[Node; 8]>` per node, keeping small neighborhoods inline.

Both keep neighbors in insertion order, so iterating a neighborhood is deterministic. This is
required for reproducible generation: the triangle-formation step scans neighborhoods and picks
an entry by index.
*/

use crate::{ops::*, *};

mod neighborhood;
mod undirected;

pub mod digest;

pub use neighborhood::*;
pub use undirected::*;
