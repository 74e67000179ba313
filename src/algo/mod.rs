/*!
# Graph Algorithms

Analysis routines used to validate seeds and to judge generated networks.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use hkgraphs::algo::*;
```
and gain access to traversal, connectivity and clustering routines implemented directly on
graph data structures.
*/

mod clustering;
mod connectivity;
mod traversal;

use crate::prelude::*;

pub use clustering::*;
pub use connectivity::*;
pub use traversal::*;
