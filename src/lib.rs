/*!
`hkgraphs` generates synthetic complex networks with the Holme-Kim growth model: preferential
attachment combined with an explicit triangle-formation step, which yields scale-free degree
distributions with tunable clustering.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As generated networks rarely exceed `2^32` nodes, this suffices and halves the memory of the degree
sampler compared to `u64/usize`.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

All graphs are **undirected** and **simple**: `Edge(u, v)` is equivalent to `Edge(v, u)`, and
neither self-loops nor parallel edges are stored.

### Available Representations

See the [`repr`] module for the graph storage backends:

- [`AdjArrayUndir`](crate::repr::AdjArrayUndir)
- [`SparseAdjArrayUndir`](crate::repr::SparseAdjArrayUndir)

Both keep neighborhoods in insertion order, which makes generation reproducible for a seeded
random source.

# Design

All generators are provided as configurable structs that one can alter to their needs using the
*Builder* / *Setter* pattern before running them with a random source.
Graph operations and analysis routines are implemented via traits on the graph itself.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, basic graph operations, and all graph representations,
- [`gens`] includes the Holme-Kim generator, seed networks and deterministic substructures such as paths/cycles/cliques,
- [`algo`] includes traversal, connectivity and clustering routines implemented on graphs,
- [`io`] includes writers for the generated graphs.

In addition, [`repr::digest`] enables computing a `Sha256`-hash of a graph to verify that runs are
reproducible.

```rust
use hkgraphs::{prelude::*, gens::*, algo::*};
use rand::SeedableRng;

let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(1);
let network = HolmeKim::new()
    .nodes(200)
    .links(2)
    .triangle_prob(0.8)
    .seed_size(5)
    .seed_type(SeedType::Ring)
    .generate::<AdjArrayUndir, _>(rng)
    .unwrap();

assert_eq!(network.graph().number_of_nodes(), 200);
assert!(network.graph().average_clustering() > 0.0);
```
*/

pub mod algo;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `hkgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
