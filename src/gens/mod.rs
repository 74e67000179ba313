/*!
# Graph Generators

This module provides builder-style generators for the networks used by the growth model.

Each generator allows parameterized control over structural properties of the graph (e.g. number
of nodes, average degree) and is configured fluently before it is run:

1. Create a generator instance (e.g. `HolmeKim::new()`).
2. Set parameters using builder methods (e.g. `.nodes(n).links(m)`).
3. Generate the graph (e.g. via `generate(rng)`).

Supported models include:
- G(n,p): Erdős–Rényi model with independent edge probability, used for random seeds
- Seed networks: connected random, clique, ring and chain seeds
- Holme-Kim: preferential attachment with triangle formation

In addition, [`GeneratorSubstructures`] connects given nodes into paths, cycles or cliques inside an
existing graph.
*/

use rand::Rng;

use crate::prelude::*;

mod error;
mod gnp;
pub mod holme_kim;
mod seed;
mod substructures;

pub use error::*;
pub use gnp::*;
pub use holme_kim::{HolmeKim, HolmeKimNetwork};
pub use seed::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen: Sized {
    /// Sets the number of nodes in the graph generator.
    fn set_nodes(&mut self, n: NumNodes);

    /// Sets the number of nodes in the graph generator.
    fn nodes(mut self, n: NumNodes) -> Self {
        self.set_nodes(n);
        self
    }
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen: Sized {
    /// Set the average degree of this generator.
    fn set_avg_deg(&mut self, deg: f64);

    /// Set the average degree of this generator.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.set_avg_deg(deg);
        self
    }
}
