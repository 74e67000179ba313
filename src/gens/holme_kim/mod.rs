/*!
# Holme-Kim Networks

Growing scale-free networks with tunable clustering (P. Holme and B. J. Kim, *Growing scale-free
networks with tunable clustering*, Phys. Rev. E 65, 026107).

Starting from a small connected seed, nodes are appended one at a time. Every new node connects
to `m` distinct existing nodes: the first is chosen by **preferential attachment** (probability
proportional to degree), each further one is, with probability `pt`, a random neighbor of the
most recent preferential target (**triangle formation**) and otherwise chosen preferentially as
well. Larger `pt` yields larger clustering while the degree distribution stays scale-free.

The building blocks are exposed individually:
- [`DegreeSampler`]: degree-proportional multiset with `O(1)` sampling,
- [`TargetSelector`]: picks the targets of a single new node,
- [`Growth`]: stepwise growth loop owning graph and sampler,
- [`InvariantChecker`]: structural checks, enabled via [`HolmeKim::validate_invariants`].

# Example

```rust
use hkgraphs::{prelude::*, gens::*, algo::*};
use rand::SeedableRng;

let rng = &mut rand_pcg::Pcg64Mcg::seed_from_u64(42);
let network = HolmeKim::new()
    .nodes(1000)
    .links(3)
    .triangle_prob(0.6)
    .seed_size(10)
    .seed_type(SeedType::Clique)
    .generate::<AdjArrayUndir, _>(rng)
    .unwrap();

let graph = network.graph();
assert_eq!(graph.number_of_nodes(), 1000);
assert_eq!(graph.number_of_edges(), 45 + 3 * 990);
assert_eq!(network.stats().tosses, 2 * 990);
assert!(graph.is_connected());
```
*/

use rand::Rng;
use tracing::info;

use super::*;
use crate::utils::Probability;

mod growth;
mod invariants;
mod sampler;
mod selector;

pub use growth::*;
pub use invariants::*;
pub use sampler::*;
pub use selector::*;

/// Default bound on rejected draws per preferential pick
pub const DEFAULT_MAX_DRAWS: usize = 1 << 20;

/// Configuration of the Holme-Kim generator.
///
/// The generator is configured with the builder pattern:
/// - `.nodes(n)`: final number of nodes
/// - `.links(m)`: number of edges every new node brings (default: `1`)
/// - `.triangle_prob(pt)`: triangle-formation probability (default: `0.0`)
/// - `.seed_size(s)` and `.seed_type(t)`: the seed network (default type: random)
/// - `.avg_deg(k)`: average degree of random seeds (default: `2.0`)
/// - `.max_seed_attempts(a)`: bound on regenerated random seeds
/// - `.max_draws(d)`: bound on rejected draws per preferential pick
/// - `.validate_invariants(true)`: check graph and sampler consistency while growing
#[derive(Debug, Copy, Clone)]
pub struct HolmeKim {
    nodes: NumNodes,
    links: usize,
    triangle_prob: f64,
    seed_size: NumNodes,
    seed_type: SeedType,
    avg_deg: f64,
    max_seed_attempts: usize,
    max_draws: usize,
    validate_invariants: bool,
}

impl Default for HolmeKim {
    fn default() -> Self {
        Self {
            nodes: 0,
            links: 1,
            triangle_prob: 0.0,
            seed_size: 0,
            seed_type: SeedType::default(),
            avg_deg: DEFAULT_SEED_AVG_DEG,
            max_seed_attempts: DEFAULT_MAX_SEED_ATTEMPTS,
            max_draws: DEFAULT_MAX_DRAWS,
            validate_invariants: false,
        }
    }
}

impl HolmeKim {
    /// Creates a new generator with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of edges every new node brings
    pub fn links(mut self, m: usize) -> Self {
        self.links = m;
        self
    }

    /// Sets the probability of triangle formation after a preferential pick
    pub fn triangle_prob(mut self, pt: f64) -> Self {
        self.triangle_prob = pt;
        self
    }

    /// Sets the number of seed nodes
    pub fn seed_size(mut self, seed_size: NumNodes) -> Self {
        self.seed_size = seed_size;
        self
    }

    /// Sets the topology of the seed network
    pub fn seed_type(mut self, seed_type: SeedType) -> Self {
        self.seed_type = seed_type;
        self
    }

    /// Sets the maximum number of random seeds to generate before giving up
    pub fn max_seed_attempts(mut self, attempts: usize) -> Self {
        self.max_seed_attempts = attempts;
        self
    }

    /// Sets the maximum number of rejected draws per preferential pick
    pub fn max_draws(mut self, draws: usize) -> Self {
        self.max_draws = draws.max(1);
        self
    }

    /// Enables or disables invariant checks during growth
    pub fn validate_invariants(mut self, validate: bool) -> Self {
        self.validate_invariants = validate;
        self
    }

    /// Returns the seed generator described by this configuration
    pub fn seed_network(&self) -> SeedNetwork {
        SeedNetwork::new()
            .seed_type(self.seed_type)
            .nodes(self.seed_size)
            .avg_deg(self.avg_deg)
            .max_attempts(self.max_seed_attempts)
    }

    /// Number of coin tosses of a complete run: `(m - 1) * (n - seed_size)`
    pub fn expected_tosses(&self) -> u64 {
        self.tosses_after(self.seed_size)
    }

    /// Number of edges of a complete run grown from a seed with `seed_edges` edges
    pub fn expected_edges(&self, seed_edges: NumEdges) -> u64 {
        seed_edges as u64 + self.links as u64 * self.nodes.saturating_sub(self.seed_size) as u64
    }

    fn tosses_after(&self, seed_size: NumNodes) -> u64 {
        (self.links as u64).saturating_sub(1) * self.nodes.saturating_sub(seed_size) as u64
    }

    /// Checks the parameters without generating anything
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.seed_size > self.nodes {
            return Err(GenerationError::SeedLargerThanNetwork {
                seed_size: self.seed_size,
                net_size: self.nodes,
            });
        }

        self.validate_growth()?;
        self.seed_network().validate()?;

        // fewer seed nodes than links would leave no unused target for the first new node
        if self.links > self.seed_size as usize {
            return Err(GenerationError::TooManyLinks {
                links: self.links,
                seed_size: self.seed_size,
            });
        }

        Ok(())
    }

    fn validate_growth(&self) -> Result<(), GenerationError> {
        if self.links == 0 {
            return Err(GenerationError::ZeroLinks);
        }

        if !self.triangle_prob.is_valid_probability() {
            return Err(GenerationError::InvalidTriangleProbability(
                self.triangle_prob,
            ));
        }

        Ok(())
    }

    /// Builds the seed network and grows it to the configured size
    pub fn generate<G, R>(&self, rng: &mut R) -> Result<HolmeKimNetwork<G>, GenerationError>
    where
        G: GrowableGraph,
        R: Rng,
    {
        self.validate()?;

        info!(
            net_size = self.nodes,
            links = self.links,
            triangle_prob = self.triangle_prob,
            seed_size = self.seed_size,
            seed_type = %self.seed_type,
            avg_deg = self.avg_deg,
            "generating Holme-Kim network"
        );

        let seed: G = self.seed_network().build(rng)?;
        self.grow(seed, rng)
    }

    /// Grows a given seed network to the configured size.
    /// The seed type and size of this configuration are ignored.
    pub fn grow<G, R>(&self, seed: G, rng: &mut R) -> Result<HolmeKimNetwork<G>, GenerationError>
    where
        G: GrowableGraph,
        R: Rng,
    {
        Growth::new(self, seed, rng)?.finish()
    }
}

impl NumNodesGen for HolmeKim {
    fn set_nodes(&mut self, n: NumNodes) {
        self.nodes = n;
    }
}

impl AverageDegreeGen for HolmeKim {
    /// Only used by random seeds
    fn set_avg_deg(&mut self, deg: f64) {
        self.avg_deg = deg;
    }
}
