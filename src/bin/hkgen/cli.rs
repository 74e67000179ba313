//! Command-line arguments of `hkgen` and the generation pipeline behind them.

use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hkgraphs::{
    algo::Clustering,
    gens::{
        AverageDegreeGen, DEFAULT_SEED_AVG_DEG, HolmeKim, HolmeKimNetwork, NumNodesGen, SeedType,
    },
    io::{EdgeListWriter, GraphWriter},
    prelude::*,
    repr::digest::GraphDigest,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::{debug, info, instrument, warn};

/// Generates a Holme-Kim network and writes it as an edge list.
///
/// Every new node brings `M` edges: the first target is chosen by preferential attachment, each
/// further one with probability `PT` closes a triangle with the previous preferential target.
#[derive(Debug, Parser)]
#[command(name = "hkgen", version, about)]
pub struct Cli {
    /// Number of nodes of the final network
    pub net_size: NumNodes,
    /// Seed of the random number generator
    pub randseed: u64,
    /// Number of links every new node brings
    pub m: usize,
    /// Probability of a triangle-formation step
    pub pt: f64,
    /// Number of nodes of the seed network
    pub seed_size: NumNodes,
    /// Seed topology: random, clique, ring or chain (unknown values fall back to random)
    pub seed_type: String,
    /// Average degree of a random seed
    pub k_ave: Option<f64>,

    /// Write the edge list to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Precede the edge list with a `p edge <nodes> <edges>` line
    #[arg(long)]
    pub header: bool,
    /// Check graph and sampler invariants while growing
    #[arg(long)]
    pub validate: bool,
    /// Log degree and clustering statistics of the generated network
    #[arg(long)]
    pub stats: bool,
}

impl Cli {
    /// Translates the arguments into a generator configuration.
    /// Unknown seed types and a missing average degree for random seeds are reported as
    /// warnings and replaced by defaults.
    pub fn config(&self) -> HolmeKim {
        let seed_type = SeedType::parse_or_random(&self.seed_type);

        let k_ave = match (seed_type, self.k_ave) {
            (_, Some(k)) => k,
            (SeedType::Random, None) => {
                warn!(
                    k_ave = DEFAULT_SEED_AVG_DEG,
                    "average degree not given for the random seed, using default"
                );
                DEFAULT_SEED_AVG_DEG
            }
            (_, None) => DEFAULT_SEED_AVG_DEG,
        };

        HolmeKim::new()
            .nodes(self.net_size)
            .links(self.m)
            .triangle_prob(self.pt)
            .seed_size(self.seed_size)
            .seed_type(seed_type)
            .avg_deg(k_ave)
            .validate_invariants(self.validate)
    }

    fn writer(&self) -> EdgeListWriter {
        let writer = EdgeListWriter::new();
        if self.header {
            writer.default_header()
        } else {
            writer
        }
    }
}

/// Generates the network described by `cli`
#[instrument(name = "generate", skip_all, fields(randseed = cli.randseed))]
pub fn generate(cli: &Cli) -> Result<HolmeKimNetwork<AdjArrayUndir>> {
    let config = cli.config();
    let rng = &mut Pcg64Mcg::seed_from_u64(cli.randseed);

    let network: HolmeKimNetwork<AdjArrayUndir> = config
        .generate(rng)
        .context("failed to generate Holme-Kim network")?;

    debug!(digest = %network.graph().digest_sha256(), "generated network");
    Ok(network)
}

/// Logs degree and clustering statistics of `graph`
pub fn report_stats<G: AdjacencyList + GraphEdgeOrder>(graph: &G) {
    info!(
        nodes = graph.number_of_nodes(),
        edges = graph.number_of_edges(),
        average_degree = graph.average_degree(),
        max_degree = graph.max_degree(),
        average_clustering = graph.average_clustering(),
        transitivity = graph.transitivity(),
        triangles = graph.number_of_triangles(),
        "network statistics"
    );

    for (degree, count) in graph.degree_distribution() {
        debug!(degree, count, "degree distribution");
    }
}

/// Runs the complete pipeline: generation, optional statistics and output
pub fn run(cli: &Cli) -> Result<()> {
    let network = generate(cli)?;
    if cli.stats {
        report_stats(network.graph());
    }

    let writer = cli.writer();
    match &cli.output {
        Some(path) => writer
            .try_write_graph_file(network.graph(), path)
            .with_context(|| format!("failed to write edge list to {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            writer
                .try_write_graph(network.graph(), &mut out)
                .context("failed to write edge list")?;
            out.flush().context("failed to flush output")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use hkgraphs::gens::GenerationError;
    use rstest::rstest;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("hkgen").chain(args.iter().copied()))
            .expect("arguments must parse")
    }

    #[test]
    fn positional_arguments() {
        let cli = parse(&["1000", "7", "3", "0.6", "10", "random", "4.5"]);

        assert_eq!(cli.net_size, 1000);
        assert_eq!(cli.randseed, 7);
        assert_eq!(cli.m, 3);
        assert_eq!(cli.pt, 0.6);
        assert_eq!(cli.seed_size, 10);
        assert_eq!(cli.seed_type, "random");
        assert_eq!(cli.k_ave, Some(4.5));
        assert!(!cli.header && !cli.validate && !cli.stats);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn options() {
        let cli = parse(&[
            "50", "1", "2", "0.5", "5", "ring", "--header", "--validate", "--stats", "-o",
            "out.txt",
        ]);

        assert_eq!(cli.k_ave, None);
        assert!(cli.header && cli.validate && cli.stats);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[rstest]
    #[case(&["10", "1", "2"])]
    #[case(&["10", "1", "2", "0.5", "4"])]
    #[case(&["ten", "1", "2", "0.5", "4", "clique"])]
    #[case(&["10", "1", "2", "high", "4", "clique"])]
    fn invalid_arguments(#[case] args: &[&str]) {
        let res = Cli::try_parse_from(std::iter::once("hkgen").chain(args.iter().copied()));
        assert!(res.is_err());
    }

    #[test]
    fn unknown_seed_type_falls_back_to_random() {
        let cli = parse(&["40", "3", "2", "0.5", "6", "star"]);
        let network = generate(&cli).expect("random seed must be generated");

        assert_eq!(network.graph().number_of_nodes(), 40);
        assert_eq!(network.stats().tosses, 34);
    }

    #[test]
    fn generation_is_reproducible() {
        let cli = parse(&["300", "11", "3", "0.6", "10", "random", "3"]);

        let a = generate(&cli).expect("generation must succeed");
        let b = generate(&cli).expect("generation must succeed");
        assert_eq!(a.graph().digest_sha256(), b.graph().digest_sha256());
    }

    #[test]
    fn header_is_written_on_request() {
        let cli = parse(&["6", "5", "2", "1.0", "4", "clique", "--header", "--validate"]);
        let network = generate(&cli).expect("generation must succeed");

        let mut out = Vec::new();
        cli.writer()
            .try_write_graph(network.graph(), &mut out)
            .expect("writing to memory must succeed");

        let out = String::from_utf8(out).expect("edge list is UTF-8");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("p edge 6 10"));
        assert_eq!(lines.count(), 10);
    }

    #[test]
    fn configuration_errors_are_reported() {
        let cli = parse(&["10", "1", "5", "0.5", "4", "clique"]);
        let err = generate(&cli).expect_err("too many links");

        assert_eq!(
            err.downcast_ref::<GenerationError>(),
            Some(&GenerationError::TooManyLinks {
                links: 5,
                seed_size: 4
            })
        );
    }
}
