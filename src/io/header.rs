//! # Headers
//!
//! A header(-line) for a graph file is defined by a series of tokens separated by `" "`,
//! stating the size of the graph and the problem the graph was created for.
//!
//! Generated networks use `p edge {n} {m}` by default, where `n` is the number of nodes and `m`
//! the number of edges.

use itertools::Itertools;
use smallvec::{SmallVec, smallvec};

use super::*;

/// Defining a single token in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderToken {
    /// Literal entry
    Str(String),
    /// Number of nodes
    NumNodes,
    /// Number of edges
    NumEdges,
}

/// Format of a header line.
///
/// ```
/// use hkgraphs::io::Header;
///
/// let mut out = Vec::new();
/// Header::new_problem("edge").write_header(&mut out, 5, 7).unwrap();
/// assert_eq!(out, b"p edge 5 7\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header(SmallVec<[HeaderToken; 4]>);

impl Default for Header {
    fn default() -> Self {
        Self::new_problem("edge")
    }
}

impl Header {
    /// Creates a header in the Pace-Style `p {problem} {n} {m}`
    pub fn new_problem<S: Into<String>>(problem: S) -> Self {
        Self(smallvec![
            HeaderToken::Str("p".to_string()),
            HeaderToken::Str(problem.into()),
            HeaderToken::NumNodes,
            HeaderToken::NumEdges,
        ])
    }

    /// Creates a header from arbitrary tokens
    pub fn from_tokens(tokens: impl IntoIterator<Item = HeaderToken>) -> Self {
        Self(tokens.into_iter().collect())
    }

    /// Writes the header line for a graph with `n` nodes and `m` edges
    pub fn write_header<W: Write>(&self, writer: &mut W, n: NumNodes, m: NumEdges) -> Result<()> {
        let line = self
            .0
            .iter()
            .map(|token| match token {
                HeaderToken::Str(s) => s.clone(),
                HeaderToken::NumNodes => n.to_string(),
                HeaderToken::NumEdges => m.to_string(),
            })
            .join(" ");
        writeln!(writer, "{line}")
    }
}
