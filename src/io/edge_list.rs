//! # EdgeList
//!
//! The EdgeList-Format consists of an optional header, followed by `m` lines `u v`, one per
//! undirected edge. Every edge is written exactly once in normalized form (`u < v`) and edges are
//! sorted, so equal graphs produce equal files.
//!
//! Nodes are written 0-based by default; `one_based(true)` shifts them to `1..=n` as expected by
//! Pace-style tools.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use super::*;

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Header written before the first edge
    header: Option<Header>,
    /// Offset added to every node
    one_based: bool,
}

impl EdgeListWriter {
    /// Shorthand for default: no header, 0-based nodes
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the given header before the edges
    pub fn header(mut self, header: Header) -> Self {
        self.header = Some(header);
        self
    }

    /// Writes the default header `p edge {n} {m}` before the edges
    pub fn default_header(self) -> Self {
        self.header(Header::default())
    }

    /// Writes nodes as `1..=n` instead of `0..n`
    pub fn one_based(mut self, one_based: bool) -> Self {
        self.one_based = one_based;
        self
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if let Some(header) = &self.header {
            header.write_header(
                &mut writer,
                graph.number_of_nodes(),
                graph.number_of_edges(),
            )?;
        }

        let offset = self.one_based as Node;
        for Edge(u, v) in graph.ordered_edges(true) {
            writeln!(writer, "{} {}", u + offset, v + offset)?;
        }

        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the EdgeList-Format.
/// Shorthand for default settings.
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: AdjacencyList + GraphEdgeOrder> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
