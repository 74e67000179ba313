/*!
# IO

Utilities for writing generated graphs to files or other writers.

## Output Formats

Currently supported output formats:
- **EdgeList**: Represents the graph as a list of edges separated by line breaks, optionally
  preceded by a [`Header`] line stating the number of nodes and edges.

## Traits

To generalize over writing:
- [`GraphWriter`] is implemented by configurable writers for a specific format.
- [`EdgeListWrite`] is a shorthand implemented directly on graphs using default settings.
*/

pub mod edge_list;
pub mod header;

use std::{
    fs::File,
    io::{BufWriter, Result, Write},
    path::Path,
};

use crate::prelude::*;

pub use edge_list::*;
pub use header::*;

/// Trait for types that can write graphs in a specific format.
///
/// This trait provides both a low-level method to write to any
/// [`Write`] instance and a convenience wrapper to write directly
/// to files.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Writes the given graph to a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered writer.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or if writing fails.
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}
