/*!
# Node Representation

We choose `Node = u32` as generated networks rarely exceed `2^32` nodes.
This allows us to (1) save space in the degree sampler, which stores one node per edge-endpoint,
and (2) directly manipulate node values without abstracting over them.

Nodes are dense: a graph with `n` nodes contains exactly the nodes `0..n`, and new nodes are
always appended with the next free identifier.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;
