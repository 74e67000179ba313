/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which allows computing
**hash-based digests** of graphs that are independent of the underlying
data structure and of the insertion order of edges.

The digest encodes:
- the number of nodes, and
- the sorted list of normalized edges,

before feeding them into a cryptographic hash function. Two runs of a generator with identical
configuration and identically seeded random source must produce identical digests.

## Example
```
use hkgraphs::{prelude::*, repr::digest::GraphDigest};

let mut a = AdjArrayUndir::new(4);
a.add_edge(0, 1);
a.add_edge(3, 2);

let mut b = AdjArrayUndir::new(4);
b.add_edge(2, 3);
b.add_edge(1, 0);

assert_eq!(a.digest_sha256(), b.digest_sha256());
assert_eq!(a.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};
use itertools::Itertools;

use super::*;

/// Trait for computing a **canonical hash digest** of a graph.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        hasher.update(self.number_of_nodes().to_le_bytes());

        let mut buffer = [0u8; 8];
        for Edge(u, v) in self.edges(true).sorted_unstable() {
            buffer[..4].copy_from_slice(&u.to_le_bytes());
            buffer[4..].copy_from_slice(&v.to_le_bytes());
            hasher.update(buffer);
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_depends_on_structure() {
        let mut a = AdjArrayUndir::new(5);
        a.add_edge(0, 1);
        a.add_edge(1, 2);

        let mut b = SparseAdjArrayUndir::new(5);
        b.add_edge(2, 1);
        b.add_edge(1, 0);

        assert_eq!(a.digest_sha256(), b.digest_sha256());

        b.add_edge(3, 4);
        assert_ne!(a.digest_sha256(), b.digest_sha256());

        // same edges but a different number of nodes
        let mut c = AdjArrayUndir::new(6);
        c.add_edge(0, 1);
        c.add_edge(1, 2);
        assert_ne!(a.digest_sha256(), c.digest_sha256());
    }
}
