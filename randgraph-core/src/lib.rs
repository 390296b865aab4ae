//! Random directed graph fixtures.
//!
//! Generates a set of uniquely named vertices, gives every vertex a random
//! list of out-edges, and serializes the result as a two-section CSV file:
//! one vertex per line, followed by one `source,target` line per edge.
//!
//! All randomness flows through an injected [`rand::Rng`], so seeded runs are
//! reproducible:
//!
//! ```
//! use randgraph_core::GeneratorBuilder;
//!
//! let generator = GeneratorBuilder::new()
//!     .with_vertex_count(5)
//!     .with_seed(7)
//!     .build()
//!     .expect("configuration is valid");
//! let first = generator.generate().expect("generation succeeds");
//! let second = generator.generate().expect("generation succeeds");
//! assert_eq!(first, second);
//! assert_eq!(first.vertex_count(), 5);
//! ```

mod builder;
mod csv;
mod error;
mod generate;
mod graph;
mod vertex;

pub use crate::{
    builder::{DEFAULT_ID_LENGTH, Generator, GeneratorBuilder},
    csv::{read_graph, read_graph_from_path, write_graph, write_graph_to_path},
    error::{GraphError, GraphErrorCode, Result},
    generate::{MAX_DRAWS_PER_VERTEX, generate_edges, generate_vertices},
    graph::{Graph, GraphStats},
    vertex::{ALPHABET, VertexId, VertexSet},
};
