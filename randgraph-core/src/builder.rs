//! Builder utilities for configuring graph generation.
//!
//! Validates the requested vertex count and identifier length before a
//! [`Generator`] is constructed.

use std::num::NonZeroUsize;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{info, instrument};

use crate::{
    error::{GraphError, Result},
    generate::{check_identifier_space, generate_edges, generate_vertices},
    graph::Graph,
};

/// Length of generated vertex identifiers unless overridden.
pub const DEFAULT_ID_LENGTH: usize = 12;

/// Configures and constructs [`Generator`] instances.
///
/// # Examples
/// ```
/// use randgraph_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(8)
///     .with_id_length(4)
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.vertex_count(), 8);
/// assert_eq!(generator.id_length().get(), 4);
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    id_length: usize,
    seed: Option<u64>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: 0,
            id_length: DEFAULT_ID_LENGTH,
            seed: None,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{DEFAULT_ID_LENGTH, GeneratorBuilder};
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 0);
    /// assert_eq!(builder.id_length(), DEFAULT_ID_LENGTH);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices to generate.
    #[must_use]
    pub fn with_vertex_count(mut self, count: usize) -> Self {
        self.vertex_count = count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the identifier length.
    #[must_use]
    pub fn with_id_length(mut self, length: usize) -> Self {
        self.id_length = length;
        self
    }

    /// Returns the configured identifier length.
    #[must_use]
    pub fn id_length(&self) -> usize {
        self.id_length
    }

    /// Fixes the random seed so every run produces the same graph.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`Generator`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidIdLength`] when the identifier length is
    /// zero and [`GraphError::IdentifierSpaceExhausted`] when more vertices are
    /// requested than identifiers of that length exist.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::{GeneratorBuilder, GraphError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_id_length(0)
    ///     .build()
    ///     .expect_err("zero-length identifiers are invalid");
    /// assert!(matches!(err, GraphError::InvalidIdLength { got: 0 }));
    /// ```
    pub fn build(self) -> Result<Generator> {
        check_identifier_space(self.vertex_count, self.id_length)?;
        let id_length =
            NonZeroUsize::new(self.id_length).ok_or(GraphError::InvalidIdLength { got: 0 })?;

        Ok(Generator {
            vertex_count: self.vertex_count,
            id_length,
            seed: self.seed,
        })
    }
}

/// Validated generation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generator {
    vertex_count: usize,
    id_length: NonZeroUsize,
    seed: Option<u64>,
}

impl Generator {
    /// Number of vertices each generated graph contains.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Length of generated identifiers.
    #[must_use]
    pub fn id_length(&self) -> NonZeroUsize {
        self.id_length
    }

    /// Seed used by [`Generator::generate`], if fixed.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generates a graph using a [`SmallRng`] seeded from the configured seed,
    /// or from operating system entropy when no seed is set.
    ///
    /// # Errors
    /// Propagates [`GraphError::CapacityExhausted`] and
    /// [`GraphError::RetryBudgetExhausted`] from vertex generation.
    pub fn generate(&self) -> Result<Graph> {
        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates a graph drawing all randomness from `rng`.
    ///
    /// # Errors
    /// Propagates [`GraphError::CapacityExhausted`] and
    /// [`GraphError::RetryBudgetExhausted`] from vertex generation.
    ///
    /// # Examples
    /// ```
    /// use rand::{SeedableRng, rngs::StdRng};
    /// use randgraph_core::GeneratorBuilder;
    ///
    /// let generator = GeneratorBuilder::new()
    ///     .with_vertex_count(1)
    ///     .build()
    ///     .expect("configuration is valid");
    /// let graph = generator
    ///     .generate_with(&mut StdRng::seed_from_u64(0))
    ///     .expect("generation succeeds");
    /// assert_eq!(graph.vertex_count(), 1);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[instrument(
        name = "core.generate",
        err,
        skip(self, rng),
        fields(vertices = self.vertex_count, id_length = %self.id_length, seed = ?self.seed),
    )]
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph> {
        let vertices = generate_vertices(rng, self.vertex_count, self.id_length.get())?;
        let graph = generate_edges(rng, vertices);
        info!(edges = graph.edge_count(), "graph generated");
        Ok(graph)
    }
}
