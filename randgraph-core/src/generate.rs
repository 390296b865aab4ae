//! Random vertex and edge generation.

use rand::{Rng, seq::index};
use tracing::{debug, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
    vertex::{ALPHABET, VertexId, VertexSet},
};

/// Draw budget per requested vertex before duplicate rejection gives up.
pub const MAX_DRAWS_PER_VERTEX: usize = 64;

/// Draws `count` distinct identifiers of `id_length` lowercase letters.
///
/// Duplicate draws are discarded and retried. `count == 0` returns an empty
/// set without touching `rng`.
///
/// # Errors
/// Returns [`GraphError::InvalidIdLength`] when `id_length` is zero,
/// [`GraphError::IdentifierSpaceExhausted`] when fewer than `count`
/// identifiers of that length exist, [`GraphError::CapacityExhausted`] when
/// storage for `count` vertices cannot be reserved, and
/// [`GraphError::RetryBudgetExhausted`] if `count * MAX_DRAWS_PER_VERTEX`
/// draws fail to produce enough distinct identifiers.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::generate_vertices;
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let vertices = generate_vertices(&mut rng, 3, 12).expect("space is large enough");
/// assert_eq!(vertices.len(), 3);
/// assert!(vertices.iter().all(|v| v.as_str().len() == 12));
/// ```
#[instrument(name = "core.generate_vertices", level = "debug", err, skip(rng))]
pub fn generate_vertices<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    id_length: usize,
) -> Result<VertexSet> {
    check_identifier_space(count, id_length)?;

    let mut vertices =
        VertexSet::try_with_capacity(count).map_err(|source| GraphError::CapacityExhausted {
            requested: count,
            source,
        })?;
    let budget = count.saturating_mul(MAX_DRAWS_PER_VERTEX);
    let mut draws = 0_usize;
    let mut duplicates = 0_usize;
    while !vertices.is_full() {
        if draws == budget {
            return Err(GraphError::RetryBudgetExhausted {
                requested: count,
                accepted: vertices.len(),
                draws,
            });
        }
        draws += 1;
        if !vertices.insert(random_identifier(rng, id_length)) {
            duplicates += 1;
        }
    }

    debug!(draws, duplicates, "vertex generation completed");
    Ok(vertices)
}

/// Assigns every vertex a random list of out-edges.
///
/// For each vertex an edge count `k` is drawn uniformly from
/// `0..=vertices.len() - 1`, then `k` distinct vertices are sampled without
/// replacement from the whole set. If the vertex drew itself, that entry is
/// removed, so its out-degree is `k` or `k - 1`. Edge lists keep the sampled
/// order.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randgraph_core::{generate_edges, generate_vertices};
///
/// let mut rng = SmallRng::seed_from_u64(9);
/// let vertices = generate_vertices(&mut rng, 4, 12).expect("space is large enough");
/// let graph = generate_edges(&mut rng, vertices);
/// assert_eq!(graph.vertex_count(), 4);
/// assert!(graph.validate().is_ok());
/// ```
#[instrument(
    name = "core.generate_edges",
    level = "debug",
    skip(rng, vertices),
    fields(vertices = vertices.len()),
)]
pub fn generate_edges<R: Rng + ?Sized>(rng: &mut R, vertices: VertexSet) -> Graph {
    let population = vertices.len();
    if population == 0 {
        return Graph::default();
    }

    let ordered = vertices.into_vec();
    let edges = (0..population)
        .map(|own| sample_targets(rng, &ordered, own))
        .collect();
    let graph = Graph::from_parts(ordered, edges);
    debug!(edges = graph.edge_count(), "edge generation completed");
    graph
}

fn sample_targets<R: Rng + ?Sized>(
    rng: &mut R,
    population: &[VertexId],
    own: usize,
) -> Vec<VertexId> {
    let amount = rng.gen_range(0..population.len());
    let mut picked = index::sample(rng, population.len(), amount).into_vec();
    if let Some(position) = picked.iter().position(|&candidate| candidate == own) {
        picked.remove(position);
    }
    picked
        .into_iter()
        .filter_map(|candidate| population.get(candidate).cloned())
        .collect()
}

fn random_identifier<R: Rng + ?Sized>(rng: &mut R, id_length: usize) -> VertexId {
    let text: String = (0..id_length)
        .map(|_| {
            let letter = rng.gen_range(0..ALPHABET.len());
            ALPHABET.get(letter).map_or('a', |&byte| char::from(byte))
        })
        .collect();
    VertexId::from(text)
}

pub(crate) fn check_identifier_space(count: usize, id_length: usize) -> Result<()> {
    if id_length == 0 {
        return Err(GraphError::InvalidIdLength { got: id_length });
    }
    let available = u32::try_from(id_length)
        .ok()
        .and_then(|exponent| ALPHABET.len().checked_pow(exponent));
    match available {
        Some(available) if count > available => Err(GraphError::IdentifierSpaceExhausted {
            requested: count,
            id_length,
            available,
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
