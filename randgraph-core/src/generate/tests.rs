//! Unit and property tests for vertex and edge generation.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::{RngCore, SeedableRng, rngs::SmallRng};
use randgraph_test_support::property::proptest_cases;
use rstest::rstest;

use super::*;

/// Always yields zero, so every identifier draw after the first collides.
struct ConstantRng;

impl RngCore for ConstantRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[rstest]
fn zero_vertices_yield_empty_set() {
    let mut rng = SmallRng::seed_from_u64(0);
    let vertices = generate_vertices(&mut rng, 0, 12).expect("empty request must succeed");
    assert!(vertices.is_empty());
    assert!(generate_edges(&mut rng, vertices).is_empty());
}

#[rstest]
fn single_vertex_has_no_edges() {
    let mut rng = SmallRng::seed_from_u64(3);
    let vertices = generate_vertices(&mut rng, 1, 12).expect("single vertex must succeed");
    let graph = generate_edges(&mut rng, vertices);
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 0);
}

#[rstest]
#[case::one_letter(1, 26)]
#[case::two_letters(2, 676)]
fn whole_identifier_space_can_be_drawn(#[case] id_length: usize, #[case] count: usize) {
    let mut rng = SmallRng::seed_from_u64(11);
    let vertices =
        generate_vertices(&mut rng, count, id_length).expect("space exactly fits the request");
    assert_eq!(vertices.len(), count);
}

#[rstest]
fn rejects_zero_identifier_length() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_vertices(&mut rng, 1, 0).expect_err("zero length must fail");
    assert!(matches!(err, GraphError::InvalidIdLength { got: 0 }));
}

#[rstest]
fn rejects_requests_larger_than_identifier_space() {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_vertices(&mut rng, 27, 1).expect_err("27 one-letter ids cannot exist");
    assert!(matches!(
        err,
        GraphError::IdentifierSpaceExhausted {
            requested: 27,
            id_length: 1,
            available: 26,
        }
    ));
}

#[rstest]
fn retry_budget_bounds_duplicate_draws() {
    let err = generate_vertices(&mut ConstantRng, 2, 12).expect_err("constant draws repeat");
    assert!(matches!(
        err,
        GraphError::RetryBudgetExhausted {
            requested: 2,
            accepted: 1,
            draws,
        } if draws == 2 * MAX_DRAWS_PER_VERTEX
    ));
}

#[rstest]
#[case::overflowing_request(usize::MAX, 14)]
#[case::unallocatable_request(1_usize << 58, 14)]
fn oversized_requests_fail_instead_of_aborting(#[case] count: usize, #[case] id_length: usize) {
    let mut rng = SmallRng::seed_from_u64(0);
    let err = generate_vertices(&mut rng, count, id_length).expect_err("storage cannot fit");
    assert!(
        matches!(err, GraphError::CapacityExhausted { requested, .. } if requested == count),
        "unexpected error: {err:?}"
    );
}

#[rstest]
fn seeded_generation_is_reproducible() {
    let build = || {
        let mut rng = SmallRng::seed_from_u64(5);
        let vertices = generate_vertices(&mut rng, 5, 12).expect("generation must succeed");
        generate_edges(&mut rng, vertices)
    };
    assert_eq!(build(), build());
}

#[rstest]
fn sampled_self_loop_is_removed() {
    // With two vertices `k` is 0 or 1; across seeds both vertices eventually
    // draw themselves, which must never survive.
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertices = generate_vertices(&mut rng, 2, 12).expect("generation must succeed");
        let graph = generate_edges(&mut rng, vertices);
        for (source, targets) in graph.iter() {
            assert!(!targets.contains(source), "seed {seed} kept a self-loop");
        }
    }
}

/// Mean out-degree over many graphs of `population` vertices.
fn mean_out_degree(population: usize, graphs: usize, seed: u64) -> f64 {
    let mut rng = SmallRng::seed_from_u64(seed);
    let vertices = generate_vertices(&mut rng, population, 12).expect("generation must succeed");
    let edges: usize = (0..graphs)
        .map(|_| generate_edges(&mut rng, vertices.clone()).edge_count())
        .sum();
    edges as f64 / (graphs * population) as f64
}

// `k` is uniform on `0..n` and the vertex itself is among the `k` picks with
// probability `k / n`, so the expected out-degree is `(n - 1)^2 / 2n`. Drawing
// only from the other vertices would give `(n - 1) / 2` instead: 0.5 and 2.0
// for the cases below.
#[rstest]
#[case::pair(2, 0.25)]
#[case::five(5, 1.6)]
fn own_vertex_is_sampled_then_dropped(#[case] population: usize, #[case] expected: f64) {
    let mean = mean_out_degree(population, 4_000, 2024);
    assert!(
        (mean - expected).abs() < 0.06,
        "mean out-degree {mean} for {population} vertices, expected about {expected}"
    );
}

#[rstest]
fn pair_reaches_each_out_degree() {
    let mut rng = SmallRng::seed_from_u64(77);
    let vertices = generate_vertices(&mut rng, 2, 12).expect("generation must succeed");
    let mut degrees = [0_usize; 2];
    for _ in 0..2_000 {
        let graph = generate_edges(&mut rng, vertices.clone());
        for (_, targets) in graph.iter() {
            match degrees.get_mut(targets.len()) {
                Some(slot) => *slot += 1,
                None => panic!("out-degree {} exceeds |V| - 1", targets.len()),
            }
        }
    }
    // Degree 1 needs `k == 1` and the other vertex picked: one case in four.
    let [zero, one] = degrees;
    assert!(one > 800 && one < 1_200, "degree one seen {one} times");
    assert_eq!(zero + one, 4_000);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(proptest_cases(64)))]

    #[test]
    fn vertices_are_distinct_lowercase_and_fixed_length(seed in any::<u64>(), count in 0_usize..64) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertices = generate_vertices(&mut rng, count, 12).expect("generation must succeed");
        prop_assert_eq!(vertices.len(), count);
        let distinct: HashSet<&VertexId> = vertices.iter().collect();
        prop_assert_eq!(distinct.len(), count);
        for vertex in &vertices {
            prop_assert_eq!(vertex.as_str().len(), 12);
            prop_assert!(vertex.as_str().bytes().all(|byte| byte.is_ascii_lowercase()));
        }
    }

    #[test]
    fn generated_edges_respect_graph_invariants(seed in any::<u64>(), count in 0_usize..40) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let vertices = generate_vertices(&mut rng, count, 12).expect("generation must succeed");
        let graph = generate_edges(&mut rng, vertices);
        prop_assert_eq!(graph.vertex_count(), count);
        prop_assert!(graph.validate().is_ok());
        for (_, targets) in graph.iter() {
            prop_assert!(targets.len() < count.max(1));
            let distinct: HashSet<&VertexId> = targets.iter().collect();
            prop_assert_eq!(distinct.len(), targets.len());
        }
    }
}
