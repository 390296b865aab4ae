//! Integration tests covering fixture files written to and read from disk.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use randgraph_core::{
    GeneratorBuilder, Graph, GraphError, VertexId, read_graph_from_path, write_graph_to_path,
};
use randgraph_test_support::property::proptest_cases;
use rstest::{fixture, rstest};
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn workspace() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

fn generate(vertices: usize, seed: u64) -> Result<Graph, GraphError> {
    GeneratorBuilder::new()
        .with_vertex_count(vertices)
        .with_seed(seed)
        .build()?
        .generate()
}

fn edge_relation(graph: &Graph) -> HashSet<(VertexId, VertexId)> {
    graph
        .edges()
        .map(|(source, target)| (source.clone(), target.clone()))
        .collect()
}

#[rstest]
#[case::empty(0, 0)]
#[case::single(1, 1)]
fn small_graphs_write_expected_line_counts(
    workspace: TempDir,
    #[case] vertices: usize,
    #[case] lines: usize,
) -> TestResult {
    let path = workspace.path().join("graph.csv");
    write_graph_to_path(&generate(vertices, 17)?, &path)?;
    let contents = fs::read_to_string(&path)?;
    assert_eq!(contents.lines().count(), lines);
    Ok(())
}

#[rstest]
fn written_fixture_reads_back_as_same_graph(workspace: TempDir) -> TestResult {
    let graph = generate(25, 99)?;
    let path = workspace.path().join("graph.csv");
    write_graph_to_path(&graph, &path)?;

    let restored = read_graph_from_path(&path)?;
    let original: HashSet<&VertexId> = graph.vertices().iter().collect();
    let recovered: HashSet<&VertexId> = restored.vertices().iter().collect();
    assert_eq!(original, recovered);
    assert_eq!(edge_relation(&graph), edge_relation(&restored));
    assert!(restored.validate().is_ok());
    Ok(())
}

#[rstest]
fn writing_twice_is_byte_identical(workspace: TempDir) -> TestResult {
    let graph = generate(12, 5)?;
    let path = workspace.path().join("graph.csv");
    write_graph_to_path(&graph, &path)?;
    let first = fs::read(&path)?;
    write_graph_to_path(&graph, &path)?;
    let second = fs::read(&path)?;
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn existing_file_is_truncated(workspace: TempDir) -> TestResult {
    let path = workspace.path().join("graph.csv");
    fs::write(&path, "stale\ncontent\nthat,is\nlonger,than\nthe,graph\n")?;
    write_graph_to_path(&generate(1, 0)?, &path)?;
    assert_eq!(fs::read_to_string(&path)?.lines().count(), 1);
    Ok(())
}

#[rstest]
fn seeded_fixtures_are_reproducible(workspace: TempDir) -> TestResult {
    let first = workspace.path().join("first.csv");
    let second = workspace.path().join("second.csv");
    write_graph_to_path(&generate(5, 31337)?, &first)?;
    write_graph_to_path(&generate(5, 31337)?, &second)?;
    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

#[rstest]
fn unwritable_path_reports_io_error(workspace: TempDir) -> TestResult {
    let path: PathBuf = workspace.path().join("missing").join("graph.csv");
    let err = write_graph_to_path(&generate(3, 1)?, &path).expect_err("parent does not exist");
    match err {
        GraphError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
fn missing_fixture_reports_io_error(workspace: TempDir) {
    let path = workspace.path().join("absent.csv");
    let err = read_graph_from_path(&path).expect_err("file does not exist");
    assert!(matches!(err, GraphError::Io { .. }));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(proptest_cases(32)))]

    #[test]
    fn vertex_section_precedes_edge_section(seed in any::<u64>(), vertices in 0_usize..30) {
        let graph = generate(vertices, seed).expect("generation must succeed");
        let mut buffer = Vec::new();
        randgraph_core::write_graph(&graph, &mut buffer).expect("in-memory write must succeed");
        let text = String::from_utf8(buffer).expect("fixture is ASCII");
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), graph.vertex_count() + graph.edge_count());
        let (head, tail) = lines.split_at(graph.vertex_count());
        prop_assert!(head.iter().all(|line| !line.contains(',')));
        prop_assert!(tail.iter().all(|line| line.matches(',').count() == 1));
    }
}
