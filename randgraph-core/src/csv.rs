//! Two-section CSV serialization.
//!
//! The first section lists every vertex on its own line; the second lists
//! every edge as `source,target`, grouped by source vertex. There is no header
//! and no quoting: identifiers never contain commas.

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use tracing::{Span, field, info, instrument};

use crate::{
    error::{GraphError, Result},
    graph::Graph,
    vertex::VertexId,
};

/// Writes `graph` to `writer` in the fixture format.
///
/// # Errors
/// Returns [`GraphError::Stream`] if the writer fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use randgraph_core::{read_graph, write_graph};
///
/// let graph = read_graph(Cursor::new("x\ny\nx,y\n")).expect("fixture parses");
/// let mut buffer = Vec::new();
/// write_graph(&graph, &mut buffer).expect("writing to memory succeeds");
/// assert_eq!(buffer, b"x\ny\nx,y\n");
/// ```
pub fn write_graph(graph: &Graph, mut writer: impl Write) -> Result<()> {
    for vertex in graph.vertices() {
        writeln!(writer, "{vertex}")?;
    }
    for (source, target) in graph.edges() {
        writeln!(writer, "{source},{target}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates or truncates `path` and writes `graph` into it.
///
/// The file handle is released when this function returns, whether or not the
/// write succeeded. Missing parent directories are not created.
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be created or written.
#[instrument(
    name = "core.write_graph",
    err,
    skip(graph, path),
    fields(path = %path.as_ref().display(), vertices = graph.vertex_count()),
)]
pub fn write_graph_to_path(graph: &Graph, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_graph(graph, BufWriter::new(file)).map_err(|err| err.at_path(path))?;
    info!(edges = graph.edge_count(), "graph written");
    Ok(())
}

/// Parses a fixture from `reader`.
///
/// Lines without a comma declare vertices, lines with one comma declare edges.
/// All vertex lines must precede the first edge, and edges may only reference
/// declared vertices. Trailing `\r` characters are ignored.
///
/// # Errors
/// Returns [`GraphError::MalformedLine`], [`GraphError::VertexAfterEdges`],
/// [`GraphError::DuplicateVertex`], or [`GraphError::UnknownVertex`] with the
/// one-based line number of the offending line, or [`GraphError::Stream`] if
/// reading fails.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use randgraph_core::{GraphError, read_graph};
///
/// let err = read_graph(Cursor::new("x\nx,y\n")).expect_err("y is undeclared");
/// assert!(matches!(err, GraphError::UnknownVertex { line: 2, .. }));
/// ```
pub fn read_graph(reader: impl BufRead) -> Result<Graph> {
    let mut parser = FixtureParser::default();
    for (offset, line) in reader.lines().enumerate() {
        parser.push(offset + 1, &line?)?;
    }
    Ok(parser.finish())
}

/// Opens `path` and parses it with [`read_graph`].
///
/// # Errors
/// Returns [`GraphError::Io`] if the file cannot be opened or read, and the
/// parse errors documented on [`read_graph`].
#[instrument(
    name = "core.read_graph",
    err,
    skip(path),
    fields(path = %path.as_ref().display(), vertices = field::Empty, edges = field::Empty),
)]
pub fn read_graph_from_path(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_graph(BufReader::new(file)).map_err(|err| err.at_path(path))?;
    let span = Span::current();
    span.record("vertices", graph.vertex_count());
    span.record("edges", graph.edge_count());
    Ok(graph)
}

#[derive(Default)]
struct FixtureParser {
    vertices: Vec<VertexId>,
    edges: Vec<Vec<VertexId>>,
    positions: HashMap<VertexId, usize>,
    in_edge_section: bool,
}

impl FixtureParser {
    fn push(&mut self, line: usize, raw: &str) -> Result<()> {
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        if text.is_empty() {
            return Err(GraphError::MalformedLine {
                line,
                reason: "empty line",
            });
        }

        let mut fields = text.split(',');
        match (fields.next(), fields.next(), fields.next()) {
            (Some(vertex), None, _) => self.declare(line, vertex),
            (Some(source), Some(target), None) => self.connect(line, source, target),
            _ => Err(GraphError::MalformedLine {
                line,
                reason: "expected a vertex or a `source,target` pair",
            }),
        }
    }

    fn declare(&mut self, line: usize, vertex: &str) -> Result<()> {
        if self.in_edge_section {
            return Err(GraphError::VertexAfterEdges {
                line,
                vertex: vertex.to_owned(),
            });
        }
        if self.positions.contains_key(vertex) {
            return Err(GraphError::DuplicateVertex {
                line,
                vertex: vertex.to_owned(),
            });
        }
        let id = VertexId::from(vertex);
        self.positions.insert(id.clone(), self.vertices.len());
        self.vertices.push(id);
        self.edges.push(Vec::new());
        Ok(())
    }

    fn connect(&mut self, line: usize, source: &str, target: &str) -> Result<()> {
        if source.is_empty() || target.is_empty() {
            return Err(GraphError::MalformedLine {
                line,
                reason: "edge endpoints must not be empty",
            });
        }
        self.in_edge_section = true;

        let unknown = |vertex: &str| GraphError::UnknownVertex {
            line,
            vertex: vertex.to_owned(),
        };
        let source_position = *self.positions.get(source).ok_or_else(|| unknown(source))?;
        let (target_id, _) = self
            .positions
            .get_key_value(target)
            .ok_or_else(|| unknown(target))?;
        let target_id = target_id.clone();
        if let Some(targets) = self.edges.get_mut(source_position) {
            targets.push(target_id);
        }
        Ok(())
    }

    fn finish(self) -> Graph {
        Graph::from_parts(self.vertices, self.edges)
    }
}
