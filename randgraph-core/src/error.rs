//! Error types for the randgraph core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::{collections::TryReserveError, fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while generating, writing, or reading graphs.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
    /// Vertex identifiers must contain at least one character.
    #[error("identifier length must be at least 1 (got {got})")]
    InvalidIdLength {
        /// The invalid length supplied by the caller.
        got: usize,
    },
    /// More vertices were requested than distinct identifiers exist.
    #[error(
        "cannot draw {requested} distinct identifiers of length {id_length}; only {available} exist"
    )]
    IdentifierSpaceExhausted {
        /// Number of vertices requested.
        requested: usize,
        /// Configured identifier length.
        id_length: usize,
        /// Number of distinct identifiers of that length.
        available: usize,
    },
    /// The duplicate-rejection loop ran out of draws.
    #[error("gave up after {draws} draws with {accepted} of {requested} distinct identifiers")]
    RetryBudgetExhausted {
        /// Number of vertices requested.
        requested: usize,
        /// Distinct identifiers collected before giving up.
        accepted: usize,
        /// Total draws performed.
        draws: usize,
    },
    /// Storage for the requested vertices could not be reserved.
    #[error("cannot reserve storage for {requested} vertices: {source}")]
    CapacityExhausted {
        /// Number of vertices requested.
        requested: usize,
        /// Allocation failure reported by the collection.
        #[source]
        source: TryReserveError,
    },
    /// Opening, reading, or writing a fixture file failed.
    #[error("i/o failure on `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading from or writing to an in-memory stream failed.
    #[error("stream i/o failure: {source}")]
    Stream {
        /// Underlying i/o error.
        #[from]
        source: io::Error,
    },
    /// A fixture line could not be parsed.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// Short description of the problem.
        reason: &'static str,
    },
    /// A vertex line appeared after the edge section had started.
    #[error("line {line}: vertex `{vertex}` declared after the first edge")]
    VertexAfterEdges {
        /// One-based line number.
        line: usize,
        /// Offending vertex identifier.
        vertex: String,
    },
    /// A vertex was declared twice.
    #[error("line {line}: vertex `{vertex}` declared more than once")]
    DuplicateVertex {
        /// One-based line number.
        line: usize,
        /// Offending vertex identifier.
        vertex: String,
    },
    /// An edge referenced a vertex that was never declared.
    #[error("line {line}: edge references undeclared vertex `{vertex}`")]
    UnknownVertex {
        /// One-based line number.
        line: usize,
        /// Undeclared vertex identifier.
        vertex: String,
    },
    /// A vertex lists itself as an out-edge.
    #[error("vertex `{vertex}` has a self-loop")]
    SelfLoop {
        /// Vertex with the self-loop.
        vertex: String,
    },
    /// An edge points outside the vertex set.
    #[error("edge `{source_vertex},{target}` points outside the vertex set")]
    DanglingEdge {
        /// Source of the dangling edge.
        source_vertex: String,
        /// Target missing from the vertex set.
        target: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Vertex identifiers must contain at least one character.
        InvalidIdLength => InvalidIdLength { .. } => "GRAPH_INVALID_ID_LENGTH",
        /// More vertices were requested than distinct identifiers exist.
        IdentifierSpaceExhausted => IdentifierSpaceExhausted { .. } => "GRAPH_IDENTIFIER_SPACE_EXHAUSTED",
        /// The duplicate-rejection loop ran out of draws.
        RetryBudgetExhausted => RetryBudgetExhausted { .. } => "GRAPH_RETRY_BUDGET_EXHAUSTED",
        /// Storage for the requested vertices could not be reserved.
        CapacityExhausted => CapacityExhausted { .. } => "GRAPH_CAPACITY_EXHAUSTED",
        /// Opening, reading, or writing a fixture file failed.
        Io => Io { .. } => "GRAPH_IO",
        /// Reading from or writing to an in-memory stream failed.
        Stream => Stream { .. } => "GRAPH_STREAM_IO",
        /// A fixture line could not be parsed.
        MalformedLine => MalformedLine { .. } => "GRAPH_MALFORMED_LINE",
        /// A vertex line appeared after the edge section had started.
        VertexAfterEdges => VertexAfterEdges { .. } => "GRAPH_VERTEX_AFTER_EDGES",
        /// A vertex was declared twice.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge referenced a vertex that was never declared.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// A vertex lists itself as an out-edge.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge points outside the vertex set.
        DanglingEdge => DanglingEdge { .. } => "GRAPH_DANGLING_EDGE",
    }
}

impl GraphError {
    /// Attach `path` to a stream failure so callers see which file broke.
    pub(crate) fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Stream { source } => Self::Io {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}

/// Convenient result alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
