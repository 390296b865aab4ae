//! Vertex identifiers and the insertion-ordered vertex set.

use std::{
    borrow::Borrow,
    collections::{HashSet, TryReserveError},
    fmt,
    sync::Arc,
};

/// Characters vertex identifiers are drawn from.
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Identifier of a single vertex.
///
/// Generated identifiers are fixed-length lowercase strings. Identifiers read
/// back from a fixture file may be any non-empty text without commas.
///
/// # Examples
/// ```
/// use randgraph_core::VertexId;
///
/// let vertex = VertexId::from("qwertyuiopas");
/// assert_eq!(vertex.as_str(), "qwertyuiopas");
/// assert_eq!(vertex.to_string(), "qwertyuiopas");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(Arc<str>);

impl VertexId {
    /// Borrow the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for VertexId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of distinct vertices that remembers insertion order.
///
/// The declared capacity is the number of vertices the set is expected to
/// hold; generation stops once [`VertexSet::is_full`] reports `true`.
///
/// # Examples
/// ```
/// use randgraph_core::{VertexId, VertexSet};
///
/// let mut set = VertexSet::with_capacity(2);
/// assert!(set.insert(VertexId::from("b")));
/// assert!(!set.insert(VertexId::from("b")));
/// assert!(set.insert(VertexId::from("a")));
/// assert!(set.is_full());
/// let order: Vec<&str> = set.iter().map(VertexId::as_str).collect();
/// assert_eq!(order, ["b", "a"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexSet {
    ordered: Vec<VertexId>,
    members: HashSet<VertexId>,
    capacity: usize,
}

impl VertexSet {
    /// Creates an empty set sized for `capacity` vertices.
    ///
    /// # Panics
    /// Panics if storage for `capacity` vertices cannot be allocated. Use
    /// [`VertexSet::try_with_capacity`] for caller-supplied sizes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ordered: Vec::with_capacity(capacity),
            members: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Creates an empty set sized for `capacity` vertices, reporting
    /// allocation failure instead of aborting.
    ///
    /// # Errors
    /// Returns [`TryReserveError`] when `capacity` vertices do not fit in
    /// memory or overflow the allocator's size limit.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::VertexSet;
    ///
    /// assert!(VertexSet::try_with_capacity(usize::MAX).is_err());
    /// let set = VertexSet::try_with_capacity(4).expect("small sets fit");
    /// assert_eq!(set.capacity(), 4);
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut ordered = Vec::new();
        ordered.try_reserve_exact(capacity)?;
        let mut members = HashSet::new();
        members.try_reserve(capacity)?;
        Ok(Self {
            ordered,
            members,
            capacity,
        })
    }

    /// Adds `vertex`, returning `false` when it was already present.
    pub fn insert(&mut self, vertex: VertexId) -> bool {
        if !self.members.insert(vertex.clone()) {
            return false;
        }
        self.ordered.push(vertex);
        true
    }

    /// Returns whether `vertex` is a member.
    #[must_use]
    pub fn contains(&self, vertex: &VertexId) -> bool {
        self.members.contains(vertex)
    }

    /// Number of vertices held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Returns `true` when the set holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Declared capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` once the set holds at least its declared capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ordered.len() >= self.capacity
    }

    /// Iterates vertices in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, VertexId> {
        self.ordered.iter()
    }

    /// Vertices in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.ordered
    }

    pub(crate) fn into_vec(self) -> Vec<VertexId> {
        self.ordered
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a VertexId;
    type IntoIter = std::slice::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
