//! Cascade resolution over document paths.
//!
//! [`CascadeResolver`] computes the effective style set for a node from
//! its root-to-node [`DocumentPath`] by successive override: the parent
//! path's effective set is resolved first, then the rules matching the
//! final segment are unioned in precedence order and applied over it,
//! category by category.
//!
//! Resolution is memoized per path. The cache is never invalidated, which
//! is sound only because a [`Stylesheet`] is immutable for the lifetime of
//! the resolver that owns it. Never share a resolver across stylesheets;
//! construct a new one instead.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;

use crate::selector::Selector;
use crate::stylesheet::Stylesheet;
use crate::types::property::StyleSet;

/// Element name of the synthetic root wrapped around every document.
pub const SYNTHETIC_ROOT: &str = "root";

/// One step of a document path: an element name plus its class token
/// (empty when the element carries no `class` attribute).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub element: String,
    pub class: String,
}

impl PathSegment {
    pub fn new(element: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            class: class.into(),
        }
    }
}

/// A root-to-node chain of path segments; the cascade's resolution key.
///
/// Paths compare and hash structurally, so two independently built paths
/// with equal `(element, class)` sequences share cache entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentPath {
    segments: SmallVec<[PathSegment; 8]>,
}

impl DocumentPath {
    /// An empty path. Pushing segments builds it up; resolving it
    /// directly is a contract violation.
    pub fn new() -> Self {
        Self::default()
    }

    /// A path holding only the synthetic root segment.
    pub fn root() -> Self {
        let mut path = Self::new();
        path.push(SYNTHETIC_ROOT, "");
        path
    }

    pub fn push(&mut self, element: impl Into<String>, class: impl Into<String>) {
        self.segments.push(PathSegment::new(element, class));
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<&[PathSegment]> for DocumentPath {
    fn from(segments: &[PathSegment]) -> Self {
        Self {
            segments: SmallVec::from(segments),
        }
    }
}

// Hash must agree with the `Borrow<[PathSegment]>` lookup key below, so
// delegate to the slice rather than deriving.
impl Hash for DocumentPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.segments[..].hash(state);
    }
}

impl Borrow<[PathSegment]> for DocumentPath {
    fn borrow(&self) -> &[PathSegment] {
        &self.segments
    }
}

/// Resolves effective style sets for document paths, memoized per path.
///
/// The cache is populated lazily, grows monotonically with distinct paths
/// seen, and is never evicted; recursion depth equals path length, which
/// is bounded by document nesting depth. Discard the resolver (rather
/// than reusing it across unrelated documents) if cache growth is a
/// concern.
pub struct CascadeResolver {
    stylesheet: Stylesheet,
    cache: HashMap<DocumentPath, StyleSet>,
}

impl CascadeResolver {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self {
            stylesheet,
            cache: HashMap::new(),
        }
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Compute the effective style set for `path`.
    ///
    /// Absent selectors contribute nothing; resolution has no error
    /// conditions.
    ///
    /// # Panics
    ///
    /// Panics when `path` is empty: every resolvable path starts at the
    /// synthetic root segment.
    pub fn resolve(&mut self, path: &DocumentPath) -> StyleSet {
        assert!(!path.is_empty(), "cannot resolve an empty document path");
        self.resolve_segments(path.segments())
    }

    fn resolve_segments(&mut self, segments: &[PathSegment]) -> StyleSet {
        if let Some(cached) = self.cache.get(segments) {
            return cached.clone();
        }

        let resolved = if segments.len() == 1 {
            self.stylesheet
                .get(&Selector::Universal)
                .cloned()
                .unwrap_or_default()
        } else {
            let (prefix, last) = segments.split_at(segments.len() - 1);
            let last = &last[0];

            let mut effective = self.resolve_segments(prefix);
            let mut overrides = StyleSet::new();
            for selector in override_selectors(prefix, last) {
                if let Some(rule) = self.stylesheet.get(&selector) {
                    overrides.merge(rule);
                }
            }
            effective.merge(&overrides);
            effective
        };

        log::trace!(
            "cascade: depth {} <{}> -> {} properties",
            segments.len(),
            segments[segments.len() - 1].element,
            resolved.len()
        );
        self.cache.insert(DocumentPath::from(segments), resolved.clone());
        resolved
    }
}

/// Candidate selectors for the final path segment, in precedence order:
/// element, class, element.class, then the parent-element descendant
/// pair. Later entries override earlier ones per category.
fn override_selectors(prefix: &[PathSegment], last: &PathSegment) -> Vec<Selector> {
    let mut selectors = Vec::with_capacity(4);
    selectors.push(Selector::Element(last.element.clone()));
    if !last.class.is_empty() {
        selectors.push(Selector::Class(last.class.clone()));
        selectors.push(Selector::ElementClass(
            last.element.clone(),
            last.class.clone(),
        ));
    }
    if let Some(parent) = prefix.last() {
        selectors.push(Selector::Descendant(
            parent.element.clone(),
            last.element.clone(),
        ));
    }
    selectors
}
