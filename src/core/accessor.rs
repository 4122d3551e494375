use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::core::Datum;

type ExtractFn<T> = dyn Fn(&T) -> Datum + Send + Sync + 'static;

/// Pure function that pulls one [`Datum`] out of a data object.
///
/// Accessors never fail: an unresolvable path yields `Datum::Undefined` for
/// every item so one bad series cannot take the chart down.
pub struct Accessor<T> {
    source_path: Option<Arc<str>>,
    extract: Arc<ExtractFn<T>>,
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            source_path: self.source_path.clone(),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("source_path", &self.source_path)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Accessor<T> {
    /// Wraps a pre-resolved extraction function.
    pub fn from_fn<F>(extract: F) -> Self
    where
        F: Fn(&T) -> Datum + Send + Sync + 'static,
    {
        Self {
            source_path: None,
            extract: Arc::new(extract),
        }
    }

    /// Accessor injected when nothing is configured: always `Undefined`.
    #[must_use]
    pub fn undefined() -> Self {
        Self::from_fn(|_| Datum::Undefined)
    }
}

impl<T> Accessor<T> {
    #[must_use]
    pub fn get(&self, item: &T) -> Datum {
        (self.extract)(item)
    }

    /// Path expression this accessor was compiled from, if any.
    #[must_use]
    pub fn source_path(&self) -> Option<&str> {
        self.source_path.as_deref()
    }
}

impl Accessor<Value> {
    /// Compiles a dotted property path (`"stats.values.0"`) for JSON objects.
    ///
    /// Numeric segments index into arrays. An empty path compiles to
    /// [`Accessor::undefined`].
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Self::undefined();
        }

        let segments: Arc<[Box<str>]> = trimmed
            .split('.')
            .map(|segment| segment.trim().into())
            .collect();
        Self {
            source_path: Some(trimmed.into()),
            extract: Arc::new(move |item: &Value| {
                resolve_path(item, &segments).map_or(Datum::Undefined, Datum::from_json)
            }),
        }
    }
}

fn resolve_path<'a>(root: &'a Value, segments: &[Box<str>]) -> Option<&'a Value> {
    segments.iter().try_fold(root, |node, segment| match node {
        Value::Object(map) => map.get(segment.as_ref()),
        Value::Array(items) => segment
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get(index)),
        _ => None,
    })
}
