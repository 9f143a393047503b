//! Case-insensitive ordered maps.

use indexmap::IndexMap;
use indexmap::map::Entry;
use smol_str::SmolStr;

/// An ordered mapping with case-insensitive key normalization.
///
/// Keys compare equal regardless of case: `"Users"` and `"users"` address
/// the same slot. The display casing of the first insert is kept; a later
/// insert under an equal key overwrites the value (last-insert-wins, no
/// merge). Iteration yields entries in first-insertion order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CiMap<V> {
    /// Folded key → (display key, value)
    inner: IndexMap<SmolStr, (SmolStr, V)>,
}

impl<V> CiMap<V> {
    /// Create a new empty map.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    fn fold(key: &str) -> SmolStr {
        SmolStr::from(key.to_lowercase())
    }

    /// Insert `value` under `key`.
    ///
    /// A key equal under case folding overwrites the existing value but
    /// keeps its first-seen display casing and position. Returns the
    /// replaced value, if any.
    pub fn insert(&mut self, key: &str, value: V) -> Option<V> {
        match self.inner.entry(Self::fold(key)) {
            Entry::Occupied(mut entry) => Some(std::mem::replace(&mut entry.get_mut().1, value)),
            Entry::Vacant(entry) => {
                entry.insert((SmolStr::from(key), value));
                None
            }
        }
    }

    /// Get the value for `key`, or insert one built by `make` first.
    pub fn get_or_insert_with(&mut self, key: &str, make: impl FnOnce() -> V) -> &mut V {
        &mut self
            .inner
            .entry(Self::fold(key))
            .or_insert_with(|| (SmolStr::from(key), make()))
            .1
    }

    /// Look up a value by key, case-insensitively.
    pub fn get(&self, key: &str) -> Option<&V> {
        let folded = key.to_lowercase();
        self.inner.get(folded.as_str()).map(|(_, v)| v)
    }

    /// Check whether a key is present, case-insensitively.
    pub fn contains_key(&self, key: &str) -> bool {
        let folded = key.to_lowercase();
        self.inner.contains_key(folded.as_str())
    }

    /// Iterate entries in insertion order with their display keys.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.inner.values().map(|(k, v)| (k.as_str(), v))
    }

    /// Consume the map, yielding (display key, value) in insertion order.
    pub fn into_entries(self) -> impl Iterator<Item = (SmolStr, V)> {
        self.inner.into_values()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<V> Default for CiMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
