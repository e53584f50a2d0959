//! String-keyed records that grow across a chain.
//!
//! [`Record`] is the structural value that [`add_data`](crate::action::add_data)
//! accumulates onto and that contexts are usually made of. Records merge with
//! key-union-with-override semantics through [`Merge`](crate::traits::Merge):
//! keys from the right-hand side win, keys only on the left are preserved.

use core::fmt;
use core::slice;
use std::borrow::Cow;

use smallvec::SmallVec;

type Field<T> = (Cow<'static, str>, T);

/// Inline storage for the fields of a [`Record`].
///
/// Most records built along a chain hold a handful of fields, so up to four
/// are kept inline before spilling to the heap.
pub type FieldVec<T> = SmallVec<[Field<T>; 4]>;

/// An insertion-ordered record of named values.
///
/// Keys are unique: inserting an existing key replaces its value in place.
/// Equality ignores key order.
///
/// # Examples
///
/// ```
/// use chain_rail::{record, Merge, Record};
///
/// let user = record! { "id" => 7, "score" => 10 };
/// let update = record! { "score" => 12, "rank" => 1 };
///
/// let merged: Record<i32> = user.merge(update);
/// assert_eq!(merged.get("id"), Some(&7));
/// assert_eq!(merged.get("score"), Some(&12));
/// assert_eq!(merged.get("rank"), Some(&1));
/// ```
#[derive(Clone)]
pub struct Record<T> {
    fields: FieldVec<T>,
}

impl<T> Record<T> {
    /// Creates an empty record.
    #[inline]
    pub fn new() -> Self {
        Self { fields: SmallVec::new() }
    }

    /// Adds a field and returns the record, for builder-style construction.
    #[inline]
    pub fn with<K>(mut self, key: K, value: T) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        self.insert(key, value);
        self
    }

    /// Inserts a field, returning the value it replaced.
    ///
    /// A replaced field keeps its original position.
    pub fn insert<K>(&mut self, key: K, value: T) -> Option<T>
    where
        K: Into<Cow<'static, str>>,
    {
        let key = key.into();
        match self.position(&key) {
            Some(index) => Some(core::mem::replace(&mut self.fields[index].1, value)),
            None => {
                self.fields.push((key, value));
                None
            },
        }
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.position(key).map(|index| &self.fields[index].1)
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        let index = self.position(key)?;
        Some(&mut self.fields[index].1)
    }

    /// Returns the value stored under `key`, or a [`MissingField`] error naming it.
    ///
    /// Handy inside step callbacks, where the error can be converted into the
    /// chain's error type with `?` or `map_err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chain_rail::record;
    ///
    /// let config = record! { "database_url" => "postgres://localhost:5432" };
    /// assert!(config.require("database_url").is_ok());
    /// assert_eq!(config.require("cache_url").unwrap_err().key(), "cache_url");
    /// ```
    pub fn require(&self, key: &str) -> Result<&T, MissingField> {
        self.get(key).ok_or_else(|| MissingField::new(key.to_owned()))
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.position(key)?;
        Some(self.fields.remove(index).1)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over fields in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.fields.iter() }
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_ref())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.fields.iter().map(|(_, value)| value)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.fields.iter().position(|(k, _)| k.as_ref() == key)
    }
}

impl<T> Default for Record<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Record<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Record<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<T: Eq> Eq for Record<T> {}

impl<K, T> FromIterator<(K, T)> for Record<T>
where
    K: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<K, T> Extend<(K, T)> for Record<T>
where
    K: Into<Cow<'static, str>>,
{
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T> IntoIterator for Record<T> {
    type Item = Field<T>;
    type IntoIter = smallvec::IntoIter<[Field<T>; 4]>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Record<T> {
    type Item = (&'a str, &'a T);
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the fields of a [`Record`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Field<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (&'a str, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (key.as_ref(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Error returned by [`Record::require`] when a key is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingField {
    key: Cow<'static, str>,
}

impl MissingField {
    #[inline]
    pub fn new<K>(key: K) -> Self
    where
        K: Into<Cow<'static, str>>,
    {
        Self { key: key.into() }
    }

    /// The key that was looked up.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing field `{}`", self.key)
    }
}

impl std::error::Error for MissingField {}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Record;

    impl<T: Serialize> Serialize for Record<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.iter())
        }
    }

    struct RecordVisitor<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for RecordVisitor<T> {
        type Value = Record<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map with string keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut record = Record::new();
            while let Some((key, value)) = access.next_entry::<String, T>()? {
                record.insert(key, value);
            }
            Ok(record)
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Record<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(RecordVisitor(PhantomData))
        }
    }
}
