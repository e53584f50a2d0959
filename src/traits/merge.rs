use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::types::Record;

/// Shallow, key-union-with-override merging.
///
/// `left.merge(right)` keeps every key of `left` and adds every key of `right`;
/// when both hold the same key, the value from `right` wins. Both sides are
/// consumed and a new value is produced, so no step ever observes another
/// step's data being mutated.
///
/// [`add_data`](crate::action::add_data) merges a callback's output into the
/// running value, and [`Node::add_context`](crate::chain::Node::add_context)
/// merges extra context into the current one.
///
/// `()` is the empty record: it merges with anything and yields the right-hand
/// side, and records merge with `()` unchanged.
///
/// # Implementing for typed records
///
/// ```
/// use chain_rail::traits::Merge;
///
/// struct Order { id: u64 }
/// struct Priced { total: u32 }
/// struct PricedOrder { id: u64, total: u32 }
///
/// impl Merge<Priced> for Order {
///     type Output = PricedOrder;
///
///     fn merge(self, rhs: Priced) -> PricedOrder {
///         PricedOrder { id: self.id, total: rhs.total }
///     }
/// }
///
/// let order = Order { id: 1 }.merge(Priced { total: 30 });
/// assert_eq!((order.id, order.total), (1, 30));
/// ```
pub trait Merge<Rhs = Self> {
    /// The merged value.
    type Output;

    /// Merges `rhs` into `self`; keys of `rhs` override keys of `self`.
    fn merge(self, rhs: Rhs) -> Self::Output;
}

impl<T> Merge<T> for () {
    type Output = T;

    #[inline]
    fn merge(self, rhs: T) -> T {
        rhs
    }
}

impl<T> Merge for Record<T> {
    type Output = Record<T>;

    #[inline]
    fn merge(mut self, rhs: Record<T>) -> Record<T> {
        self.extend(rhs);
        self
    }
}

impl<T> Merge<()> for Record<T> {
    type Output = Record<T>;

    #[inline]
    fn merge(self, _rhs: ()) -> Record<T> {
        self
    }
}

impl<K, V, S> Merge for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Output = HashMap<K, V, S>;

    #[inline]
    fn merge(mut self, rhs: HashMap<K, V, S>) -> HashMap<K, V, S> {
        self.extend(rhs);
        self
    }
}

impl<K, V, S> Merge<()> for HashMap<K, V, S> {
    type Output = HashMap<K, V, S>;

    #[inline]
    fn merge(self, _rhs: ()) -> HashMap<K, V, S> {
        self
    }
}

impl<K: Ord, V> Merge for BTreeMap<K, V> {
    type Output = BTreeMap<K, V>;

    #[inline]
    fn merge(mut self, rhs: BTreeMap<K, V>) -> BTreeMap<K, V> {
        self.extend(rhs);
        self
    }
}

impl<K, V> Merge<()> for BTreeMap<K, V> {
    type Output = BTreeMap<K, V>;

    #[inline]
    fn merge(self, _rhs: ()) -> BTreeMap<K, V> {
        self
    }
}
