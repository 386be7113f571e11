//! Collecting into maps.
//!
//! Later pairs overwrite earlier ones with the same key.

use std::hash::Hash;

use super::HashMap;
use crate::sequence::{Seq, Seq2};

impl<T: 'static> Seq<T> {
    /// Collects one traversal into a map, deriving key and value from every
    /// element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let lengths = Seq::from_vec(vec!["one", "three"]).to_map_as(|word| *word, |word| word.len());
    /// assert_eq!(lengths.get("three"), Some(&5));
    /// ```
    pub fn to_map_as<K, V, KF, VF>(&self, key: KF, value: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: Fn(&T) -> K,
        VF: Fn(&T) -> V,
    {
        let mut map = HashMap::default();
        self.for_each(|element| {
            map.insert(key(&element), value(&element));
        });
        map
    }
}

impl<K: 'static, V: 'static> Seq2<K, V> {
    /// Collects one traversal into a map.
    pub fn to_map(&self) -> HashMap<K, V>
    where
        K: Eq + Hash,
    {
        let mut map = HashMap::default();
        self.for_each(|key, value| {
            map.insert(key, value);
        });
        map
    }

    /// Collects one traversal into a map, deriving a new key and value from
    /// every pair.
    pub fn to_map_as<K2, V2, KF, VF>(&self, key: KF, value: VF) -> HashMap<K2, V2>
    where
        K2: Eq + Hash,
        KF: Fn(&K, &V) -> K2,
        VF: Fn(&K, &V) -> V2,
    {
        let mut map = HashMap::default();
        self.for_each(|first, second| {
            map.insert(key(&first, &second), value(&first, &second));
        });
        map
    }
}
