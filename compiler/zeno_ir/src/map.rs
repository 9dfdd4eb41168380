//! Insertion-ordered open-addressing hash map.
//!
//! Entries live in a dense array in insertion order and are addressed by a
//! stable 1-based [`EntryId`]. A separate bucket index maps `hash % buckets`
//! to entry ids with linear probing; its element width (8, 16 or 32 bits)
//! follows the bucket count so small maps stay small.
//!
//! Removal is not supported. Ids handed out by [`IndexMap::set`] stay valid
//! until the map is [cleared](IndexMap::clear).
//!
//! The same type serves as a set: [`IndexSet<K>`] is `IndexMap<K, ()>`.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::num::NonZeroU32;

use rustc_hash::FxBuildHasher;

const INITIAL_BUCKETS: usize = 16;
const INITIAL_ENTRIES: usize = 16;

/// Stable 1-based identifier of a map entry.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct EntryId(NonZeroU32);

impl EntryId {
    #[inline]
    pub const fn from_raw(raw: NonZeroU32) -> Self {
        EntryId(raw)
    }

    #[inline]
    pub const fn raw(self) -> NonZeroU32 {
        self.0
    }

    /// Zero-based position in the entry array.
    #[inline]
    pub const fn index(self) -> usize {
        self.0.get() as usize - 1
    }

    fn from_len(len: usize) -> Self {
        match u32::try_from(len).ok().and_then(NonZeroU32::new) {
            Some(raw) => EntryId(raw),
            None => panic!("map entry count {len} does not fit an entry id"),
        }
    }
}

impl fmt::Debug for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryId({})", self.0)
    }
}

struct Entry<K, V> {
    hash: u32,
    key: K,
    value: V,
}

/// Bucket index storing entry ids (`0` = empty slot).
enum Buckets {
    Narrow(Box<[u8]>),
    Medium(Box<[u16]>),
    Wide(Box<[u32]>),
}

impl Buckets {
    fn with_count(count: usize) -> Self {
        if count < usize::from(u8::MAX) {
            Buckets::Narrow(vec![0; count].into_boxed_slice())
        } else if count < usize::from(u16::MAX) {
            Buckets::Medium(vec![0; count].into_boxed_slice())
        } else {
            Buckets::Wide(vec![0; count].into_boxed_slice())
        }
    }

    fn len(&self) -> usize {
        match self {
            Buckets::Narrow(slots) => slots.len(),
            Buckets::Medium(slots) => slots.len(),
            Buckets::Wide(slots) => slots.len(),
        }
    }

    fn width(&self) -> usize {
        match self {
            Buckets::Narrow(_) => 1,
            Buckets::Medium(_) => 2,
            Buckets::Wide(_) => 4,
        }
    }

    #[inline]
    fn get(&self, slot: usize) -> u32 {
        match self {
            Buckets::Narrow(slots) => u32::from(slots[slot]),
            Buckets::Medium(slots) => u32::from(slots[slot]),
            Buckets::Wide(slots) => slots[slot],
        }
    }

    // Ids stay below the bucket count (load factor < 75%), so they always
    // fit the current width.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn set(&mut self, slot: usize, id: u32) {
        match self {
            Buckets::Narrow(slots) => slots[slot] = id as u8,
            Buckets::Medium(slots) => slots[slot] = id as u16,
            Buckets::Wide(slots) => slots[slot] = id,
        }
    }

    fn clear(&mut self) {
        match self {
            Buckets::Narrow(slots) => slots.fill(0),
            Buckets::Medium(slots) => slots.fill(0),
            Buckets::Wide(slots) => slots.fill(0),
        }
    }
}

enum Probe {
    Occupied(EntryId),
    Vacant(usize),
}

/// Insertion-ordered map with stable entry ids.
pub struct IndexMap<K, V, S = FxBuildHasher> {
    entries: Vec<Entry<K, V>>,
    buckets: Buckets,
    hasher: S,
}

/// Set flavour of [`IndexMap`]: entries carry no value.
pub type IndexSet<K, S = FxBuildHasher> = IndexMap<K, (), S>;

impl<K, V, S: Default> IndexMap<K, V, S> {
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S: Default> Default for IndexMap<K, V, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> IndexMap<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        IndexMap {
            entries: Vec::with_capacity(INITIAL_ENTRIES),
            buckets: Buckets::with_count(INITIAL_BUCKETS),
            hasher,
        }
    }

    /// Number of entries ever inserted since the last clear.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Width in bytes of one bucket slot.
    pub fn bucket_width(&self) -> usize {
        self.buckets.width()
    }

    pub fn key_by_id(&self, id: EntryId) -> Option<&K> {
        self.entries.get(id.index()).map(|e| &e.key)
    }

    pub fn value_by_id(&self, id: EntryId) -> Option<&V> {
        self.entries.get(id.index()).map(|e| &e.value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntryId, &K, &V)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (EntryId::from_len(i + 1), &e.key, &e.value))
    }

    /// Remove every entry, keeping the allocations for reuse.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.buckets.clear();
    }

    #[inline]
    fn mask(&self) -> usize {
        self.buckets.len() - 1
    }

    fn needs_grow(&self) -> bool {
        self.buckets.len() / 4 * 3 <= self.entries.len()
    }

    /// Double the bucket index and replay every entry in id order.
    fn grow(&mut self) {
        let count = self.buckets.len() * 2;
        tracing::trace!(buckets = count, entries = self.entries.len(), "index map resize");
        self.buckets = Buckets::with_count(count);
        let mask = count - 1;
        for (i, entry) in self.entries.iter().enumerate() {
            let mut slot = entry.hash as usize & mask;
            while self.buckets.get(slot) != 0 {
                slot = (slot + 1) & mask;
            }
            self.buckets.set(slot, EntryId::from_len(i + 1).raw().get());
        }
    }

    /// Grow the entry array by half its capacity when full.
    fn reserve_entry(&mut self) {
        if self.entries.len() == self.entries.capacity() {
            let extra = (self.entries.capacity() / 2).max(1);
            self.entries.reserve_exact(extra);
        }
    }

    fn push_entry(&mut self, slot: usize, entry: Entry<K, V>) -> EntryId {
        self.reserve_entry();
        self.entries.push(entry);
        let id = EntryId::from_len(self.entries.len());
        self.buckets.set(slot, id.raw().get());
        id
    }
}

impl<K, V, S> IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    // The bucket index only ever looks at the low bits of the hash.
    #[allow(clippy::cast_possible_truncation)]
    #[inline]
    fn hash_of<Q: Hash + ?Sized>(&self, key: &Q) -> u32 {
        self.hasher.hash_one(key) as u32
    }

    fn probe<Q>(&self, hash: u32, key: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let mask = self.mask();
        let mut slot = hash as usize & mask;
        loop {
            let raw = self.buckets.get(slot);
            let Some(raw) = NonZeroU32::new(raw) else {
                return Probe::Vacant(slot);
            };
            let id = EntryId(raw);
            let entry = &self.entries[id.index()];
            if entry.hash == hash && <K as Borrow<Q>>::borrow(&entry.key) == key {
                return Probe::Occupied(id);
            }
            slot = (slot + 1) & mask;
        }
    }

    /// Insert `key` or update its value, returning the entry id.
    ///
    /// Updating an existing key keeps its id and its insertion position.
    pub fn set(&mut self, key: K, value: V) -> EntryId {
        if self.needs_grow() {
            self.grow();
        }
        let hash = self.hash_of(&key);
        match self.probe(hash, &key) {
            Probe::Occupied(id) => {
                self.entries[id.index()].value = value;
                id
            }
            Probe::Vacant(slot) => self.push_entry(slot, Entry { hash, key, value }),
        }
    }

    /// Return the id of `key`, inserting the entry built by `make` if absent.
    ///
    /// `make` must produce a key equal to `key`.
    pub fn get_or_insert_with<Q>(&mut self, key: &Q, make: impl FnOnce() -> (K, V)) -> EntryId
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if self.needs_grow() {
            self.grow();
        }
        let hash = self.hash_of(key);
        match self.probe(hash, key) {
            Probe::Occupied(id) => id,
            Probe::Vacant(slot) => {
                let (key, value) = make();
                self.push_entry(slot, Entry { hash, key, value })
            }
        }
    }

    pub fn get_id<Q>(&self, key: &Q) -> Option<EntryId>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(self.hash_of(key), key) {
            Probe::Occupied(id) => Some(id),
            Probe::Vacant(_) => None,
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = self.get_id(key)?;
        Some(&self.entries[id.index()].value)
    }

}

impl<K, S> IndexMap<K, (), S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Insert `key` into the set, returning its id.
    pub fn insert(&mut self, key: K) -> EntryId {
        self.set(key, ())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for IndexMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|e| (&e.key, &e.value)))
            .finish()
    }
}
