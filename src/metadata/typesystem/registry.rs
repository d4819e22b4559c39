//! Central store of resolved managed types.
//!
//! This module provides the `TypeRegistry`, a thread-safe store for all types handed to the
//! code generator. The resolver fills it once; afterwards it is only read, typically from
//! many generator threads at the same time.
//!
//! # Registry Architecture
//!
//! - **Token-based lookup**: Primary index using metadata tokens (`SkipMap`, ordered)
//! - **Name-based lookup**: Secondary index for full names (`DashMap`)
//!
//! # Thread Safety
//!
//! - Lock-free data structures for primary storage (`SkipMap`)
//! - Concurrent hash maps for indices (`DashMap`)
//! - No blocking operations during normal lookup/insertion
//!
//! Iteration follows token order, which makes every derived artifact (for example the
//! mangled names of [`crate::naming::MangledNames`]) deterministic.

use std::sync::Arc;

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;

use crate::metadata::{
    token::Token,
    typesystem::ManagedTypeRc,
};

/// Thread-safe store of all resolved managed types.
#[derive(Default)]
pub struct TypeRegistry {
    /// Primary type storage indexed by metadata tokens - uses skip list for O(log n) operations
    types: SkipMap<Token, ManagedTypeRc>,
    /// Secondary index: types indexed by full name (namespace.name)
    types_by_fullname: DashMap<String, Vec<Token>>,
}

impl TypeRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        TypeRegistry {
            types: SkipMap::new(),
            types_by_fullname: DashMap::new(),
        }
    }

    /// Insert a `ManagedType` into the registry
    ///
    /// Inserting a token that is already present is ignored, the first registration wins.
    ///
    /// ## Arguments
    /// * '`new_type`' - The type to register
    pub fn insert(&self, new_type: &ManagedTypeRc) {
        let token = new_type.token;
        let entry = self.types.get_or_insert(token, new_type.clone());
        if !Arc::ptr_eq(entry.value(), new_type) {
            return;
        }

        self.types_by_fullname
            .entry(new_type.name_key())
            .or_default()
            .push(token);
    }

    /// Look up a type by its metadata token.
    pub fn get(&self, token: &Token) -> Option<ManagedTypeRc> {
        self.types.get(token).map(|entry| entry.value().clone())
    }

    /// Look up a type by its full name (`Namespace.Name`).
    ///
    /// If several types share the name, the one registered first is returned.
    pub fn get_by_fullname(&self, fullname: &str) -> Option<ManagedTypeRc> {
        let tokens = self.types_by_fullname.get(fullname)?;
        tokens.value().first().and_then(|token| self.get(token))
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if no type is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// All types, in token order
    pub fn all_types(&self) -> Vec<ManagedTypeRc> {
        self.types
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Iterate over all registered types, in token order
    pub fn iter(&self) -> crossbeam_skiplist::map::Iter<'_, Token, ManagedTypeRc> {
        self.types.iter()
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = crossbeam_skiplist::map::Entry<'a, Token, ManagedTypeRc>;
    type IntoIter = crossbeam_skiplist::map::Iter<'a, Token, ManagedTypeRc>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.types.len())
            .finish()
    }
}
