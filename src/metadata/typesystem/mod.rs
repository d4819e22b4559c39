//! Resolved managed types as consumed by native declaration generation.
//!
//! This module holds the read-only view of the .NET type system that the code generator
//! works from. Types are resolved once, upstream, and then shared between generator
//! threads through [`ManagedTypeRc`].
//!
//! # Key Components
//!
//! - [`ManagedType`]: A resolved type with its fields, methods, base type and layout
//! - [`TypeRegistry`]: Thread-safe store of all resolved types, indexed by token and name
//! - [`TypeKind`]: Value type / enum / array classification
//! - [`ArrayShape`]: Rank and vector-ness of constructed array types
//! - [`LayoutPolicy`]: Automatic, sequential or explicit field layout
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use cilnative::metadata::{
//!     attributes::TypeAttributes,
//!     token::Token,
//!     typesystem::{LayoutPolicy, ManagedType, TypeKind, TypeRegistry},
//! };
//!
//! let registry = TypeRegistry::new();
//! let point = Arc::new(ManagedType::new(
//!     Token::type_def(2),
//!     "Demo",
//!     "Point",
//!     TypeAttributes::SEQUENTIAL_LAYOUT,
//!     TypeKind::VALUE_TYPE,
//! ));
//! registry.insert(&point);
//!
//! let found = registry.get_by_fullname("Demo.Point").unwrap();
//! assert_eq!(found.layout()?, LayoutPolicy::Sequential);
//! # Ok::<(), cilnative::Error>(())
//! ```

mod base;
mod registry;

use std::sync::{Arc, OnceLock};

pub use base::{ArrayShape, LayoutPolicy, ManagedTypeRef, TypeKind};
pub use registry::TypeRegistry;

use crate::{
    metadata::{
        attributes::TypeAttributes,
        member::{FieldList, FieldMember, FieldMemberRc, MethodList, MethodMember, MethodMemberRc},
        token::Token,
    },
    Result,
};

/// Reference to a `ManagedType`
pub type ManagedTypeRc = Arc<ManagedType>;

/// A resolved managed type definition.
///
/// Combines the `TypeDef` row with the information the resolver derived for it: its
/// classification, its array shape for constructed arrays, its base type and its members.
/// Fields and methods are kept in declaration order.
pub struct ManagedType {
    /// Token
    pub token: Token,
    /// `TypeNamespace` (can be empty, e.g. for constructed array types)
    pub namespace: String,
    /// `TypeName`
    pub name: String,
    /// Flags (a 4-byte bitmask of type `TypeAttributes`, §II.23.1.15)
    pub flags: u32,
    /// Value type / enum / array classification
    pub kind: TypeKind,
    /// Shape of the array, present for array types
    pub array: Option<ArrayShape>,
    /// This types base aka 'extends'
    base: OnceLock<ManagedTypeRef>,
    /// All fields this type has
    pub fields: FieldList,
    /// All methods this type has
    pub methods: MethodList,
}

impl ManagedType {
    /// Create a new instance of a `ManagedType` without members
    #[must_use]
    pub fn new(
        token: Token,
        namespace: impl Into<String>,
        name: impl Into<String>,
        flags: u32,
        kind: TypeKind,
    ) -> Self {
        ManagedType {
            token,
            namespace: namespace.into(),
            name: name.into(),
            flags,
            kind,
            array: None,
            base: OnceLock::new(),
            fields: Arc::new(boxcar::Vec::new()),
            methods: Arc::new(boxcar::Vec::new()),
        }
    }

    /// Create a constructed array type
    #[must_use]
    pub fn new_array(token: Token, name: impl Into<String>, shape: ArrayShape) -> Self {
        let mut array = Self::new(token, String::new(), name, 0, TypeKind::ARRAY);
        array.array = Some(shape);
        array
    }

    /// Access the base type of this type, if it exists
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a base was set but has since been dropped.
    pub fn base(&self) -> Result<Option<ManagedTypeRc>> {
        match self.base.get() {
            None => Ok(None),
            Some(base) => base.upgrade().map(Some).ok_or_else(|| {
                malformed_error!("Base of {} is no longer alive", self.name_key())
            }),
        }
    }

    /// Set the base type, can only happen once
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the base was already set.
    pub fn set_base(&self, base: &ManagedTypeRc) -> Result<()> {
        self.base
            .set(ManagedTypeRef::new(base))
            .map_err(|_| malformed_error!("Base of {} already set", self.name_key()))
    }

    /// Returns the full name (Namespace.Name) of the type, or only the name if the namespace
    /// is empty
    pub fn name_key(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// The declared field layout
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for the reserved layout value.
    pub fn layout(&self) -> Result<LayoutPolicy> {
        LayoutPolicy::from_flags(self.flags)
    }

    /// Instances are stored inline
    pub fn is_value_type(&self) -> bool {
        self.kind.contains(TypeKind::VALUE_TYPE)
    }

    /// Type is an enumeration
    pub fn is_enum(&self) -> bool {
        self.kind.contains(TypeKind::ENUM)
    }

    /// Type is a constructed array
    pub fn is_array(&self) -> bool {
        self.kind.contains(TypeKind::ARRAY)
    }

    /// Type is an interface
    pub fn is_interface(&self) -> bool {
        self.flags & TypeAttributes::CLASS_SEMANTICS_MASK == TypeAttributes::INTERFACE
    }

    /// Append a field, returns the shared reference to it
    pub fn add_field(&self, field: FieldMember) -> FieldMemberRc {
        let field = Arc::new(field);
        self.fields.push(field.clone());
        field
    }

    /// Append a method, returns the shared reference to it
    pub fn add_method(&self, method: MethodMember) -> MethodMemberRc {
        let method = Arc::new(method);
        self.methods.push(method.clone());
        method
    }
}
