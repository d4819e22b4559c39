//! Canonical names for emitted native declarations.
//!
//! Every identifier the code generator writes comes from a [`NameRegistry`]: struct names
//! for types, native type names for signatures, identifiers for fields and methods. The
//! registry also decides which signatures impose a declaration dependency (user-defined value
//! types that get embedded inline) and supplies the ordering key for automatic layout.
//!
//! # Key Components
//!
//! - [`NameRegistry`] - The lookup contract the generator is written against
//! - [`RootTypes`] - Canonical names of the universal object and array root types
//! - [`LayoutOrder`] - Opaque ordering key for automatic field layout
//! - [`MangledNames`] - Concrete registry that mangles names from a [`crate::metadata::typesystem::TypeRegistry`]
//!
//! # Concurrency
//!
//! A registry is shared by reference between all generator threads. Implementations must be
//! safe for concurrent lookups; any caching must either be completed before generation starts
//! or be memoization of a deterministic function, so that the same input always yields the
//! same name regardless of which thread asks first.

mod mangled;

pub use mangled::MangledNames;

use crate::{
    metadata::{
        member::{FieldMember, MethodMember},
        signatures::TypeSignature,
        typesystem::{ManagedType, ManagedTypeRc},
    },
    Result,
};

/// Name key of the universal base reference type
pub const OBJECT_TYPE_KEY: &str = "System.Object";
/// Name key of the universal base array type
pub const ARRAY_TYPE_KEY: &str = "System.Array";

/// Canonical names of the two root types, resolved once when the registry is created.
///
/// The generator compares emitted type names against these to decide which built-in header
/// fields a struct receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootTypes {
    /// Name key of the root reference type
    pub object_key: String,
    /// Emitted name of the root reference type
    pub object_name: String,
    /// Name key of the root array type
    pub array_key: String,
    /// Emitted name of the root array type
    pub array_name: String,
}

impl RootTypes {
    /// True if `type_name` is the emitted name of the root reference type
    #[must_use]
    pub fn is_object(&self, type_name: &str) -> bool {
        self.object_name == type_name
    }

    /// True if `type_name` is the emitted name of the root array type
    #[must_use]
    pub fn is_array(&self, type_name: &str) -> bool {
        self.array_name == type_name
    }
}

/// Ordering key for automatic field layout.
///
/// The key is opaque to the generator: it only sorts by it. Fields with equal keys keep their
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayoutOrder(pub u32);

/// Name and type lookups the code generator depends on.
///
/// All methods are pure functions of their arguments for the lifetime of the registry.
pub trait NameRegistry: Send + Sync {
    /// Canonical root type names
    fn roots(&self) -> &RootTypes;

    /// Emitted struct name of a type
    ///
    /// # Errors
    /// Returns an error if the type is unknown to the registry.
    fn type_name(&self, ty: &ManagedType) -> Result<String>;

    /// Native type name used to declare a field, parameter or return value of this signature
    ///
    /// # Errors
    /// Returns an error if the signature names an unknown type or has no native representation.
    fn signature_name(&self, sig: &TypeSignature) -> Result<String>;

    /// Emitted identifier of a field
    ///
    /// # Errors
    /// Returns an error if no identifier can be produced for the field.
    fn field_name(&self, field: &FieldMember) -> Result<String>;

    /// Emitted identifier of a method
    ///
    /// # Errors
    /// Returns an error if no identifier can be produced for the method.
    fn method_name(&self, method: &MethodMember) -> Result<String>;

    /// The user-defined value type a signature embeds, if any
    ///
    /// Returns `None` for reference types and for primitives, which never need another
    /// declaration to be complete.
    ///
    /// # Errors
    /// Returns an error if the signature names an unknown type.
    fn resolve_value_type(&self, sig: &TypeSignature) -> Result<Option<ManagedTypeRc>>;

    /// Ordering key of a field type for automatic layout
    ///
    /// # Errors
    /// Returns an error if the signature can not be the type of a field.
    fn layout_order(&self, sig: &TypeSignature) -> Result<LayoutOrder>;
}
