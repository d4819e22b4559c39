//! Flag constants for type, field and method definitions (ECMA-335 §II.23.1).
//!
//! Only the bits that influence native declaration generation are listed. The raw flag
//! words are kept on [`crate::metadata::typesystem::ManagedType`],
//! [`crate::metadata::member::FieldMember`] and [`crate::metadata::member::MethodMember`]
//! exactly as they appear in metadata.

#[allow(non_snake_case)]
/// Type attribute flag constants for `TypeDef` entries, §II.23.1.15.
///
/// ## Layout Flags
/// Control how type fields are arranged in memory:
/// - [`TypeAttributes::AUTO_LAYOUT`] - Runtime-determined field layout (default)
/// - [`TypeAttributes::SEQUENTIAL_LAYOUT`] - Fields laid out in declaration order
/// - [`TypeAttributes::EXPLICIT_LAYOUT`] - Explicit field offsets specified
///
/// ## Semantic Flags
/// - [`TypeAttributes::CLASS`] / [`TypeAttributes::INTERFACE`] - Type category
/// - [`TypeAttributes::ABSTRACT`] / [`TypeAttributes::SEALED`] - Inheritance modifiers
pub mod TypeAttributes {
    /// Mask for extracting type visibility information.
    pub const VISIBILITY_MASK: u32 = 0x0000_0007;

    /// Type has public scope (visible outside assembly).
    pub const PUBLIC: u32 = 0x0000_0001;

    /// Mask for extracting class layout information.
    ///
    /// Use this mask with bitwise AND to isolate the 2 layout bits,
    /// then compare with specific layout constants.
    pub const LAYOUT_MASK: u32 = 0x0000_0018;

    /// Class fields are automatically laid out by the runtime.
    pub const AUTO_LAYOUT: u32 = 0x0000_0000;

    /// Class fields are laid out sequentially in declaration order.
    pub const SEQUENTIAL_LAYOUT: u32 = 0x0000_0008;

    /// Field layout is explicitly specified using field offsets.
    pub const EXPLICIT_LAYOUT: u32 = 0x0000_0010;

    /// Mask for extracting class semantics information.
    pub const CLASS_SEMANTICS_MASK: u32 = 0x0000_0020;

    /// Type is a class (reference or value type).
    pub const CLASS: u32 = 0x0000_0000;

    /// Type is an interface definition.
    pub const INTERFACE: u32 = 0x0000_0020;

    /// Class is abstract and cannot be instantiated directly.
    pub const ABSTRACT: u32 = 0x0000_0080;

    /// Class is sealed and cannot be inherited from.
    pub const SEALED: u32 = 0x0000_0100;
}

#[allow(non_snake_case)]
/// Field attribute flag constants for `Field` entries, §II.23.1.5.
pub mod FieldAttributes {
    /// Mask for the access level bits
    pub const FIELD_ACCESS_MASK: u32 = 0x0007;
    /// Accessible only by the parent type
    pub const PRIVATE: u32 = 0x0001;
    /// Accessible by anyone who has visibility to this scope
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
}

#[allow(non_snake_case)]
/// Method attribute flag constants for `MethodDef` entries, §II.23.1.10.
pub mod MethodAttributes {
    /// Mask for the access level bits
    pub const MEMBER_ACCESS_MASK: u32 = 0x0007;
    /// Accessible by anyone who has visibility to this scope
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
}
