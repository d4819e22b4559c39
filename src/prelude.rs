//! # cilnative Prelude
//!
//! Commonly used types and traits, for glob import.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all cilnative operations
pub use crate::Error;

/// The result type used throughout cilnative
pub use crate::Result;

// ================================================================================================
// Metadata
// ================================================================================================

/// Metadata tokens and table identifiers
pub use crate::metadata::token::{TableKind, Token};

/// Attribute flag constants
pub use crate::metadata::attributes::{FieldAttributes, MethodAttributes, TypeAttributes};

/// Type signatures
pub use crate::metadata::signatures::{
    SignatureArray, SignatureMethod, SignatureParameter, TypeSignature,
};

/// Field and method members
pub use crate::metadata::member::{FieldMember, FieldMemberRc, MethodMember, MethodMemberRc};

/// Managed types and their store
pub use crate::metadata::typesystem::{
    ArrayShape, LayoutPolicy, ManagedType, ManagedTypeRc, TypeKind, TypeRegistry,
};

// ================================================================================================
// Naming
// ================================================================================================

/// Name lookups and the mangling registry
pub use crate::naming::{LayoutOrder, MangledNames, NameRegistry, RootTypes};

// ================================================================================================
// Code Generation
// ================================================================================================

/// Generator, its configuration and output
pub use crate::codegen::{
    generate_units, CompileUnit, GenerationReport, GeneratorConfig, MethodCode, MethodGenerator,
    PrototypeGenerator, TypeGenerator,
};
