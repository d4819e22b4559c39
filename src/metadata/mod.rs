//! Resolved metadata consumed by native declaration generation.
//!
//! This module contains the read-only model of .NET metadata that the code generator works
//! from. Loading assemblies and resolving references happens upstream; what arrives here is
//! already resolved and immutable.
//!
//! # Key Components
//!
//! - [`token`] - Metadata table row references used throughout .NET
//! - [`attributes`] - Type, field and method flag constants
//! - [`signatures`] - Resolved field and method signatures
//! - [`member`] - Fields and methods of a type
//! - [`typesystem`] - Managed types and the type store

/// Type, field and method attribute flags
pub mod attributes;
/// Fields and methods
pub mod member;
/// Resolved signatures
pub mod signatures;
/// Metadata tokens
pub mod token;
/// Managed types and the type store
pub mod typesystem;
