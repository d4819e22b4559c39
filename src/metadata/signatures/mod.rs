//! Resolved type and method signatures.
//!
//! Signatures reach this crate already decoded and resolved: every named type is a metadata
//! [`crate::metadata::token::Token`] that the [`crate::metadata::typesystem::TypeRegistry`] can
//! look up, and generic instantiations have been closed upstream.
//!
//! # Signature Types
//!
//! - [`TypeSignature`] - The type of a field, parameter or return value
//! - [`SignatureMethod`] - Return type, parameters and the implicit `this`
//! - [`SignatureParameter`] - A single parameter
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 23.2 - Blobs and Signatures

mod types;

pub use types::*;
