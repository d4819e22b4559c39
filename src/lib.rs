// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # cilnative
//!
//! Native declaration generation for ahead-of-time translation of .NET (CIL) types.
//!
//! Given resolved managed type metadata, `cilnative` produces for every type a [`codegen::CompileUnit`]:
//! a native struct reproducing the runtime object layout, storage for the type's static fields,
//! the code of its methods, and the set of types each part depends on. The dependency sets let a
//! downstream assembler order the fragments into compilable source without manual ordering.
//!
//! ## Features
//!
//! - **Runtime-accurate layout** - automatic and sequential field ordering, built-in header fields
//!   for the root object and array types, flattened value types
//! - **Dependency tracking** - every inline-embedded value type and base struct is recorded
//! - **Pluggable collaborators** - naming and method code generation sit behind traits
//! - **Parallel** - types are generated independently on the rayon thread pool
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use cilnative::prelude::*;
//!
//! let types = Arc::new(TypeRegistry::new());
//! let object = Arc::new(ManagedType::new(Token::type_def(1), "System", "Object", 0, TypeKind::empty()));
//! types.insert(&object);
//! types.insert(&Arc::new(ManagedType::new(Token::type_def(2), "System", "Array", 0, TypeKind::empty())));
//!
//! let point = Arc::new(ManagedType::new(
//!     Token::type_def(3),
//!     "Demo",
//!     "Point",
//!     TypeAttributes::SEQUENTIAL_LAYOUT,
//!     TypeKind::VALUE_TYPE,
//! ));
//! point.add_field(FieldMember::new(Token::field(1), "x", FieldAttributes::PUBLIC, TypeSignature::I4, &point));
//! point.add_field(FieldMember::new(Token::field(2), "y", FieldAttributes::PUBLIC, TypeSignature::I4, &point));
//! types.insert(&point);
//!
//! let names = MangledNames::new(types.clone())?;
//! let report = generate_units(&types.all_types(), &names, &PrototypeGenerator, &GeneratorConfig::default())?;
//!
//! for unit in &report.units {
//!     println!("{}:\n{}", unit.name, unit.decl_code);
//! }
//! assert!(report.is_complete());
//! # Ok::<(), cilnative::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata`] - Tokens, signatures, members and the [`metadata::typesystem::TypeRegistry`]
//! - [`naming`] - The [`naming::NameRegistry`] seam and the mangling [`naming::MangledNames`]
//! - [`codegen`] - Field layout, struct, static and method emission, unit assembly
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result). Errors are scoped to one type: a failing
//! type produces no unit and does not affect any other type.
//!
//! ```rust
//! use cilnative::Error;
//!
//! fn describe(err: &Error) -> &'static str {
//!     match err {
//!         Error::UnsupportedLayout { .. } => "explicit layout",
//!         Error::LayoutOrderingViolation { .. } => "inconsistent metadata",
//!         _ => "other",
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger itself.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use cilnative::prelude::*;
///
/// let config = GeneratorConfig::default().with_parallel(false);
/// assert_eq!(Token::type_def(1).table(), TableKind::TYPE_DEF);
/// # let _ = config;
/// ```
pub mod prelude;

/// Managed type metadata consumed by the generator.
///
/// Tokens, type signatures, field and method members, and the thread-safe
/// [`metadata::typesystem::TypeRegistry`] holding every resolved type.
pub mod metadata;

pub mod naming;

pub mod codegen;

/// Small helpers shared across modules
pub mod utils;

/// `cilnative` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `cilnative` Error type
///
/// The single error type returned by every fallible operation in this crate.
pub use error::Error;
