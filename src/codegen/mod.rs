//! Native declaration generation for managed types.
//!
//! This module turns one [`crate::metadata::typesystem::ManagedType`] into one [`CompileUnit`]:
//! a struct definition reproducing the runtime object layout, storage for static fields, and the
//! code of every method as produced by a [`MethodGenerator`].
//!
//! # Key Components
//!
//! - [`TypeGenerator`] - Drives the generation of one type through its phases
//! - [`FieldLayout`] - Splits fields into instance and static, orders instance fields
//! - [`BuiltinField`] - Runtime header fields of the root and array types
//! - [`MethodGenerator`] - Seam for the per-method code generator
//! - [`PrototypeGenerator`] - Method generator producing native prototypes
//! - [`CompileUnit`] - The produced text and its dependency sets
//! - [`generate_units`] - Parallel batch driver
//!
//! # Output Order
//!
//! The declaration text holds the struct (omitted for enums), then static field forward
//! declarations, then method declarations. The implementation text holds static field
//! definitions, then method implementations.
//!
//! # Thread Safety
//!
//! Generation reads the type and the shared [`crate::naming::NameRegistry`] only. Units for
//! different types can be generated concurrently; see [`generate_units`].

mod batch;
mod config;
mod declaration;
mod generator;
mod layout;
mod methods;
mod printer;
mod prototype;
mod statics;
mod unit;

pub use batch::{generate_units, GenerationFailure, GenerationReport};
pub use config::GeneratorConfig;
pub use declaration::{base_struct_name, builtin_fields, BuiltinField};
pub use generator::{GenerationPhase, TypeGenerator};
pub use layout::FieldLayout;
pub use methods::{MethodCode, MethodGenerator};
pub use printer::CodePrinter;
pub use prototype::PrototypeGenerator;
pub use unit::CompileUnit;
