//! Struct body emission.
//!
//! Every non-enum type becomes one native struct:
//!
//! ```text
//! // Demo.Node
//! struct cls_Demo_Node : cls_System_Object
//! {
//!     // value|int32
//!     int32_t fld_value;
//!     // next|class 0x02000021
//!     cls_Demo_Node* fld_next;
//! };
//! ```
//!
//! Built-in runtime fields precede user fields. The root reference type carries the runtime
//! type identifier, the root array type carries the rank, and constructed arrays carry their
//! length or per-dimension bounds instead of any user field.

use std::fmt;

use crate::{
    codegen::{unit::UnitBuilder, GeneratorConfig},
    metadata::{member::FieldMemberRc, typesystem::ManagedType},
    naming::{NameRegistry, RootTypes},
    Result,
};

/// A field the runtime places in an object without it being declared in metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinField {
    /// Runtime type identifier of every object, `uint32_t`
    TypeId,
    /// Number of dimensions of any array, `int32_t`
    Rank,
    /// Element count of a single-dimension zero-based array, `int32_t`
    Length,
    /// Lower bound of dimension `n` of a general array, `int32_t`
    LowerBound(u32),
    /// Size of dimension `n` of a general array, `int32_t`
    Size(u32),
}

impl fmt::Display for BuiltinField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuiltinField::TypeId => write!(f, "uint32_t TypeID;"),
            BuiltinField::Rank => write!(f, "int32_t Rank;"),
            BuiltinField::Length => write!(f, "int32_t Length;"),
            BuiltinField::LowerBound(dim) => write!(f, "int32_t LowerBound{dim};"),
            BuiltinField::Size(dim) => write!(f, "int32_t Size{dim};"),
        }
    }
}

/// The built-in fields of `ty`, in emission order.
///
/// ## Arguments
/// * 'ty'        - The type being declared
/// * 'type_name' - Its emitted name, compared against the root type names
/// * 'roots'     - Canonical root names of the registry
///
/// # Errors
/// Returns [`crate::Error::Malformed`] for an array type without a shape.
pub fn builtin_fields(
    ty: &ManagedType,
    type_name: &str,
    roots: &RootTypes,
) -> Result<Vec<BuiltinField>> {
    if ty.is_array() {
        let shape = ty
            .array
            .ok_or_else(|| malformed_error!("Array type {} has no shape", ty.name_key()))?;

        if shape.is_sz {
            return Ok(vec![BuiltinField::Length]);
        }

        return Ok((0..shape.rank)
            .flat_map(|dim| [BuiltinField::LowerBound(dim), BuiltinField::Size(dim)])
            .collect());
    }

    if roots.is_object(type_name) {
        Ok(vec![BuiltinField::TypeId])
    } else if roots.is_array(type_name) {
        Ok(vec![BuiltinField::Rank])
    } else {
        Ok(Vec::new())
    }
}

/// Emitted name of the struct `ty` derives from, if any.
///
/// Value types are flattened and never derive. Interfaces without a recorded base derive from
/// the root reference type so they share the object header.
///
/// # Errors
/// Returns an error if the recorded base is no longer alive or the registry can not name it.
pub fn base_struct_name(ty: &ManagedType, registry: &dyn NameRegistry) -> Result<Option<String>> {
    if ty.is_value_type() {
        return Ok(None);
    }

    match ty.base()? {
        Some(base) => registry.type_name(&base).map(Some),
        None if ty.is_interface() => Ok(Some(registry.roots().object_name.clone())),
        None => Ok(None),
    }
}

/// Emit the struct of `ty` with `fields` in the given order into the declaration text.
pub(crate) fn emit_struct(
    ty: &ManagedType,
    type_name: &str,
    fields: &[FieldMemberRc],
    registry: &dyn NameRegistry,
    config: &GeneratorConfig,
    unit: &mut UnitBuilder,
) -> Result<()> {
    if config.emit_provenance {
        unit.decl.line(&format!("// {}", ty.name_key()));
    }

    match base_struct_name(ty, registry)? {
        Some(base) => {
            unit.decl.line(&format!("struct {type_name} : {base}"));
            if config.track_base_dependency {
                unit.depend_decl(base);
            }
        }
        None => unit.decl.line(&format!("struct {type_name}")),
    }

    unit.decl.line("{");
    unit.decl.indent();

    for builtin in builtin_fields(ty, type_name, registry.roots())? {
        unit.decl.line(&builtin.to_string());
    }

    for field in fields {
        unit.depend_on_value_type(registry, &field.signature)?;

        if config.emit_provenance {
            unit.decl.line(&format!("// {}", field.name_key()));
        }
        unit.decl.line(&format!(
            "{} {};",
            registry.signature_name(&field.signature)?,
            registry.field_name(field)?
        ));
    }

    unit.decl.dedent()?;
    unit.decl.line("};");

    Ok(())
}
