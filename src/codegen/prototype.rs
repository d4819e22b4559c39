//! A method generator that emits native prototypes only.
//!
//! Useful on its own to produce headers for every type, and as the reference implementation of
//! [`MethodGenerator`]. Bodies are left to a real code generator.

use std::collections::BTreeSet;

use crate::{
    codegen::{MethodCode, MethodGenerator},
    metadata::{
        member::MethodMember,
        signatures::{SignatureParameter, TypeSignature},
    },
    naming::NameRegistry,
    utils::escape_identifier,
    Result,
};

/// Emits `<ret> <name>(<this>, <params>);` for every method.
///
/// Instance methods receive the object as a leading `self` pointer. By-reference parameters
/// become pointers. Value types passed or returned by value are reported as implementation
/// dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrototypeGenerator;

impl PrototypeGenerator {
    /// Create a new prototype generator
    #[must_use]
    pub fn new() -> Self {
        PrototypeGenerator
    }

    fn parameter_type(registry: &dyn NameRegistry, param: &SignatureParameter) -> Result<String> {
        let name = registry.signature_name(&param.base)?;
        Ok(if param.by_ref { format!("{name}*") } else { name })
    }

    fn record_by_value(
        registry: &dyn NameRegistry,
        param: &SignatureParameter,
        depends: &mut BTreeSet<String>,
    ) -> Result<()> {
        if param.by_ref {
            return Ok(());
        }
        if let Some(embedded) = registry.resolve_value_type(&param.base)? {
            depends.insert(registry.type_name(&embedded)?);
        }
        Ok(())
    }
}

impl MethodGenerator for PrototypeGenerator {
    fn generate(&self, registry: &dyn NameRegistry, method: &MethodMember) -> Result<MethodCode> {
        let signature = &method.signature;
        let mut impl_depends = BTreeSet::new();
        let mut params = Vec::with_capacity(signature.params.len() + 1);

        if signature.has_this {
            let this = TypeSignature::Ptr(Box::new(TypeSignature::ValueType(
                method.declaring_token,
            )));
            params.push(format!("{} self", registry.signature_name(&this)?));
        }

        for (index, param) in signature.params.iter().enumerate() {
            Self::record_by_value(registry, param, &mut impl_depends)?;

            let name = if param.name.is_empty() {
                format!("arg_{index}")
            } else {
                format!("arg_{}", escape_identifier(&param.name))
            };
            params.push(format!("{} {name}", Self::parameter_type(registry, param)?));
        }

        Self::record_by_value(registry, &signature.return_type, &mut impl_depends)?;

        Ok(MethodCode {
            decl_code: format!(
                "{} {}({});",
                Self::parameter_type(registry, &signature.return_type)?,
                registry.method_name(method)?,
                params.join(", ")
            ),
            impl_code: String::new(),
            decl_depends: BTreeSet::new(),
            impl_depends,
        })
    }
}
