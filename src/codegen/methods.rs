//! Method aggregation and the method generator seam.
//!
//! Method bodies are produced by a [`MethodGenerator`]. The type generator calls it once per
//! method, in declaration order, and merges each result into the unit: text is appended,
//! dependency sets are unioned.

use std::collections::BTreeSet;

use crate::{
    codegen::{unit::UnitBuilder, GeneratorConfig},
    metadata::{member::MethodMember, typesystem::ManagedType},
    naming::NameRegistry,
    Result,
};

/// Output of the method generator for one method
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodCode {
    /// Declaration text, must compile given `decl_depends` alone
    pub decl_code: String,
    /// Implementation text
    pub impl_code: String,
    /// Types that must be fully defined before `decl_code`
    pub decl_depends: BTreeSet<String>,
    /// Types needed to compile `impl_code`
    pub impl_depends: BTreeSet<String>,
}

/// Generates native code for a single method.
///
/// Implementations must be pure functions of their inputs: the same registry and method always
/// produce the same [`MethodCode`]. They are shared between generator threads.
pub trait MethodGenerator: Send + Sync {
    /// Generate declaration and implementation of `method`
    ///
    /// # Errors
    /// Any error aborts the generation of the declaring type.
    fn generate(&self, registry: &dyn NameRegistry, method: &MethodMember) -> Result<MethodCode>;
}

/// Run `generator` for every method of `ty` and merge the results into `unit`.
pub(crate) fn emit_methods(
    ty: &ManagedType,
    registry: &dyn NameRegistry,
    generator: &dyn MethodGenerator,
    config: &GeneratorConfig,
    unit: &mut UnitBuilder,
) -> Result<()> {
    for (_, method) in ty.methods.iter() {
        let code = generator.generate(registry, method)?;

        if config.emit_provenance {
            unit.decl.line(&format!(
                "// {} -> {}",
                method.declaring_type,
                method.name_key()
            ));
        }
        unit.merge(code);
    }

    Ok(())
}
