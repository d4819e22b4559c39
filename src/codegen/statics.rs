//! Static field storage.
//!
//! Static fields live outside the struct as globals: the declaration text receives an `extern`
//! forward declaration, the implementation text the definition.

use crate::{
    codegen::{unit::UnitBuilder, GeneratorConfig},
    metadata::member::FieldMemberRc,
    naming::NameRegistry,
    Result,
};

/// Emit declarations and definitions for `statics`, in the given order.
pub(crate) fn emit_statics(
    statics: &[FieldMemberRc],
    registry: &dyn NameRegistry,
    config: &GeneratorConfig,
    unit: &mut UnitBuilder,
) -> Result<()> {
    for field in statics {
        unit.depend_on_value_type(registry, &field.signature)?;

        let declaration = format!(
            "{} {};",
            registry.signature_name(&field.signature)?,
            registry.field_name(field)?
        );

        if config.emit_provenance {
            unit.decl.line(&format!(
                "// {} -> {}",
                field.declaring_type,
                field.name_key()
            ));
        }
        unit.decl.line(&format!("extern {declaration}"));
        unit.imp.line(&declaration);
    }

    Ok(())
}
