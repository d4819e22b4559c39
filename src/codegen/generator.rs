//! Per-type compile unit assembly.
//!
//! [`TypeGenerator`] drives one type through a fixed sequence of phases:
//!
//! ```text
//! Start -> LayoutFields -> EmitStructBody -> EmitStaticFields -> EmitMethods -> AssembleUnit -> Done
//! ```
//!
//! `EmitStructBody` is skipped for enums. Text and dependencies accumulate in a builder local to
//! the call; a failure in any phase discards it, so callers only ever see complete units.

use strum::Display;

use crate::{
    codegen::{
        declaration::emit_struct, layout::FieldLayout, methods::emit_methods,
        statics::emit_statics, unit::UnitBuilder, CompileUnit, GeneratorConfig, MethodGenerator,
    },
    metadata::typesystem::ManagedType,
    naming::NameRegistry,
    Result,
};

/// Phases of a single generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GenerationPhase {
    /// Nothing done yet
    Start,
    /// Splitting and ordering fields
    LayoutFields,
    /// Emitting the struct, skipped for enums
    EmitStructBody,
    /// Emitting static field storage
    EmitStaticFields,
    /// Aggregating method generator output
    EmitMethods,
    /// Sealing the unit
    AssembleUnit,
    /// Unit produced
    Done,
}

/// Generates the [`CompileUnit`] of a managed type.
///
/// A generator holds no per-type state, one instance can serve any number of types and threads.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use cilnative::prelude::*;
///
/// let types = Arc::new(TypeRegistry::new());
/// let object = Arc::new(ManagedType::new(Token::type_def(1), "System", "Object", 0, TypeKind::empty()));
/// types.insert(&object);
/// types.insert(&Arc::new(ManagedType::new(Token::type_def(2), "System", "Array", 0, TypeKind::empty())));
///
/// let names = MangledNames::new(types)?;
/// let prototypes = PrototypeGenerator::new();
/// let generator = TypeGenerator::new(&names, &prototypes);
///
/// let unit = generator.generate(&object)?;
/// assert_eq!(unit.name, "cls_System_Object");
/// assert!(unit.decl_code.contains("uint32_t TypeID;"));
/// # Ok::<(), cilnative::Error>(())
/// ```
pub struct TypeGenerator<'a> {
    registry: &'a dyn NameRegistry,
    methods: &'a dyn MethodGenerator,
    config: GeneratorConfig,
}

impl<'a> TypeGenerator<'a> {
    /// Create a generator with the default configuration
    pub fn new(registry: &'a dyn NameRegistry, methods: &'a dyn MethodGenerator) -> Self {
        Self::with_config(registry, methods, GeneratorConfig::default())
    }

    /// Create a generator with a custom configuration
    pub fn with_config(
        registry: &'a dyn NameRegistry,
        methods: &'a dyn MethodGenerator,
        config: GeneratorConfig,
    ) -> Self {
        TypeGenerator {
            registry,
            methods,
            config,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the compile unit of `ty`.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedLayout`] for explicit layout,
    /// [`crate::Error::LayoutOrderingViolation`] for inconsistent sequential ordinals, and any
    /// error of the registry or the method generator. No unit is produced on error.
    pub fn generate(&self, ty: &ManagedType) -> Result<CompileUnit> {
        let type_name = self.registry.type_name(ty)?;
        log::debug!("generating {} as {}", ty.name_key(), type_name);

        let mut phase = GenerationPhase::Start;
        let mut advance = |next: GenerationPhase| {
            log::trace!("{type_name}: {phase} -> {next}");
            phase = next;
        };

        advance(GenerationPhase::LayoutFields);
        let layout = FieldLayout::compute(ty, self.registry)?;
        let mut unit = UnitBuilder::new(&self.config);

        if ty.is_enum() {
            log::trace!("{type_name}: enum, struct body skipped");
        } else {
            advance(GenerationPhase::EmitStructBody);
            emit_struct(
                ty,
                &type_name,
                &layout.instance,
                self.registry,
                &self.config,
                &mut unit,
            )?;
        }

        advance(GenerationPhase::EmitStaticFields);
        emit_statics(&layout.statics, self.registry, &self.config, &mut unit)?;

        advance(GenerationPhase::EmitMethods);
        emit_methods(ty, self.registry, self.methods, &self.config, &mut unit)?;

        advance(GenerationPhase::AssembleUnit);
        log::trace!(
            "{type_name}: {} declaration dependencies",
            unit.decl_depends().len()
        );
        let unit = unit.finish(type_name.clone())?;

        advance(GenerationPhase::Done);
        log::debug!(
            "generated {type_name}: {} fields, {} statics, {} methods",
            layout.instance.len(),
            layout.statics.len(),
            ty.methods.count()
        );

        Ok(unit)
    }
}

impl std::fmt::Debug for TypeGenerator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeGenerator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        codegen::PrototypeGenerator,
        metadata::{
            attributes::TypeAttributes,
            signatures::{SignatureMethod, SignatureParameter, TypeSignature},
            typesystem::{ArrayShape, ManagedType, TypeKind},
            token::Token,
        },
        test::factories::{
            add_field, add_method, add_static_field, core_types, insert_derived, insert_type,
            method_code, names, ScriptedMethods,
        },
        Error,
    };

    #[test]
    fn test_phase_display() {
        assert_eq!(GenerationPhase::EmitStructBody.to_string(), "EmitStructBody");
        assert_eq!(GenerationPhase::Done.to_string(), "Done");
    }

    #[test]
    fn test_sequential_value_type() {
        let types = core_types();
        let value_type = types.get_by_fullname("System.ValueType").unwrap();
        let pair = insert_derived(
            &types,
            30,
            "Demo",
            "Pair",
            TypeAttributes::SEQUENTIAL_LAYOUT,
            TypeKind::VALUE_TYPE,
            &value_type,
        );
        add_field(&pair, 6, "y", TypeSignature::I4);
        add_field(&pair, 5, "x", TypeSignature::I4);
        let registry = names(&types);

        let unit = TypeGenerator::new(&registry, &PrototypeGenerator)
            .generate(&pair)
            .unwrap();

        assert_eq!(unit.name, "cls_Demo_Pair");
        assert_eq!(
            unit.decl_code,
            "// Demo.Pair\nstruct cls_Demo_Pair\n{\n\t// x|int32\n\tint32_t fld_x;\n\t// y|int32\n\tint32_t fld_y;\n};\n"
        );
        assert!(unit.decl_depends.is_empty());
        assert!(unit.impl_depends.is_empty());
        assert!(unit.impl_code.is_empty());
    }

    #[test]
    fn test_vector_array() {
        let types = core_types();
        let array = types.get_by_fullname("System.Array").unwrap();
        let vector = std::sync::Arc::new(ManagedType::new_array(
            Token::type_def(40),
            "System.Int32[]",
            ArrayShape::vector(),
        ));
        vector.set_base(&array).unwrap();
        types.insert(&vector);
        let registry = names(&types);

        let unit = TypeGenerator::new(&registry, &PrototypeGenerator)
            .generate(&vector)
            .unwrap();

        assert_eq!(
            unit.decl_code,
            "// System.Int32[]\nstruct cls_System_Int32__ : cls_System_Array\n{\n\tint32_t Length;\n};\n"
        );
        assert_eq!(
            unit.decl_depends.iter().collect::<Vec<_>>(),
            vec!["cls_System_Array"]
        );
    }

    #[test]
    fn test_enum_keeps_statics_and_methods() {
        let types = core_types();
        let enum_base = types.get_by_fullname("System.Enum").unwrap();
        let color = insert_derived(
            &types,
            30,
            "Demo",
            "Color",
            TypeAttributes::SEALED,
            TypeKind::VALUE_TYPE | TypeKind::ENUM,
            &enum_base,
        );
        add_field(&color, 1, "value__", TypeSignature::I4);
        add_static_field(&color, 2, "Default", TypeSignature::ValueType(color.token));
        add_method(&color, 1, "Describe", SignatureMethod::default());
        let registry = names(&types);

        let methods = ScriptedMethods::new().with(
            "Describe",
            method_code("void describe();", "void describe() {}", &["cls_X"], &["cls_Y"]),
        );
        let unit = TypeGenerator::new(&registry, &methods)
            .generate(&color)
            .unwrap();

        assert!(!unit.decl_code.contains("struct"));
        assert_eq!(
            unit.decl_code,
            "// Demo.Color -> Default|valuetype 0x0200001e\n\
             extern cls_Demo_Color sfld_Demo_Color_Default;\n\
             // Demo.Color -> Describe|void()\n\
             void describe();\n"
        );
        assert_eq!(
            unit.impl_code,
            "cls_Demo_Color sfld_Demo_Color_Default;\nvoid describe() {}\n"
        );
        assert_eq!(
            unit.decl_depends.iter().collect::<Vec<_>>(),
            vec!["cls_Demo_Color", "cls_X"]
        );
        assert_eq!(unit.impl_depends.iter().collect::<Vec<_>>(), vec!["cls_Y"]);
    }

    #[test]
    fn test_explicit_layout_yields_no_unit() {
        let types = core_types();
        let union = insert_type(
            &types,
            30,
            "Demo",
            "Union",
            TypeAttributes::EXPLICIT_LAYOUT,
            TypeKind::VALUE_TYPE,
        );
        add_method(&union, 1, "Never", SignatureMethod::default());
        let registry = names(&types);

        assert!(matches!(
            TypeGenerator::new(&registry, &ScriptedMethods::new()).generate(&union),
            Err(Error::UnsupportedLayout { .. })
        ));
    }

    #[test]
    fn test_method_failure_yields_no_unit() {
        let types = core_types();
        let broken = insert_type(&types, 30, "Demo", "Broken", 0, TypeKind::empty());
        add_method(
            &broken,
            1,
            "Fails",
            SignatureMethod {
                has_this: true,
                return_type: SignatureParameter::default(),
                params: Vec::new(),
            },
        );
        let registry = names(&types);

        assert!(matches!(
            TypeGenerator::new(&registry, &ScriptedMethods::new()).generate(&broken),
            Err(Error::MethodGeneration { .. })
        ));
    }

    #[test]
    fn test_declaration_order() {
        let types = core_types();
        let object = types.get_by_fullname("System.Object").unwrap();
        let counter = insert_derived(&types, 30, "Demo", "Counter", 0, TypeKind::empty(), &object);
        add_field(&counter, 1, "count", TypeSignature::I4);
        add_static_field(&counter, 2, "Instances", TypeSignature::I4);
        add_method(&counter, 1, "Increment", SignatureMethod::default());
        let registry = names(&types);

        let config = GeneratorConfig::default().with_provenance(false);
        let unit = TypeGenerator::with_config(&registry, &PrototypeGenerator, config)
            .generate(&counter)
            .unwrap();

        let body = unit.decl_code.find("int32_t fld_count;").unwrap();
        let extern_decl = unit.decl_code.find("extern int32_t sfld_Demo_Counter_Instances;").unwrap();
        let method = unit.decl_code.find("met_Demo_Counter_Increment_1").unwrap();
        assert!(body < extern_decl && extern_decl < method);
        assert_eq!(unit.impl_code, "int32_t sfld_Demo_Counter_Instances;\n");
        assert!(!unit.decl_code.contains("//"));
    }
}
