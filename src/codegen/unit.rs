//! The generated output for one type and the builder that accumulates it.

use std::collections::BTreeSet;

use crate::{
    codegen::{CodePrinter, GeneratorConfig, MethodCode},
    metadata::signatures::TypeSignature,
    naming::NameRegistry,
    Result,
};

/// Native source fragments generated for one managed type.
///
/// A unit is self-describing: its dependency sets name every type whose full definition must
/// precede the respective text, so units can be assembled in any order they are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileUnit {
    /// Emitted name of the type this unit was generated for
    pub name: String,
    /// Struct definition, static field forward declarations and method declarations
    pub decl_code: String,
    /// Static field definitions and method implementations
    pub impl_code: String,
    /// Types that must be fully defined before `decl_code` compiles
    pub decl_depends: BTreeSet<String>,
    /// Types needed to compile `impl_code`
    pub impl_depends: BTreeSet<String>,
}

impl CompileUnit {
    /// True if the unit produces no implementation text
    #[must_use]
    pub fn is_declaration_only(&self) -> bool {
        self.impl_code.is_empty()
    }
}

/// Accumulates text and dependencies during a single generation call.
///
/// The builder is local to one call of [`crate::codegen::TypeGenerator::generate`] and is
/// consumed by [`UnitBuilder::finish`], so a partially built unit never escapes.
#[derive(Debug)]
pub(crate) struct UnitBuilder {
    pub(crate) decl: CodePrinter,
    pub(crate) imp: CodePrinter,
    decl_depends: BTreeSet<String>,
    impl_depends: BTreeSet<String>,
}

impl UnitBuilder {
    pub(crate) fn new(config: &GeneratorConfig) -> Self {
        UnitBuilder {
            decl: CodePrinter::new(config.indent.as_str()),
            imp: CodePrinter::new(config.indent.as_str()),
            decl_depends: BTreeSet::new(),
            impl_depends: BTreeSet::new(),
        }
    }

    pub(crate) fn depend_decl(&mut self, type_name: impl Into<String>) {
        self.decl_depends.insert(type_name.into());
    }

    /// Record the type a signature embeds by value, if any, as a declaration dependency
    pub(crate) fn depend_on_value_type(
        &mut self,
        registry: &dyn NameRegistry,
        sig: &TypeSignature,
    ) -> Result<()> {
        if let Some(embedded) = registry.resolve_value_type(sig)? {
            self.depend_decl(registry.type_name(&embedded)?);
        }
        Ok(())
    }

    /// Append the output of the method generator
    pub(crate) fn merge(&mut self, code: MethodCode) {
        self.decl.block(&code.decl_code);
        self.imp.block(&code.impl_code);
        self.decl_depends.extend(code.decl_depends);
        self.impl_depends.extend(code.impl_depends);
    }

    pub(crate) fn decl_depends(&self) -> &BTreeSet<String> {
        &self.decl_depends
    }

    /// Seal the unit
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if a printer has unbalanced scopes.
    pub(crate) fn finish(self, name: String) -> Result<CompileUnit> {
        Ok(CompileUnit {
            decl_code: self.decl.finish()?,
            impl_code: self.imp.finish()?,
            decl_depends: self.decl_depends,
            impl_depends: self.impl_depends,
            name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{token::Token, typesystem::TypeKind},
        test::factories::{core_types, insert_type, method_code, names},
        Error,
    };

    #[test]
    fn test_value_type_dependency() {
        let types = core_types();
        let point = insert_type(&types, 30, "Demo", "Point", 0, TypeKind::VALUE_TYPE);
        let registry = names(&types);
        let mut builder = UnitBuilder::new(&GeneratorConfig::default());

        builder
            .depend_on_value_type(&registry, &TypeSignature::ValueType(point.token))
            .unwrap();
        builder
            .depend_on_value_type(&registry, &TypeSignature::Class(point.token))
            .unwrap();
        builder
            .depend_on_value_type(&registry, &TypeSignature::I4)
            .unwrap();

        let unit = builder.finish("cls_Demo_Holder".to_string()).unwrap();
        assert_eq!(
            unit.decl_depends.iter().collect::<Vec<_>>(),
            vec!["cls_Demo_Point"]
        );
    }

    #[test]
    fn test_unknown_value_type_propagates() {
        let registry = names(&core_types());
        let mut builder = UnitBuilder::new(&GeneratorConfig::default());

        assert!(matches!(
            builder.depend_on_value_type(&registry, &TypeSignature::ValueType(Token::type_def(77))),
            Err(Error::TypeNotFound(_))
        ));
    }

    #[test]
    fn test_merge_keeps_every_dependency() {
        let mut builder = UnitBuilder::new(&GeneratorConfig::default());
        builder.merge(method_code("void f();", "void f() {}", &["cls_A", "cls_Self"], &["cls_B"]));
        builder.merge(method_code("void g();", "", &["cls_A"], &["cls_Self"]));

        let unit = builder.finish("cls_Self".to_string()).unwrap();
        assert_eq!(unit.decl_code, "void f();\nvoid g();\n");
        assert_eq!(unit.impl_code, "void f() {}\n");
        assert_eq!(
            unit.decl_depends.iter().collect::<Vec<_>>(),
            vec!["cls_A", "cls_Self"]
        );
        assert_eq!(
            unit.impl_depends.iter().collect::<Vec<_>>(),
            vec!["cls_B", "cls_Self"]
        );
        assert!(!unit.is_declaration_only());
    }

    #[test]
    fn test_unbalanced_builder_produces_no_unit() {
        let mut builder = UnitBuilder::new(&GeneratorConfig::default());
        builder.decl.indent();
        assert!(builder.finish("cls_X".to_string()).is_err());
    }
}
