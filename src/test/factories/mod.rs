//! Factories for managed types, members and collaborators used across unit tests.

use std::{collections::HashMap, sync::Arc};

use crate::{
    codegen::{MethodCode, MethodGenerator},
    metadata::{
        attributes::{FieldAttributes, MethodAttributes, TypeAttributes},
        member::{FieldMember, FieldMemberRc, MethodMember, MethodMemberRc},
        signatures::{SignatureMethod, TypeSignature},
        token::Token,
        typesystem::{ManagedType, ManagedTypeRc, TypeKind, TypeRegistry},
    },
    naming::{MangledNames, NameRegistry},
    Error, Result,
};

// Helper function to create and register a type
pub fn insert_type(
    types: &TypeRegistry,
    row: u32,
    namespace: &str,
    name: &str,
    flags: u32,
    kind: TypeKind,
) -> ManagedTypeRc {
    let new_type = Arc::new(ManagedType::new(
        Token::type_def(row),
        namespace,
        name,
        flags,
        kind,
    ));
    types.insert(&new_type);
    new_type
}

// Helper function to create and register a type deriving from `base`
pub fn insert_derived(
    types: &TypeRegistry,
    row: u32,
    namespace: &str,
    name: &str,
    flags: u32,
    kind: TypeKind,
    base: &ManagedTypeRc,
) -> ManagedTypeRc {
    let new_type = insert_type(types, row, namespace, name, flags, kind);
    new_type.set_base(base).unwrap();
    new_type
}

/// Registry holding the runtime's core types, rows 1 to 6:
/// `System.Object`, `System.ValueType`, `System.Array`, `System.String`, `System.Enum`,
/// `System.TypedReference`
pub fn core_types() -> Arc<TypeRegistry> {
    let types = Arc::new(TypeRegistry::new());

    let object = insert_type(&types, 1, "System", "Object", TypeAttributes::PUBLIC, TypeKind::empty());
    let value_type = insert_derived(
        &types,
        2,
        "System",
        "ValueType",
        TypeAttributes::PUBLIC | TypeAttributes::ABSTRACT,
        TypeKind::empty(),
        &object,
    );
    insert_derived(
        &types,
        3,
        "System",
        "Array",
        TypeAttributes::PUBLIC | TypeAttributes::ABSTRACT,
        TypeKind::empty(),
        &object,
    );
    insert_derived(
        &types,
        4,
        "System",
        "String",
        TypeAttributes::PUBLIC | TypeAttributes::SEALED,
        TypeKind::empty(),
        &object,
    );
    insert_derived(
        &types,
        5,
        "System",
        "Enum",
        TypeAttributes::PUBLIC | TypeAttributes::ABSTRACT,
        TypeKind::empty(),
        &value_type,
    );
    insert_derived(
        &types,
        6,
        "System",
        "TypedReference",
        TypeAttributes::PUBLIC | TypeAttributes::SEQUENTIAL_LAYOUT,
        TypeKind::VALUE_TYPE,
        &value_type,
    );

    types
}

/// Names over `types`, panics if the roots are missing
pub fn names(types: &Arc<TypeRegistry>) -> MangledNames {
    MangledNames::new(types.clone()).unwrap()
}

// Helper function to add an instance field to `owner`
pub fn add_field(owner: &ManagedType, row: u32, name: &str, signature: TypeSignature) -> FieldMemberRc {
    owner.add_field(FieldMember::new(
        Token::field(row),
        name,
        FieldAttributes::PUBLIC,
        signature,
        owner,
    ))
}

// Helper function to add a static field to `owner`
pub fn add_static_field(
    owner: &ManagedType,
    row: u32,
    name: &str,
    signature: TypeSignature,
) -> FieldMemberRc {
    owner.add_field(FieldMember::new(
        Token::field(row),
        name,
        FieldAttributes::PUBLIC | FieldAttributes::STATIC,
        signature,
        owner,
    ))
}

// Helper function to add an instance method to `owner`
pub fn add_method(
    owner: &ManagedType,
    row: u32,
    name: &str,
    signature: SignatureMethod,
) -> MethodMemberRc {
    owner.add_method(MethodMember::new(
        Token::method_def(row),
        name,
        MethodAttributes::PUBLIC,
        signature,
        owner,
    ))
}

/// Method generator returning canned output per method name.
///
/// Methods without an entry produce an error, which lets tests exercise failure propagation.
#[derive(Default)]
pub struct ScriptedMethods {
    outputs: HashMap<String, MethodCode>,
}

impl ScriptedMethods {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, method: &str, code: MethodCode) -> Self {
        self.outputs.insert(method.to_string(), code);
        self
    }
}

impl MethodGenerator for ScriptedMethods {
    fn generate(&self, _registry: &dyn NameRegistry, method: &MethodMember) -> Result<MethodCode> {
        self.outputs
            .get(&method.name)
            .cloned()
            .ok_or_else(|| Error::MethodGeneration {
                method: method.name_key(),
                message: "no script".to_string(),
            })
    }
}

/// Canned method output
pub fn method_code(decl: &str, imp: &str, decl_depends: &[&str], impl_depends: &[&str]) -> MethodCode {
    MethodCode {
        decl_code: decl.to_string(),
        impl_code: imp.to_string(),
        decl_depends: decl_depends.iter().map(|s| (*s).to_string()).collect(),
        impl_depends: impl_depends.iter().map(|s| (*s).to_string()).collect(),
    }
}
