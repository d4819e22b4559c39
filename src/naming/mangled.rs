//! Mangled native names derived from a [`TypeRegistry`].
//!
//! # Naming Scheme
//!
//! | Entity | Emitted name |
//! |--------|--------------|
//! | Type | `cls_<escaped name key>`, `_<row>` appended on collision |
//! | Instance field | `fld_<escaped name>` |
//! | Static field | `sfld_<declaring type name>_<escaped name>` |
//! | Method | `met_<declaring type name>_<escaped name>_<row>` |
//!
//! The declaring type name is the owner's emitted name without its `cls_` prefix, so member
//! identifiers inherit the collision suffix of their owner.
//!
//! Primitive signatures map to fixed-width C types, reference types to pointers to their
//! struct, and user-defined value types to their struct by value.
//!
//! # Concurrency
//!
//! Type names need global knowledge to resolve collisions, so all of them are assigned in
//! token order when the registry is created. Field and method identifiers only depend on the
//! member and its owner's assigned name, and are memoized lazily in a `DashMap`.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use dashmap::DashMap;

use crate::{
    metadata::{
        member::{FieldMember, MethodMember},
        signatures::TypeSignature,
        token::Token,
        typesystem::{ManagedType, ManagedTypeRc, TypeRegistry},
    },
    naming::{LayoutOrder, NameRegistry, RootTypes, ARRAY_TYPE_KEY, OBJECT_TYPE_KEY},
    utils::escape_identifier,
    Error, Result,
};

const STRING_TYPE_KEY: &str = "System.String";
const TYPED_REFERENCE_KEY: &str = "System.TypedReference";

/// Concrete [`NameRegistry`] over a [`TypeRegistry`].
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use cilnative::prelude::*;
///
/// let types = Arc::new(TypeRegistry::new());
/// types.insert(&Arc::new(ManagedType::new(Token::type_def(1), "System", "Object", 0, TypeKind::empty())));
/// types.insert(&Arc::new(ManagedType::new(Token::type_def(2), "System", "Array", 0, TypeKind::empty())));
///
/// let names = MangledNames::new(types)?;
/// assert_eq!(names.roots().object_name, "cls_System_Object");
/// assert_eq!(names.signature_name(&TypeSignature::Object)?, "cls_System_Object*");
/// # Ok::<(), cilnative::Error>(())
/// ```
pub struct MangledNames {
    /// The type store names are assigned from
    types: Arc<TypeRegistry>,
    /// Root type names, resolved at creation
    roots: RootTypes,
    /// Emitted names of all types, assigned at creation
    type_names: HashMap<Token, String>,
    /// Memoized field identifiers
    field_names: DashMap<Token, String>,
    /// Memoized method identifiers
    method_names: DashMap<Token, String>,
}

impl MangledNames {
    /// Assign names to every type in `types`, with `System.Object` and `System.Array` as roots.
    ///
    /// # Errors
    /// Returns [`Error::RootTypeMissing`] if a root type is not registered.
    pub fn new(types: Arc<TypeRegistry>) -> Result<Self> {
        Self::with_roots(types, OBJECT_TYPE_KEY, ARRAY_TYPE_KEY)
    }

    /// Assign names to every type in `types` with custom root type keys.
    ///
    /// # Errors
    /// Returns [`Error::RootTypeMissing`] if a root type is not registered.
    pub fn with_roots(types: Arc<TypeRegistry>, object_key: &str, array_key: &str) -> Result<Self> {
        let type_names = Self::assign_type_names(&types);

        let root_name = |key: &str| -> Result<String> {
            types
                .get_by_fullname(key)
                .and_then(|root| type_names.get(&root.token).cloned())
                .ok_or_else(|| Error::RootTypeMissing(key.to_string()))
        };

        let roots = RootTypes {
            object_key: object_key.to_string(),
            object_name: root_name(object_key)?,
            array_key: array_key.to_string(),
            array_name: root_name(array_key)?,
        };

        log::debug!(
            "assigned {} type names, roots {} / {}",
            type_names.len(),
            roots.object_name,
            roots.array_name
        );

        Ok(MangledNames {
            types,
            roots,
            type_names,
            field_names: DashMap::new(),
            method_names: DashMap::new(),
        })
    }

    fn assign_type_names(types: &TypeRegistry) -> HashMap<Token, String> {
        let mut names = HashMap::with_capacity(types.len());
        let mut taken = HashSet::with_capacity(types.len());

        for entry in types {
            let managed = entry.value();
            let base = format!("cls_{}", escape_identifier(&managed.name_key()));

            let mut candidate = base.clone();
            let mut attempt = 0u32;
            while taken.contains(&candidate) {
                candidate = if attempt == 0 {
                    format!("{base}_{}", managed.token.row())
                } else {
                    format!("{base}_{}_{attempt}", managed.token.row())
                };
                attempt += 1;
            }

            taken.insert(candidate.clone());
            names.insert(managed.token, candidate);
        }

        names
    }

    fn name_of(&self, token: Token) -> Result<String> {
        self.type_names
            .get(&token)
            .cloned()
            .ok_or(Error::TypeNotFound(token))
    }

    fn owner_stem(&self, token: Token) -> Result<String> {
        let name = self.name_of(token)?;
        Ok(name.strip_prefix("cls_").unwrap_or(&name).to_string())
    }

    fn name_by_key(&self, key: &str) -> Result<String> {
        let managed = self
            .types
            .get_by_fullname(key)
            .ok_or_else(|| Error::UnsupportedSignature(format!("{key} is not registered")))?;
        self.name_of(managed.token)
    }
}

impl NameRegistry for MangledNames {
    fn roots(&self) -> &RootTypes {
        &self.roots
    }

    fn type_name(&self, ty: &ManagedType) -> Result<String> {
        self.name_of(ty.token)
    }

    fn signature_name(&self, sig: &TypeSignature) -> Result<String> {
        let name = match sig {
            TypeSignature::Void => "void".to_string(),
            TypeSignature::Boolean | TypeSignature::U1 => "uint8_t".to_string(),
            TypeSignature::Char | TypeSignature::U2 => "uint16_t".to_string(),
            TypeSignature::I1 => "int8_t".to_string(),
            TypeSignature::I2 => "int16_t".to_string(),
            TypeSignature::I4 => "int32_t".to_string(),
            TypeSignature::U4 => "uint32_t".to_string(),
            TypeSignature::I8 => "int64_t".to_string(),
            TypeSignature::U8 => "uint64_t".to_string(),
            TypeSignature::R4 => "float".to_string(),
            TypeSignature::R8 => "double".to_string(),
            TypeSignature::I => "intptr_t".to_string(),
            TypeSignature::U => "uintptr_t".to_string(),
            TypeSignature::String => format!("{}*", self.name_by_key(STRING_TYPE_KEY)?),
            TypeSignature::Object => format!("{}*", self.roots.object_name),
            TypeSignature::TypedByRef => self.name_by_key(TYPED_REFERENCE_KEY)?,
            TypeSignature::Ptr(inner) | TypeSignature::ByRef(inner) => {
                format!("{}*", self.signature_name(inner)?)
            }
            TypeSignature::ValueType(token) => self.name_of(*token)?,
            TypeSignature::Class(token) => format!("{}*", self.name_of(*token)?),
            TypeSignature::SzArray(_) | TypeSignature::Array(_) => {
                format!("{}*", self.roots.array_name)
            }
        };

        Ok(name)
    }

    fn field_name(&self, field: &FieldMember) -> Result<String> {
        if let Some(name) = self.field_names.get(&field.token) {
            return Ok(name.value().clone());
        }

        let name = if field.is_static() {
            format!(
                "sfld_{}_{}",
                self.owner_stem(field.declaring_token)?,
                escape_identifier(&field.name)
            )
        } else {
            format!("fld_{}", escape_identifier(&field.name))
        };

        Ok(self.field_names.entry(field.token).or_insert(name).clone())
    }

    fn method_name(&self, method: &MethodMember) -> Result<String> {
        if let Some(name) = self.method_names.get(&method.token) {
            return Ok(name.value().clone());
        }

        let name = format!(
            "met_{}_{}_{}",
            self.owner_stem(method.declaring_token)?,
            escape_identifier(&method.name),
            method.token.row()
        );

        Ok(self.method_names.entry(method.token).or_insert(name).clone())
    }

    fn resolve_value_type(&self, sig: &TypeSignature) -> Result<Option<ManagedTypeRc>> {
        match sig {
            TypeSignature::ValueType(token) => self
                .types
                .get(token)
                .map(Some)
                .ok_or(Error::TypeNotFound(*token)),
            TypeSignature::TypedByRef => Ok(self.types.get_by_fullname(TYPED_REFERENCE_KEY)),
            _ => Ok(None),
        }
    }

    /// Clusters fields by natural size, largest first, embedded value types last.
    fn layout_order(&self, sig: &TypeSignature) -> Result<LayoutOrder> {
        let order = match sig {
            TypeSignature::I8
            | TypeSignature::U8
            | TypeSignature::R8
            | TypeSignature::I
            | TypeSignature::U
            | TypeSignature::String
            | TypeSignature::Object
            | TypeSignature::Ptr(_)
            | TypeSignature::ByRef(_)
            | TypeSignature::Class(_)
            | TypeSignature::SzArray(_)
            | TypeSignature::Array(_) => 0,
            TypeSignature::I4 | TypeSignature::U4 | TypeSignature::R4 => 1,
            TypeSignature::I2 | TypeSignature::U2 | TypeSignature::Char => 2,
            TypeSignature::I1 | TypeSignature::U1 | TypeSignature::Boolean => 3,
            TypeSignature::ValueType(_) | TypeSignature::TypedByRef => 4,
            TypeSignature::Void => {
                return Err(Error::UnsupportedSignature(
                    "void is not a field type".to_string(),
                ))
            }
        };

        Ok(LayoutOrder(order))
    }
}

impl std::fmt::Debug for MangledNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MangledNames")
            .field("roots", &self.roots)
            .field("types", &self.type_names.len())
            .finish_non_exhaustive()
    }
}
