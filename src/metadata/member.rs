//! Resolved field and method members of a [`crate::metadata::typesystem::ManagedType`].
//!
//! Members are produced once by the upstream resolver and are read-only afterwards. They
//! carry the owning type's name key instead of a back-reference, so a member can be
//! described (for provenance annotations and diagnostics) without access to the type graph.

use std::sync::Arc;

use crate::metadata::{
    attributes::FieldAttributes,
    signatures::{SignatureMethod, TypeSignature},
    token::Token,
    typesystem::ManagedType,
};

/// Reference to a `FieldMember`
pub type FieldMemberRc = Arc<FieldMember>;
/// A vector that holds a list of `FieldMember`
pub type FieldList = Arc<boxcar::Vec<FieldMemberRc>>;
/// Reference to a `MethodMember`
pub type MethodMemberRc = Arc<MethodMember>;
/// A vector that holds a list of `MethodMember`
pub type MethodList = Arc<boxcar::Vec<MethodMemberRc>>;

/// A field of a managed type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMember {
    /// `Field` token, its row is the declaration ordinal
    pub token: Token,
    /// Field name as declared in metadata
    pub name: String,
    /// a 2-byte bitmask of type `FieldAttributes`, §II.23.1.5
    pub flags: u32,
    /// The type of this field
    pub signature: TypeSignature,
    /// Name key of the type that declares this field
    pub declaring_type: String,
    /// Token of the type that declares this field
    pub declaring_token: Token,
}

impl FieldMember {
    /// Create a new field member
    #[must_use]
    pub fn new(
        token: Token,
        name: impl Into<String>,
        flags: u32,
        signature: TypeSignature,
        declaring: &ManagedType,
    ) -> Self {
        FieldMember {
            token,
            name: name.into(),
            flags,
            signature,
            declaring_type: declaring.name_key(),
            declaring_token: declaring.token,
        }
    }

    /// True if the field is stored once per type instead of once per instance
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.flags & FieldAttributes::STATIC != 0
    }

    /// Position of the field in its original declaration order
    #[must_use]
    pub fn ordinal(&self) -> u32 {
        self.token.row()
    }

    /// Unique description of the field within its declaring type, `name|type`
    #[must_use]
    pub fn name_key(&self) -> String {
        format!("{}|{}", self.name, self.signature)
    }
}

/// A method of a managed type
#[derive(Debug, Clone, PartialEq)]
pub struct MethodMember {
    /// `MethodDef` token
    pub token: Token,
    /// Method name as declared in metadata
    pub name: String,
    /// a 2-byte bitmask of type `MethodAttributes`, §II.23.1.10
    pub flags: u32,
    /// Return and parameter types
    pub signature: SignatureMethod,
    /// Name key of the type that declares this method
    pub declaring_type: String,
    /// Token of the type that declares this method
    pub declaring_token: Token,
}

impl MethodMember {
    /// Create a new method member
    #[must_use]
    pub fn new(
        token: Token,
        name: impl Into<String>,
        flags: u32,
        signature: SignatureMethod,
        declaring: &ManagedType,
    ) -> Self {
        MethodMember {
            token,
            name: name.into(),
            flags,
            signature,
            declaring_type: declaring.name_key(),
            declaring_token: declaring.token,
        }
    }

    /// Unique description of the method within its declaring type, `name|ret(params)`
    #[must_use]
    pub fn name_key(&self) -> String {
        let params = self
            .signature
            .params
            .iter()
            .map(|param| {
                if param.by_ref {
                    format!("{}&", param.base)
                } else {
                    param.base.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",");

        format!(
            "{}|{}({})",
            self.name, self.signature.return_type.base, params
        )
    }
}
