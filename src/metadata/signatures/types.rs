use std::fmt;

use crate::metadata::token::Token;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
/// The type of a field, parameter or return value after upstream resolution.
///
/// Generic instantiations are resolved before they reach this crate: a closed generic type
/// appears as the [`TypeSignature::Class`] or [`TypeSignature::ValueType`] token of its
/// instantiated type.
pub enum TypeSignature {
    #[default]
    /// void
    Void,
    /// bool
    Boolean,
    /// char
    Char,
    /// signed 8bit integer
    I1,
    /// unsigned 8bit integer
    U1,
    /// signed 16bit integer
    I2,
    /// unsigned 16bit integer
    U2,
    /// signed 32bit integer
    I4,
    /// unsigned 32bit integer
    U4,
    /// signed 64bit integer
    I8,
    /// unsigned 64bit integer
    U8,
    /// 32bit floating-point
    R4,
    /// 64bit floating-point
    R8,
    /// signed integer, sized to executing platform
    I,
    /// unsigned integer, sized to executing platform
    U,
    /// System.String
    String,
    /// System.Object
    Object,
    /// Type is referenced during runtime
    TypedByRef,
    /// An unmanaged pointer to a type
    Ptr(Box<TypeSignature>),
    /// Type by reference
    ByRef(Box<TypeSignature>),
    /// CIL value-type
    ValueType(Token),
    /// CIL Class
    Class(Token),
    /// Single dimension, zero based array
    SzArray(Box<TypeSignature>),
    /// General array
    Array(SignatureArray),
}

/// A multi-dimensional array signature
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SignatureArray {
    /// The type in the array
    pub base: Box<TypeSignature>,
    /// The number of dimensions
    pub rank: u32,
}

/// Parameter or return type of a method
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureParameter {
    /// Parameter name, empty for the return value
    pub name: String,
    /// Parameter is passed by reference
    pub by_ref: bool,
    /// The type of the parameter
    pub base: TypeSignature,
}

impl SignatureParameter {
    /// Create a by-value parameter
    #[must_use]
    pub fn new(name: impl Into<String>, base: TypeSignature) -> Self {
        SignatureParameter {
            name: name.into(),
            by_ref: false,
            base,
        }
    }
}

/// Represents a method signature (II.23.2.1)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignatureMethod {
    /// Used to encode the keyword instance in the calling convention, see §II.15.3
    pub has_this: bool,
    /// The return type of this `Method`
    pub return_type: SignatureParameter,
    /// The parameters of this `Method`
    pub params: Vec<SignatureParameter>,
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Void => write!(f, "void"),
            TypeSignature::Boolean => write!(f, "bool"),
            TypeSignature::Char => write!(f, "char"),
            TypeSignature::I1 => write!(f, "int8"),
            TypeSignature::U1 => write!(f, "uint8"),
            TypeSignature::I2 => write!(f, "int16"),
            TypeSignature::U2 => write!(f, "uint16"),
            TypeSignature::I4 => write!(f, "int32"),
            TypeSignature::U4 => write!(f, "uint32"),
            TypeSignature::I8 => write!(f, "int64"),
            TypeSignature::U8 => write!(f, "uint64"),
            TypeSignature::R4 => write!(f, "float32"),
            TypeSignature::R8 => write!(f, "float64"),
            TypeSignature::I => write!(f, "native int"),
            TypeSignature::U => write!(f, "native uint"),
            TypeSignature::String => write!(f, "string"),
            TypeSignature::Object => write!(f, "object"),
            TypeSignature::TypedByRef => write!(f, "typedref"),
            TypeSignature::Ptr(inner) => write!(f, "{inner}*"),
            TypeSignature::ByRef(inner) => write!(f, "{inner}&"),
            TypeSignature::ValueType(token) => write!(f, "valuetype {token}"),
            TypeSignature::Class(token) => write!(f, "class {token}"),
            TypeSignature::SzArray(inner) => write!(f, "{inner}[]"),
            TypeSignature::Array(array) => {
                write!(f, "{}[", array.base)?;
                for _ in 1..array.rank {
                    write!(f, ",")?;
                }
                write!(f, "]")
            }
        }
    }
}
