use std::sync::{Arc, Weak};

use bitflags::bitflags;
use strum::{Display, EnumIter};

use crate::{
    metadata::{attributes::TypeAttributes, typesystem::ManagedType},
    Result,
};

/// A smart reference to a `ManagedType` that automatically handles weak references
/// to prevent circular reference memory leaks while providing a clean API
#[derive(Clone, Debug)]
pub struct ManagedTypeRef {
    weak_ref: Weak<ManagedType>,
}

impl ManagedTypeRef {
    /// Create a new `ManagedTypeRef` from a strong reference
    pub fn new(strong_ref: &Arc<ManagedType>) -> Self {
        Self {
            weak_ref: Arc::downgrade(strong_ref),
        }
    }

    /// Get a strong reference to the type, returning None if the type has been dropped
    #[must_use]
    pub fn upgrade(&self) -> Option<Arc<ManagedType>> {
        self.weak_ref.upgrade()
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    /// Classification of a managed type, computed by the resolver
    pub struct TypeKind: u8 {
        /// Instances are stored inline (derives from `System.ValueType`)
        const VALUE_TYPE = 0x01;
        /// Type is an enumeration (derives from `System.Enum`)
        const ENUM = 0x02;
        /// Type is a constructed array type
        const ARRAY = 0x04;
    }
}

/// Shape of a constructed array type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayShape {
    /// The number of dimensions
    pub rank: u32,
    /// Single dimension with a lower bound of zero (`T[]` rather than `T[*]` or `T[,]`)
    pub is_sz: bool,
}

impl ArrayShape {
    /// The shape of a `T[]` vector
    #[must_use]
    pub fn vector() -> Self {
        ArrayShape {
            rank: 1,
            is_sz: true,
        }
    }

    /// The shape of a general array with `rank` dimensions
    #[must_use]
    pub fn multi(rank: u32) -> Self {
        ArrayShape { rank, is_sz: false }
    }
}

/// How the instance fields of a type are ordered in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum LayoutPolicy {
    /// The runtime chooses the order
    Automatic,
    /// Declaration order
    Sequential,
    /// Every field carries an explicit offset
    Explicit,
}

impl LayoutPolicy {
    /// Decode the layout bits of a `TypeAttributes` word
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] for the reserved layout value `0x18`.
    pub fn from_flags(flags: u32) -> Result<Self> {
        match flags & TypeAttributes::LAYOUT_MASK {
            TypeAttributes::AUTO_LAYOUT => Ok(LayoutPolicy::Automatic),
            TypeAttributes::SEQUENTIAL_LAYOUT => Ok(LayoutPolicy::Sequential),
            TypeAttributes::EXPLICIT_LAYOUT => Ok(LayoutPolicy::Explicit),
            other => Err(malformed_error!("Reserved type layout - 0x{:02x}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_layout_from_flags() {
        assert_eq!(
            LayoutPolicy::from_flags(TypeAttributes::PUBLIC).unwrap(),
            LayoutPolicy::Automatic
        );
        assert_eq!(
            LayoutPolicy::from_flags(TypeAttributes::SEQUENTIAL_LAYOUT | TypeAttributes::SEALED)
                .unwrap(),
            LayoutPolicy::Sequential
        );
        assert_eq!(
            LayoutPolicy::from_flags(TypeAttributes::EXPLICIT_LAYOUT).unwrap(),
            LayoutPolicy::Explicit
        );
        assert!(matches!(
            LayoutPolicy::from_flags(TypeAttributes::LAYOUT_MASK),
            Err(Error::Malformed { .. })
        ));
    }

    #[test]
    fn test_layout_display() {
        use strum::IntoEnumIterator;

        assert_eq!(LayoutPolicy::Sequential.to_string(), "Sequential");
        let names: Vec<_> = LayoutPolicy::iter().map(|policy| policy.to_string()).collect();
        assert_eq!(names, vec!["Automatic", "Sequential", "Explicit"]);
    }

    #[test]
    fn test_array_shapes() {
        assert_eq!(
            ArrayShape::vector(),
            ArrayShape {
                rank: 1,
                is_sz: true
            }
        );
        assert!(!ArrayShape::multi(1).is_sz);
        assert_eq!(ArrayShape::multi(3).rank, 3);
    }

    #[test]
    fn test_type_ref_weak() {
        let strong = Arc::new(ManagedType::new(
            crate::metadata::token::Token::type_def(1),
            "System",
            "Object",
            0,
            TypeKind::empty(),
        ));
        let weak = ManagedTypeRef::new(&strong);
        assert_eq!(weak.upgrade().unwrap().name, "Object");

        drop(strong);
        assert!(weak.upgrade().is_none());
    }
}
