//! Field ordering for emitted structs.
//!
//! Instance fields are ordered according to the type's [`LayoutPolicy`]:
//!
//! - **Automatic** - stable sort by the registry's [`crate::naming::LayoutOrder`] key of each
//!   field type. Fields with equal keys keep their declaration order.
//! - **Sequential** - sort by declaration ordinal; the result must be strictly increasing.
//! - **Explicit** - not supported, overlapping fields have no struct representation.
//!
//! Static fields are separated out and keep the order of the type's field list.

use crate::{
    metadata::{
        member::FieldMemberRc,
        typesystem::{LayoutPolicy, ManagedType},
    },
    naming::NameRegistry,
    Error, Result,
};

/// The fields of one type, split and ordered for emission
#[derive(Debug, Clone, Default)]
pub struct FieldLayout {
    /// Instance fields in emission order
    pub instance: Vec<FieldMemberRc>,
    /// Static fields in declaration order
    pub statics: Vec<FieldMemberRc>,
}

impl FieldLayout {
    /// Split and order the fields of `ty`.
    ///
    /// ## Arguments
    /// * 'ty'       - The type whose fields are laid out
    /// * 'registry' - Supplies ordering keys for automatic layout
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedLayout`] for explicit layout, even if the type has no fields,
    /// [`Error::LayoutOrderingViolation`] if sequential ordinals are not unique, or any error
    /// the registry reports for an ordering key.
    pub fn compute(ty: &ManagedType, registry: &dyn NameRegistry) -> Result<FieldLayout> {
        let policy = ty.layout()?;

        let (statics, instance): (Vec<_>, Vec<_>) = ty
            .fields
            .iter()
            .map(|(_, field)| field.clone())
            .partition(|field| field.is_static());

        let instance = match policy {
            LayoutPolicy::Automatic => Self::automatic(instance, registry)?,
            LayoutPolicy::Sequential => Self::sequential(ty, instance)?,
            LayoutPolicy::Explicit => {
                return Err(Error::UnsupportedLayout {
                    type_name: ty.name_key(),
                })
            }
        };

        Ok(FieldLayout { instance, statics })
    }

    fn automatic(
        fields: Vec<FieldMemberRc>,
        registry: &dyn NameRegistry,
    ) -> Result<Vec<FieldMemberRc>> {
        let mut keyed = fields
            .into_iter()
            .map(|field| Ok((registry.layout_order(&field.signature)?, field)))
            .collect::<Result<Vec<_>>>()?;

        // sort_by_key is stable, ties keep declaration order
        keyed.sort_by_key(|(order, _)| *order);
        Ok(keyed.into_iter().map(|(_, field)| field).collect())
    }

    fn sequential(ty: &ManagedType, mut fields: Vec<FieldMemberRc>) -> Result<Vec<FieldMemberRc>> {
        fields.sort_by_key(|field| field.ordinal());

        if let Some(pair) = fields
            .windows(2)
            .find(|pair| pair[0].ordinal() >= pair[1].ordinal())
        {
            return Err(Error::LayoutOrderingViolation {
                type_name: ty.name_key(),
                previous: pair[0].token,
                next: pair[1].token,
            });
        }

        Ok(fields)
    }
}
