//! Small helpers shared across the crate.

mod ident;

pub use ident::escape_identifier;
