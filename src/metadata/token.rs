use std::fmt;

/// Metadata table identifiers that appear in the high byte of a [`Token`].
///
/// Only the tables whose rows become native declarations are listed here.
#[allow(non_snake_case)]
pub mod TableKind {
    /// `TypeDef` table (0x02)
    pub const TYPE_DEF: u8 = 0x02;
    /// `Field` table (0x04)
    pub const FIELD: u8 = 0x04;
    /// `MethodDef` table (0x06)
    pub const METHOD_DEF: u8 = 0x06;
}

/// A metadata token identifying a resolved type, field or method.
///
/// Tokens consist of a 32-bit value where:
/// - The high byte (bits 24-31) indicates the table
/// - The low 24 bits (bits 0-23) indicate the row index within that table
///
/// For fields the row index doubles as the declaration ordinal: rows of the `Field` table are
/// stored in the order the fields were declared, which is what sequential layout relies on.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(pub u32);

impl Token {
    /// Creates a new token from a raw 32-bit value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Creates a token from a table identifier and a row index
    #[must_use]
    pub fn from_parts(table: u8, row: u32) -> Self {
        Token((u32::from(table) << 24) | (row & 0x00FF_FFFF))
    }

    /// `TypeDef` token for `row`
    #[must_use]
    pub fn type_def(row: u32) -> Self {
        Self::from_parts(TableKind::TYPE_DEF, row)
    }

    /// `Field` token for `row`
    #[must_use]
    pub fn field(row: u32) -> Self {
        Self::from_parts(TableKind::FIELD, row)
    }

    /// `MethodDef` token for `row`
    #[must_use]
    pub fn method_def(row: u32) -> Self {
        Self::from_parts(TableKind::METHOD_DEF, row)
    }

    /// Returns the raw token value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extracts the table type from the token (high byte)
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Extracts the row index from the token (low 24 bits)
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
