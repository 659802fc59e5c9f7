//! Token kinds and their display names.
//!
//! Discriminants are stable ids grouped by purpose:
//!
//! | Range    | Group                                   |
//! |----------|-----------------------------------------|
//! | 0        | `NewLine`                               |
//! | 1-24     | operators and punctuation               |
//! | 25-59    | reserved keywords                       |
//! | 60-64    | value-carrying literal classes          |
//! | -2       | `EndOfFile`                             |
//!
//! Error kinds ([`LexErrorKind`]) occupy the remaining negative ids, so
//! [`name_of`] can describe any id a legacy consumer hands it.

use crate::LexErrorKind;

/// Kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum TokenKind {
    NewLine = 0,

    // === Operators & Punctuation ===
    Plus = 1,
    Increment,
    Minus,
    Decrement,
    Divide,
    Multiply,
    Power,
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Access,
    Assign,
    Not,
    Equals,
    NotEquals,
    Greater,
    GreaterEquals,
    Less,
    LessEquals,
    RShift,
    LShift = 24,

    // === Keywords ===
    True = 25,
    False,
    Null,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
    Char,
    String,
    Struct,
    Class,
    Public,
    Private,
    Protected,
    Super,
    Def,
    Return,
    Pure,
    For,
    While,
    If,
    Else,
    Elif,
    Switch,
    Break,
    Continue,
    Try,
    Catch,
    Throw = 59,

    // === Literal Classes ===
    IntegerLiteral = 60,
    RealLiteral,
    StringLiteral,
    LongStringLiteral,
    Identifier = 64,

    /// The source is exhausted. Returned on every call once reached.
    EndOfFile = -2,
}

/// Tokens with non-negative ids, indexed by id.
const BY_ID: [TokenKind; 65] = [
    TokenKind::NewLine,
    TokenKind::Plus,
    TokenKind::Increment,
    TokenKind::Minus,
    TokenKind::Decrement,
    TokenKind::Divide,
    TokenKind::Multiply,
    TokenKind::Power,
    TokenKind::OpenParen,
    TokenKind::CloseParen,
    TokenKind::OpenBracket,
    TokenKind::CloseBracket,
    TokenKind::OpenBrace,
    TokenKind::CloseBrace,
    TokenKind::Access,
    TokenKind::Assign,
    TokenKind::Not,
    TokenKind::Equals,
    TokenKind::NotEquals,
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Less,
    TokenKind::LessEquals,
    TokenKind::RShift,
    TokenKind::LShift,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::Int8,
    TokenKind::Int16,
    TokenKind::Int32,
    TokenKind::Int64,
    TokenKind::Uint8,
    TokenKind::Uint16,
    TokenKind::Uint32,
    TokenKind::Uint64,
    TokenKind::Float,
    TokenKind::Double,
    TokenKind::Char,
    TokenKind::String,
    TokenKind::Struct,
    TokenKind::Class,
    TokenKind::Public,
    TokenKind::Private,
    TokenKind::Protected,
    TokenKind::Super,
    TokenKind::Def,
    TokenKind::Return,
    TokenKind::Pure,
    TokenKind::For,
    TokenKind::While,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::Elif,
    TokenKind::Switch,
    TokenKind::Break,
    TokenKind::Continue,
    TokenKind::Try,
    TokenKind::Catch,
    TokenKind::Throw,
    TokenKind::IntegerLiteral,
    TokenKind::RealLiteral,
    TokenKind::StringLiteral,
    TokenKind::LongStringLiteral,
    TokenKind::Identifier,
];

impl TokenKind {
    /// Every kind with a non-negative id, in id order.
    pub const ALL: &'static [TokenKind] = &BY_ID;

    /// Stable numeric id.
    #[inline]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Kind for a numeric id, `None` if no token kind has that id.
    pub fn from_id(id: i32) -> Option<TokenKind> {
        if id == TokenKind::EndOfFile.id() {
            return Some(TokenKind::EndOfFile);
        }
        usize::try_from(id)
            .ok()
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Exact source text for fixed-text kinds.
    ///
    /// `None` for literal classes and `EndOfFile`, whose text varies or
    /// does not exist.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            TokenKind::NewLine => "\n",
            TokenKind::Plus => "+",
            TokenKind::Increment => "++",
            TokenKind::Minus => "-",
            TokenKind::Decrement => "--",
            TokenKind::Divide => "/",
            TokenKind::Multiply => "*",
            TokenKind::Power => "**",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenBrace => "{",
            TokenKind::CloseBrace => "}",
            TokenKind::Access => ".",
            TokenKind::Assign => "=",
            TokenKind::Not => "!",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::RShift => ">>",
            TokenKind::LShift => "<<",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Null => "null",
            TokenKind::Int8 => "int8",
            TokenKind::Int16 => "int16",
            TokenKind::Int32 => "int32",
            TokenKind::Int64 => "int64",
            TokenKind::Uint8 => "uint8",
            TokenKind::Uint16 => "uint16",
            TokenKind::Uint32 => "uint32",
            TokenKind::Uint64 => "uint64",
            TokenKind::Float => "float",
            TokenKind::Double => "double",
            TokenKind::Char => "char",
            TokenKind::String => "string",
            TokenKind::Struct => "struct",
            TokenKind::Class => "class",
            TokenKind::Public => "public",
            TokenKind::Private => "private",
            TokenKind::Protected => "protected",
            TokenKind::Super => "super",
            TokenKind::Def => "def",
            TokenKind::Return => "return",
            TokenKind::Pure => "pure",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Elif => "elif",
            TokenKind::Switch => "switch",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Try => "try",
            TokenKind::Catch => "catch",
            TokenKind::Throw => "throw",
            TokenKind::IntegerLiteral
            | TokenKind::RealLiteral
            | TokenKind::StringLiteral
            | TokenKind::LongStringLiteral
            | TokenKind::Identifier
            | TokenKind::EndOfFile => return None,
        })
    }

    /// Human-readable name, used in diagnostics.
    ///
    /// Fixed-text kinds are named by their text (`NewLine` as `\n`, escaped).
    /// Literal classes get a placeholder such as `"integer literal"`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::NewLine => "\\n",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::RealLiteral => "real literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::LongStringLiteral => "long string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::EndOfFile => "end of file",
            other => match other.lexeme() {
                Some(text) => text,
                None => "",
            },
        }
    }

    pub const fn is_operator(self) -> bool {
        matches!(self.id(), 1..=24)
    }

    pub const fn is_keyword(self) -> bool {
        matches!(self.id(), 25..=59)
    }

    /// Kinds whose value is an owned string.
    pub const fn carries_string(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::LongStringLiteral
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Name for any token or error id.
///
/// Covers every [`TokenKind`] and every [`LexErrorKind`] code. Unknown ids
/// are reported as `"invalid token id"`.
pub fn name_of(id: i32) -> &'static str {
    if let Some(kind) = TokenKind::from_id(id) {
        return kind.name();
    }
    match LexErrorKind::from_code(id) {
        Some(kind) => kind.name(),
        None => "invalid token id",
    }
}
