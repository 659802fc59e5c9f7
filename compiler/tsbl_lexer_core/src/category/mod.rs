//! Unicode general category classification.
//!
//! The category data itself comes from `unicode-general-category`; this
//! module maps it onto a fixed, numbered [`Category`] enumeration and keeps
//! the two identifier tables the lexer consults.
//!
//! # Identifier Tables
//!
//! | Table    | Categories                                   |
//! |----------|----------------------------------------------|
//! | start    | `Lu Ll Lt Lm Lo Pc`                          |
//! | continue | `Lu Ll Lt Lm Lo Mn Mc Me Nd Nl Pc`           |
//!
//! ASCII code points take a precomputed fast path that yields the same
//! answers as the tables.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Number of general categories.
pub const CATEGORY_COUNT: usize = 30;

/// Unicode general category.
///
/// Discriminants are stable and index the identifier tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Category {
    /// Other, not assigned.
    Cn = 0,
    /// Letter, uppercase.
    Lu = 1,
    /// Letter, lowercase.
    Ll = 2,
    /// Letter, titlecase.
    Lt = 3,
    /// Letter, modifier.
    Lm = 4,
    /// Letter, other.
    Lo = 5,
    /// Mark, nonspacing.
    Mn = 6,
    /// Mark, spacing combining.
    Mc = 7,
    /// Mark, enclosing.
    Me = 8,
    /// Number, decimal digit.
    Nd = 9,
    /// Number, letter.
    Nl = 10,
    /// Number, other.
    No = 11,
    /// Punctuation, connector.
    Pc = 12,
    /// Punctuation, dash.
    Pd = 13,
    /// Punctuation, open.
    Ps = 14,
    /// Punctuation, close.
    Pe = 15,
    /// Punctuation, initial quote.
    Pi = 16,
    /// Punctuation, final quote.
    Pf = 17,
    /// Punctuation, other.
    Po = 18,
    /// Symbol, math.
    Sm = 19,
    /// Symbol, currency.
    Sc = 20,
    /// Symbol, modifier.
    Sk = 21,
    /// Symbol, other.
    So = 22,
    /// Separator, space.
    Zs = 23,
    /// Separator, line.
    Zl = 24,
    /// Separator, paragraph.
    Zp = 25,
    /// Other, control.
    Cc = 26,
    /// Other, format.
    Cf = 27,
    /// Other, surrogate.
    Cs = 28,
    /// Other, private use.
    Co = 29,
}

impl Category {
    /// All categories in discriminant order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Cn,
        Category::Lu,
        Category::Ll,
        Category::Lt,
        Category::Lm,
        Category::Lo,
        Category::Mn,
        Category::Mc,
        Category::Me,
        Category::Nd,
        Category::Nl,
        Category::No,
        Category::Pc,
        Category::Pd,
        Category::Ps,
        Category::Pe,
        Category::Pi,
        Category::Pf,
        Category::Po,
        Category::Sm,
        Category::Sc,
        Category::Sk,
        Category::So,
        Category::Zs,
        Category::Zl,
        Category::Zp,
        Category::Cc,
        Category::Cf,
        Category::Cs,
        Category::Co,
    ];

    /// Table index of this category.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Two-letter Unicode property value alias (e.g. `"Lu"`).
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Category::Cn => "Cn",
            Category::Lu => "Lu",
            Category::Ll => "Ll",
            Category::Lt => "Lt",
            Category::Lm => "Lm",
            Category::Lo => "Lo",
            Category::Mn => "Mn",
            Category::Mc => "Mc",
            Category::Me => "Me",
            Category::Nd => "Nd",
            Category::Nl => "Nl",
            Category::No => "No",
            Category::Pc => "Pc",
            Category::Pd => "Pd",
            Category::Ps => "Ps",
            Category::Pe => "Pe",
            Category::Pi => "Pi",
            Category::Pf => "Pf",
            Category::Po => "Po",
            Category::Sm => "Sm",
            Category::Sc => "Sc",
            Category::Sk => "Sk",
            Category::So => "So",
            Category::Zs => "Zs",
            Category::Zl => "Zl",
            Category::Zp => "Zp",
            Category::Cc => "Cc",
            Category::Cf => "Cf",
            Category::Cs => "Cs",
            Category::Co => "Co",
        }
    }

    /// Whether code points of this category may begin an identifier.
    #[inline]
    pub fn is_identifier_start(self) -> bool {
        IDENTIFIER_START[self.index()]
    }

    /// Whether code points of this category may continue an identifier.
    #[inline]
    pub fn is_identifier_continue(self) -> bool {
        IDENTIFIER_CONTINUE[self.index()]
    }
}

/// Categories that may continue an identifier: letters, marks, decimal and
/// letter numbers, connector punctuation.
static IDENTIFIER_CONTINUE: [bool; CATEGORY_COUNT] = {
    let mut table = [false; CATEGORY_COUNT];
    let allowed = [
        Category::Lu,
        Category::Ll,
        Category::Lt,
        Category::Lm,
        Category::Lo,
        Category::Mn,
        Category::Mc,
        Category::Me,
        Category::Nd,
        Category::Nl,
        Category::Pc,
    ];
    let mut i = 0;
    while i < allowed.len() {
        table[allowed[i] as usize] = true;
        i += 1;
    }
    table
};

/// Categories that may start an identifier: letters and connector
/// punctuation.
static IDENTIFIER_START: [bool; CATEGORY_COUNT] = {
    let mut table = [false; CATEGORY_COUNT];
    let allowed = [
        Category::Lu,
        Category::Ll,
        Category::Lt,
        Category::Lm,
        Category::Lo,
        Category::Pc,
    ];
    let mut i = 0;
    while i < allowed.len() {
        table[allowed[i] as usize] = true;
        i += 1;
    }
    table
};

/// Precomputed ASCII identifier classes.
///
/// Bit 0: identifier start. Bit 1: identifier continue.
static ASCII_IDENT: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut b: u8 = 0;
    while b < 128 {
        if b.is_ascii_alphabetic() || b == b'_' {
            table[b as usize] = START | CONTINUE;
        } else if b.is_ascii_digit() {
            table[b as usize] = CONTINUE;
        }
        b += 1;
    }
    table
};

const START: u8 = 0b01;
const CONTINUE: u8 = 0b10;

/// General category of `c`.
#[allow(
    unreachable_patterns,
    reason = "upstream enum may grow; unknown categories map to Cn"
)]
pub fn category(c: char) -> Category {
    match get_general_category(c) {
        GeneralCategory::Unassigned => Category::Cn,
        GeneralCategory::UppercaseLetter => Category::Lu,
        GeneralCategory::LowercaseLetter => Category::Ll,
        GeneralCategory::TitlecaseLetter => Category::Lt,
        GeneralCategory::ModifierLetter => Category::Lm,
        GeneralCategory::OtherLetter => Category::Lo,
        GeneralCategory::NonspacingMark => Category::Mn,
        GeneralCategory::SpacingMark => Category::Mc,
        GeneralCategory::EnclosingMark => Category::Me,
        GeneralCategory::DecimalNumber => Category::Nd,
        GeneralCategory::LetterNumber => Category::Nl,
        GeneralCategory::OtherNumber => Category::No,
        GeneralCategory::ConnectorPunctuation => Category::Pc,
        GeneralCategory::DashPunctuation => Category::Pd,
        GeneralCategory::OpenPunctuation => Category::Ps,
        GeneralCategory::ClosePunctuation => Category::Pe,
        GeneralCategory::InitialPunctuation => Category::Pi,
        GeneralCategory::FinalPunctuation => Category::Pf,
        GeneralCategory::OtherPunctuation => Category::Po,
        GeneralCategory::MathSymbol => Category::Sm,
        GeneralCategory::CurrencySymbol => Category::Sc,
        GeneralCategory::ModifierSymbol => Category::Sk,
        GeneralCategory::OtherSymbol => Category::So,
        GeneralCategory::SpaceSeparator => Category::Zs,
        GeneralCategory::LineSeparator => Category::Zl,
        GeneralCategory::ParagraphSeparator => Category::Zp,
        GeneralCategory::Control => Category::Cc,
        GeneralCategory::Format => Category::Cf,
        GeneralCategory::Surrogate => Category::Cs,
        GeneralCategory::PrivateUse => Category::Co,
        _ => Category::Cn,
    }
}

/// Whether `c` may begin an identifier.
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_IDENT[c as usize] & START != 0;
    }
    category(c).is_identifier_start()
}

/// Whether `c` may continue an identifier.
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    if c.is_ascii() {
        return ASCII_IDENT[c as usize] & CONTINUE != 0;
    }
    category(c).is_identifier_continue()
}

/// Whether `c` is a space separator (`Zs`).
#[inline]
pub fn is_space_separator(c: char) -> bool {
    if c.is_ascii() {
        return c == ' ';
    }
    category(c) == Category::Zs
}
