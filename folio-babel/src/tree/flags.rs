//! Text format flags
//!
//! The editor stores inline formatting of a text node as an integer bitmask.
//! Each bit is an independent flag; any subset may be set at once.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bitset of inline formatting flags on a text node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextFormat(u32);

impl TextFormat {
    pub const BOLD: TextFormat = TextFormat(1);
    pub const ITALIC: TextFormat = TextFormat(1 << 1);
    pub const STRIKETHROUGH: TextFormat = TextFormat(1 << 2);
    pub const UNDERLINE: TextFormat = TextFormat(1 << 3);
    pub const CODE: TextFormat = TextFormat(1 << 4);

    /// The flags both serializers know, in bit order.
    pub const KNOWN: [(TextFormat, &'static str); 5] = [
        (TextFormat::BOLD, "bold"),
        (TextFormat::ITALIC, "italic"),
        (TextFormat::STRIKETHROUGH, "strikethrough"),
        (TextFormat::UNDERLINE, "underline"),
        (TextFormat::CODE, "code"),
    ];

    pub const fn empty() -> Self {
        TextFormat(0)
    }

    /// Keeps every bit, including ones with no meaning here (the editor also
    /// uses higher bits for sub/superscript and highlight).
    pub const fn from_bits(bits: u32) -> Self {
        TextFormat(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `other` is set in `self`.
    pub const fn contains(self, other: TextFormat) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: TextFormat) {
        self.0 |= other.0;
    }
}

impl BitOr for TextFormat {
    type Output = TextFormat;

    fn bitor(self, rhs: TextFormat) -> TextFormat {
        TextFormat(self.0 | rhs.0)
    }
}

impl BitOrAssign for TextFormat {
    fn bitor_assign(&mut self, rhs: TextFormat) {
        self.insert(rhs);
    }
}

impl From<u32> for TextFormat {
    fn from(bits: u32) -> Self {
        TextFormat::from_bits(bits)
    }
}

impl fmt::Debug for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = TextFormat::KNOWN
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "TextFormat({:#07b}: {})", self.0, names.join(" | "))
    }
}
