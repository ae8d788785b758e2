//! Node flags and their per-kind interpretations.
//!
//! The parser attaches one integer of flags to every node. What the bits mean
//! depends on the node kind, so the same value can be read as a name
//! qualification on `AST_NAME` and as an array syntax on `AST_ARRAY`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags::bitflags! {
    /// Raw, kind-specific node flags. Unlisted bits are kept as-is.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE                = 0;

        // AST_NAME
        /// Unqualified name. The `NAME_*` values are this crate's own
        /// encoding, not php-ast's: php-ast has `NAME_FQ = 0` and
        /// `NAME_NOT_FQ = 1`, so its dumps need remapping before decoding.
        const NAME_NOT_FQ         = 0;
        const NAME_FQ             = 1 << 0;
        const NAME_RELATIVE       = 1 << 1;

        // AST_ARRAY
        const ARRAY_SYNTAX_LIST   = 1;
        const ARRAY_SYNTAX_LONG   = 2;
        const ARRAY_SYNTAX_SHORT  = 3;

        // AST_ARRAY_ELEM
        const ARRAY_ELEM_REF      = 1 << 0;
    }
}

impl NodeFlags {
    /// Wrap a raw flag integer without dropping unknown bits.
    #[inline]
    pub fn from_raw(bits: u32) -> Self {
        Self::from_bits_retain(bits)
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<u32> for NodeFlags {
    fn from(bits: u32) -> Self {
        Self::from_raw(bits)
    }
}

impl Serialize for NodeFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for NodeFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        u32::deserialize(deserializer).map(Self::from_raw)
    }
}

/// How an `AST_NAME` is qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameQualification {
    /// `\Foo`
    FullyQualified,
    /// `namespace\Foo`
    Relative,
    /// `Foo`
    Unqualified,
}

impl NameQualification {
    /// Decode from a name node's flags. Values other than the two qualified
    /// forms, including combinations of them, read as unqualified.
    pub fn from_flags(flags: NodeFlags) -> Self {
        if flags == NodeFlags::NAME_FQ {
            NameQualification::FullyQualified
        } else if flags == NodeFlags::NAME_RELATIVE {
            NameQualification::Relative
        } else {
            NameQualification::Unqualified
        }
    }

    pub fn flags(self) -> NodeFlags {
        match self {
            NameQualification::FullyQualified => NodeFlags::NAME_FQ,
            NameQualification::Relative => NodeFlags::NAME_RELATIVE,
            NameQualification::Unqualified => NodeFlags::NAME_NOT_FQ,
        }
    }
}

/// Which syntax an `AST_ARRAY` was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArraySyntax {
    /// `[a, b]`
    Short,
    /// `array(a, b)`
    Long,
    /// `list(a, b)` destructuring.
    List,
}

impl ArraySyntax {
    /// Decode from an array node's flags. Unrecognised values read as short.
    pub fn from_flags(flags: NodeFlags) -> Self {
        if flags == NodeFlags::ARRAY_SYNTAX_LIST {
            ArraySyntax::List
        } else if flags == NodeFlags::ARRAY_SYNTAX_LONG {
            ArraySyntax::Long
        } else {
            ArraySyntax::Short
        }
    }

    pub fn flags(self) -> NodeFlags {
        match self {
            ArraySyntax::Short => NodeFlags::ARRAY_SYNTAX_SHORT,
            ArraySyntax::Long => NodeFlags::ARRAY_SYNTAX_LONG,
            ArraySyntax::List => NodeFlags::ARRAY_SYNTAX_LIST,
        }
    }
}
