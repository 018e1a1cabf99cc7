//! CBOR major types and well-known initial bytes.

/// Major type of a CBOR data item, the high 3 bits of the initial byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MajorKind {
    /// Major type 0.
    UnsignedInt,
    /// Major type 1.
    NegativeInt,
    /// Major type 2.
    ByteString,
    /// Major type 3.
    TextString,
    /// Major type 4.
    Array,
    /// Major type 5.
    Map,
    /// Major type 6.
    Tag,
    /// Major type 7: floats and simple values.
    Other,
}

impl MajorKind {
    /// The major type number.
    pub const fn code(self) -> u8 {
        match self {
            Self::UnsignedInt => 0,
            Self::NegativeInt => 1,
            Self::ByteString => 2,
            Self::TextString => 3,
            Self::Array => 4,
            Self::Map => 5,
            Self::Tag => 6,
            Self::Other => 7,
        }
    }
}

/// The initial byte of a data item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Major(u8);

impl Major {
    /// Builds the initial byte from a major type and additional info.
    pub const fn new(kind: MajorKind, info: u8) -> Self {
        Self(kind.code() << 5 | (info & 0x1f))
    }

    /// Returns the major type.
    pub const fn kind(self) -> MajorKind {
        match self.0 >> 5 {
            0 => MajorKind::UnsignedInt,
            1 => MajorKind::NegativeInt,
            2 => MajorKind::ByteString,
            3 => MajorKind::TextString,
            4 => MajorKind::Array,
            5 => MajorKind::Map,
            6 => MajorKind::Tag,
            _ => MajorKind::Other,
        }
    }

    /// Returns the additional info, the low 5 bits of the initial byte.
    pub const fn info(self) -> u8 {
        self.0 & 0x1f
    }
}

impl From<u8> for Major {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl From<Major> for u8 {
    fn from(major: Major) -> Self {
        major.0
    }
}

/// Additional info announcing a one byte argument.
pub const INFO_U8: u8 = 24;
/// Additional info announcing a two byte argument.
pub const INFO_U16: u8 = 25;
/// Additional info announcing a four byte argument.
pub const INFO_U32: u8 = 26;
/// Additional info announcing an eight byte argument.
pub const INFO_U64: u8 = 27;
/// Additional info of indefinite length items and of the break code.
pub const INFO_INDEFINITE: u8 = 31;

/// `false`
pub const FALSE: u8 = 0xf4;
/// `true`
pub const TRUE: u8 = 0xf5;
/// `null`
pub const NULL: u8 = 0xf6;
/// `undefined`
pub const UNDEFINED: u8 = 0xf7;
/// Simple value with a one byte argument.
pub const SIMPLE_U8: u8 = 0xf8;
/// Half precision float.
pub const F16: u8 = 0xf9;
/// Single precision float.
pub const F32: u8 = 0xfa;
/// Double precision float.
pub const F64: u8 = 0xfb;
/// Break code terminating indefinite length items.
pub const BREAK: u8 = 0xff;

/// Tag number of a CID link.
pub const LINK_TAG: u64 = 42;
/// Multibase identity prefix in front of the CID bytes of a link.
pub const MULTIBASE_IDENTITY: u8 = 0x00;
