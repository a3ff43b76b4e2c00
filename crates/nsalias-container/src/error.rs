use thiserror::Error as ThisError;

///
/// ContainerError
///
/// Raised when a byte stream is not a well-formed unit container, or when a
/// model cannot be re-encoded within the format's u16/u32 bookkeeping limits.
/// Never retried; callers surface it as a parse failure.
///

#[derive(Debug, ThisError)]
pub enum ContainerError {
    #[error("bad magic 0x{0:08X}")]
    BadMagic(u32),

    #[error("unsupported container version {0}")]
    UnsupportedVersion(u16),

    #[error("truncated container at offset {0}")]
    Truncated(usize),

    #[error("unknown pool tag {tag} in entry {index}")]
    UnknownTag { tag: u8, index: u16 },

    #[error("pool index {0} out of range")]
    BadPoolIndex(u16),

    #[error("pool index {index} is not a {expected} entry")]
    WrongEntryKind { index: u16, expected: &'static str },

    #[error("invalid utf-8 in pool entry {0}")]
    InvalidUtf8(u16),

    #[error("malformed descriptor '{0}'")]
    BadDescriptor(String),

    #[error("{0} trailing bytes after unit body")]
    TrailingBytes(usize),

    #[error("constant pool overflow ({0} entries)")]
    PoolOverflow(usize),

    #[error("string too long for pool entry ({0} bytes)")]
    StringTooLong(usize),

    #[error("attribute payload too large ({0} bytes)")]
    AttributeTooLarge(usize),

    #[error("too many {kind} entries ({count})")]
    CountOverflow { kind: &'static str, count: usize },
}
