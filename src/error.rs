use core::fmt;

/// Represents an error while decoding a raw MIDI message.
///
/// This type wraps an `ErrorKind`, describing which part of the MIDI wire format was not
/// respected.
///
/// If the `std` feature is enabled, this type implements `std::error::Error`.
/// Otherwise, only `Display` and `Debug` are implemented.
///
/// Most callers will not need this type at all: [`decode`](fn.decode.html) collapses every
/// failure into `None`.
/// It exists for callers that want to log or count rejected input, through
/// [`Message::parse`](enum.Message.html#method.parse).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}
impl Error {
    /// Create a new error with the given `ErrorKind`.
    #[inline]
    pub fn new(kind: ErrorKind) -> Error {
        Error { kind }
    }

    /// More information about the error itself.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Error {
        Error::new(kind)
    }
}
impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The reason a byte group could not be decoded.
///
/// The plain [`decode`](fn.decode.html) function does not tell these apart; both a short buffer
/// and an unknown status byte simply yield `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Fewer than 2 bytes were supplied.
    ///
    /// A status byte plus at least one data byte is the minimum accepted input, even for system
    /// messages that logically carry no data.
    TooShort {
        /// The length of the rejected input.
        len: usize,
    },
    /// The first byte does not map to any supported message category.
    ///
    /// This includes data bytes (`0x00 ..= 0x7F`) in status position and unsupported system
    /// messages such as SysEx (`0xF0`).
    UnrecognizedStatus(u8),
    /// A data byte of a channel message has its top bit set.
    ///
    /// This kind of error is not emitted by default, only if the `strict` crate feature is
    /// enabled.
    DataOutOfRange(u8),
}
impl ErrorKind {
    /// Get an informative message on what part of the MIDI format was not respected.
    #[inline]
    pub fn message(&self) -> &'static str {
        match *self {
            ErrorKind::TooShort { .. } => "message shorter than 2 bytes",
            ErrorKind::UnrecognizedStatus(_) => "unrecognized status byte",
            ErrorKind::DataOutOfRange(_) => "data byte with top bit set",
        }
    }
}
impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ErrorKind::TooShort { len } => {
                write!(f, "invalid midi: {} (got {} bytes)", self.message(), len)
            }
            ErrorKind::UnrecognizedStatus(byte) | ErrorKind::DataOutOfRange(byte) => {
                write!(f, "invalid midi: {} (0x{:02X})", self.message(), byte)
            }
        }
    }
}

/// The result type used by the MIDI decoder.
pub type Result<T> = StdResult<T, Error>;
pub(crate) use core::result::Result as StdResult;
