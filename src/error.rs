use std::io;
use thiserror::Error;

/// Represents all possible errors when handling framed packets.
#[derive(Error, Debug)]
pub enum PacketError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected end of stream")]
    UnexpectedEof,

    #[error("VarInt is too long")]
    VarIntTooLong,

    #[error("invalid byte for Boolean field: {0:#04x}")]
    InvalidBool(u8),

    #[error("negative length prefix: {0}")]
    NegativeLength(i32),

    #[error("invalid UTF-8 in String field")]
    InvalidUtf8,

    #[error("invalid frame length: {0}")]
    InvalidFrameLength(i32),

    #[error("packet too big: {length} (max: {max})")]
    PacketTooBig { length: i32, max: i32 },

    #[error("frame not exhausted: {0} bytes remaining")]
    NotExhausted(i32),

    #[error("invalid data length: {0}")]
    InvalidDataLength(i32),

    #[error("zlib stream shorter than declared payload length")]
    ZlibPayloadUnderrun,

    #[error("zlib stream exceeds declared payload length")]
    ZlibPayloadOverrun,

    #[error("trailing data in frame after zlib stream ends")]
    ZlibTrailingData,

    #[error("unknown packet id: {0:#04x}")]
    UnknownPacketId(i32),

    #[error("requested read size exceeds maximum: {requested} (max: {max})")]
    ReadTooBig { requested: usize, max: usize },

    #[error("encryption is not implemented")]
    EncryptionUnsupported,
}

pub type PacketResult<T> = Result<T, PacketError>;

impl PacketError {
    /// Returns the kind of error, similar to how `std::io::Error` works.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            PacketError::Io(e) => e.kind(),
            PacketError::UnexpectedEof | PacketError::ZlibPayloadUnderrun => {
                io::ErrorKind::UnexpectedEof
            }
            PacketError::PacketTooBig { .. } | PacketError::ReadTooBig { .. } => {
                io::ErrorKind::InvalidInput
            }
            PacketError::EncryptionUnsupported => io::ErrorKind::Unsupported,
            _ => io::ErrorKind::InvalidData,
        }
    }

    /// Converts an error returned by a `std::io` read into a `PacketError`.
    ///
    /// Protocol errors that crossed the `io::Error` boundary (the frame and
    /// payload readers implement `std::io::Read`) are recovered intact, and a
    /// bare EOF observed mid-value is promoted to [`PacketError::UnexpectedEof`].
    pub fn from_read(err: io::Error) -> PacketError {
        let err = match err.downcast::<PacketError>() {
            Ok(inner) => return inner,
            Err(err) => err,
        };
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return PacketError::UnexpectedEof;
        }
        PacketError::Io(err)
    }
}

impl From<PacketError> for io::Error {
    fn from(err: PacketError) -> Self {
        match err {
            PacketError::Io(e) => e,
            other => io::Error::new(other.kind(), other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PacketError::PacketTooBig {
            length: 1000,
            max: 100,
        };
        assert_eq!(err.to_string(), "packet too big: 1000 (max: 100)");

        let err = PacketError::NotExhausted(12);
        assert_eq!(err.to_string(), "frame not exhausted: 12 bytes remaining");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::other("test error");
        let packet_err: PacketError = io_err.into();
        assert!(matches!(packet_err, PacketError::Io(_)));
    }

    #[test]
    fn test_roundtrip_through_io_error() {
        let err = PacketError::ZlibTrailingData;
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);

        let recovered = PacketError::from_read(io_err);
        assert!(matches!(recovered, PacketError::ZlibTrailingData));
    }

    #[test]
    fn test_from_read_promotes_eof() {
        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "failed to fill whole buffer");
        assert!(matches!(
            PacketError::from_read(io_err),
            PacketError::UnexpectedEof
        ));
    }
}
