use bytes::BytesMut;
use std::io::{Read, Write};

use crate::error::PacketResult;

/// A field type that can serialize itself to a byte-oriented writer.
///
/// The `?Sized` bound keeps the trait usable through `&mut dyn Write`, which
/// the object-safe [`crate::packet::Packet`] trait relies on.
pub trait ProtocolWrite {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize>;
}

/// A field type that can deserialize itself from a byte-oriented reader.
///
/// Returns the decoded value together with the number of bytes consumed.
pub trait ProtocolRead: Sized {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)>;
}

/// Infallible-destination fast path for building frame headers in memory.
pub trait WriteToBytes {
    fn write_to_bytes(&self, bytes: &mut BytesMut) -> PacketResult<usize>;
}
