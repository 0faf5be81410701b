use std::io::{Read, Write};

use crate::error::{PacketError, PacketResult};
use crate::types::primitives::Boolean;
use crate::types::traits::{ProtocolRead, ProtocolWrite};
use crate::types::var_numbers::VarInt;

/// Raw byte array prefixed with its length as a VarInt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteArray(pub Vec<u8>);

impl ProtocolWrite for ByteArray {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let len = VarInt(self.0.len() as i32);
        let mut bytes_written = len.write_to(writer)?;
        writer.write_all(&self.0)?;
        bytes_written += self.0.len();
        Ok(bytes_written)
    }
}

impl ProtocolRead for ByteArray {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let (VarInt(length), mut bytes_read) = VarInt::read_from(reader)?;
        if length < 0 {
            return Err(PacketError::NegativeLength(length));
        }
        let mut buffer = vec![0u8; length as usize];
        reader
            .read_exact(&mut buffer)
            .map_err(PacketError::from_read)?;
        bytes_read += length as usize;
        Ok((ByteArray(buffer), bytes_read))
    }
}

/// Array of `T` prefixed with its element count as a VarInt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixedArray<T>(pub Vec<T>);

impl<T: ProtocolWrite> ProtocolWrite for PrefixedArray<T> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let mut written = VarInt(self.0.len() as i32).write_to(writer)?;
        for item in &self.0 {
            written += item.write_to(writer)?;
        }
        Ok(written)
    }
}

impl<T: ProtocolRead> ProtocolRead for PrefixedArray<T> {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let (VarInt(length), mut bytes_read) = VarInt::read_from(reader)?;
        if length < 0 {
            return Err(PacketError::NegativeLength(length));
        }
        let mut items = Vec::with_capacity(length as usize);

        for _ in 0..length {
            let (item, n) = T::read_from(reader)?;
            bytes_read += n;
            items.push(item);
        }

        Ok((PrefixedArray(items), bytes_read))
    }
}

// Optional field: a Boolean presence flag followed by the value when present.
impl<T: ProtocolWrite> ProtocolWrite for Option<T> {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let mut written = Boolean(self.is_some()).write_to(writer)?;
        if let Some(value) = self {
            written += value.write_to(writer)?;
        }
        Ok(written)
    }
}

impl<T: ProtocolRead> ProtocolRead for Option<T> {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let (Boolean(present), mut bytes_read) = Boolean::read_from(reader)?;
        if !present {
            return Ok((None, bytes_read));
        }
        let (value, n) = T::read_from(reader)?;
        bytes_read += n;
        Ok((Some(value), bytes_read))
    }
}
