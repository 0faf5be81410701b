use bytes::{BufMut, BytesMut};
use std::io::{Read, Write};

use crate::error::{PacketError, PacketResult};
use crate::types::traits::{ProtocolRead, ProtocolWrite, WriteToBytes};
use crate::types::MAX_VARINT_LEN;

const SEGMENT_BITS: u8 = 0x7F;
const CONTINUE_BIT: u8 = 0x80;

/// Variable-length 32-bit signed integer, LSB-first septets with a
/// continuation bit in the high bit of each byte. Negative values
/// sign-extend and always occupy the full 5 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VarInt(pub i32);

impl VarInt {
    /// Number of bytes the encoded form occupies (1 to 5).
    pub fn len(&self) -> usize {
        let mut value = self.0 as u32;
        let mut size = 1;
        while (value & !(SEGMENT_BITS as u32)) != 0 {
            value >>= 7;
            size += 1;
        }
        size
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl ProtocolWrite for VarInt {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let mut value = self.0 as u32;
        let mut bytes_written = 0;

        loop {
            let mut byte = (value as u8) & SEGMENT_BITS;
            value >>= 7;

            if value != 0 {
                byte |= CONTINUE_BIT;
            }

            writer.write_all(&[byte])?;
            bytes_written += 1;

            if value == 0 {
                return Ok(bytes_written);
            }
        }
    }
}

impl ProtocolRead for VarInt {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut value: u32 = 0;
        let mut buf = [0u8; 1];

        for i in 0..MAX_VARINT_LEN {
            reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
            let byte = buf[0];
            value |= ((byte & SEGMENT_BITS) as u32) << (7 * i);

            if byte & CONTINUE_BIT == 0 {
                return Ok((VarInt(value as i32), i + 1));
            }
        }

        Err(PacketError::VarIntTooLong)
    }
}

impl WriteToBytes for VarInt {
    fn write_to_bytes(&self, bytes: &mut BytesMut) -> PacketResult<usize> {
        let mut value = self.0 as u32;
        let mut bytes_written = 0;

        loop {
            let mut byte = (value as u8) & SEGMENT_BITS;
            value >>= 7;

            if value != 0 {
                byte |= CONTINUE_BIT;
            }

            bytes.put_u8(byte);
            bytes_written += 1;

            if value == 0 {
                return Ok(bytes_written);
            }
        }
    }
}
