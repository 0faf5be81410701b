use std::io::{Read, Write};
use uuid::Uuid;

use crate::error::{PacketError, PacketResult};
use crate::types::traits::{ProtocolRead, ProtocolWrite};

/// UUID carried as its 16 raw bytes, most significant first — a fixed-width
/// field like the integer primitives, with no length prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtocolUuid(pub Uuid);

impl ProtocolWrite for ProtocolUuid {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.into_bytes())?;
        Ok(16)
    }
}

impl ProtocolRead for ProtocolUuid {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 16];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((ProtocolUuid(Uuid::from_bytes(buf)), 16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_uuid_wire_is_big_endian_bytes() {
        let uuid = ProtocolUuid(Uuid::from_u128(0x00112233_4455_6677_8899_aabbccddeeff));
        let mut buffer = Vec::new();
        let written = uuid.write_to(&mut buffer).unwrap();
        assert_eq!(written, 16);
        assert_eq!(
            buffer,
            [
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff
            ]
        );
    }

    #[test]
    fn test_uuid_roundtrip() {
        let player_id = ProtocolUuid(Uuid::new_v4());
        let mut buffer = Vec::new();
        let written = player_id.write_to(&mut buffer).unwrap();

        let mut cursor = Cursor::new(buffer);
        let (decoded, read) = ProtocolUuid::read_from(&mut cursor).unwrap();
        assert_eq!(written, read);
        assert_eq!(player_id, decoded);
    }

    #[test]
    fn test_uuid_fixed_width_back_to_back() {
        // no prefix or terminator: two UUIDs are exactly 32 bytes
        let first = ProtocolUuid(Uuid::from_u128(1));
        let second = ProtocolUuid(Uuid::max());

        let mut buffer = Vec::new();
        first.write_to(&mut buffer).unwrap();
        second.write_to(&mut buffer).unwrap();
        assert_eq!(buffer.len(), 32);

        let mut cursor = Cursor::new(buffer);
        assert_eq!(ProtocolUuid::read_from(&mut cursor).unwrap().0, first);
        assert_eq!(ProtocolUuid::read_from(&mut cursor).unwrap().0, second);
    }

    #[test]
    fn test_uuid_truncated() {
        let mut cursor = Cursor::new([0u8; 10]);
        let err = ProtocolUuid::read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, PacketError::UnexpectedEof));
    }
}
