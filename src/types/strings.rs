use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

use crate::error::{PacketError, PacketResult};
use crate::types::traits::{ProtocolRead, ProtocolWrite};
use crate::types::var_numbers::VarInt;

/// UTF-8 string prefixed with its byte length as a VarInt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolString(pub String);

impl ProtocolWrite for ProtocolString {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let bytes = self.0.as_bytes();
        let len = VarInt(bytes.len() as i32);
        let mut bytes_written = len.write_to(writer)?;
        writer.write_all(bytes)?;
        bytes_written += bytes.len();
        Ok(bytes_written)
    }
}

impl ProtocolRead for ProtocolString {
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

        let string = String::from_utf8(buffer).map_err(|_| PacketError::InvalidUtf8)?;

        Ok((ProtocolString(string), bytes_read))
    }
}

// Chat type alias (JSON text component carried as a plain string)
pub type Chat = ProtocolString;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_protocol_string_roundtrip() {
        let samples = [
            "",
            "mc.example.org",
            "{\"text\":\"§6Welcome back\"}",
            "день и ночь ⛏",
        ];

        for sample in samples {
            let value = ProtocolString(sample.to_string());
            let mut buffer = Vec::new();
            let written = value.write_to(&mut buffer).unwrap();
            // length prefix counts bytes, not chars
            assert_eq!(written, VarInt(sample.len() as i32).len() + sample.len());

            let mut cursor = Cursor::new(buffer);
            let (decoded, read) = ProtocolString::read_from(&mut cursor).unwrap();

            assert_eq!(written, read);
            assert_eq!(value, decoded);
        }
    }

    #[test]
    fn test_known_encodings() {
        let mut buffer = Vec::new();
        ProtocolString(String::new()).write_to(&mut buffer).unwrap();
        assert_eq!(buffer, [0x00]);

        let mut buffer = Vec::new();
        ProtocolString("Hello".to_string())
            .write_to(&mut buffer)
            .unwrap();
        assert_eq!(buffer, [0x05, 0x48, 0x65, 0x6c, 0x6c, 0x6f]);

        // 128 bytes forces a two-byte length prefix
        let long = "a".repeat(128);
        let mut buffer = Vec::new();
        let written = ProtocolString(long.clone()).write_to(&mut buffer).unwrap();
        assert_eq!(written, 130);
        assert_eq!(&buffer[..2], &[0x80, 0x01]);
        assert_eq!(&buffer[2..], long.as_bytes());
    }

    #[test]
    fn test_truncated_string() {
        let mut cursor = Cursor::new([0x05, 0x48, 0x65, 0x6c]);
        let err = ProtocolString::read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, PacketError::UnexpectedEof));
    }

    #[test]
    fn test_negative_length() {
        // VarInt -1 as the length prefix
        let mut cursor = Cursor::new([0xff, 0xff, 0xff, 0xff, 0x0f]);
        let err = ProtocolString::read_from(&mut cursor).unwrap_err();
        assert!(matches!(err, PacketError::NegativeLength(-1)));
    }
}
