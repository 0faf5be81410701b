use std::io::{Read, Write};

use crate::error::{PacketError, PacketResult};
use crate::types::traits::{ProtocolRead, ProtocolWrite};

// Boolean type. The wire form is strict: exactly 0x00 or 0x01.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Boolean(pub bool);

impl ProtocolWrite for Boolean {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let byte = if self.0 { 0x01 } else { 0x00 };
        writer.write_all(&[byte])?;
        Ok(1)
    }
}

impl ProtocolRead for Boolean {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        match buf[0] {
            0x00 => Ok((Boolean(false), 1)),
            0x01 => Ok((Boolean(true), 1)),
            other => Err(PacketError::InvalidBool(other)),
        }
    }
}

// Byte type (signed 8-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Byte(pub i8);

impl ProtocolWrite for Byte {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&[self.0 as u8])?;
        Ok(1)
    }
}

impl ProtocolRead for Byte {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 1];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((Byte(buf[0] as i8), 1))
    }
}

// Short type (signed 16-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Short(pub i16);

impl ProtocolWrite for Short {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.to_be_bytes())?;
        Ok(2)
    }
}

impl ProtocolRead for Short {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((Short(i16::from_be_bytes(buf)), 2))
    }
}

// UnsignedShort type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnsignedShort(pub u16);

impl ProtocolWrite for UnsignedShort {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.to_be_bytes())?;
        Ok(2)
    }
}

impl ProtocolRead for UnsignedShort {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 2];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((UnsignedShort(u16::from_be_bytes(buf)), 2))
    }
}

// Int type (signed 32-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Int(pub i32);

impl ProtocolWrite for Int {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.to_be_bytes())?;
        Ok(4)
    }
}

impl ProtocolRead for Int {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((Int(i32::from_be_bytes(buf)), 4))
    }
}

// Long type (signed 64-bit)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Long(pub i64);

impl ProtocolWrite for Long {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.to_be_bytes())?;
        Ok(8)
    }
}

impl ProtocolRead for Long {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 8];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((Long(i64::from_be_bytes(buf)), 8))
    }
}

// Float type
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Float(pub f32);

impl ProtocolWrite for Float {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.to_be_bytes())?;
        Ok(4)
    }
}

impl ProtocolRead for Float {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 4];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((Float(f32::from_be_bytes(buf)), 4))
    }
}

// Double type
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Double(pub f64);

impl ProtocolWrite for Double {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        writer.write_all(&self.0.to_be_bytes())?;
        Ok(8)
    }
}

impl ProtocolRead for Double {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let mut buf = [0u8; 8];
        reader.read_exact(&mut buf).map_err(PacketError::from_read)?;
        Ok((Double(f64::from_be_bytes(buf)), 8))
    }
}
