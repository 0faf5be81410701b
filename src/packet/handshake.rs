use std::any::Any;
use std::io::{Read, Write};

use crate::error::PacketResult;
use crate::packet::Packet;
use crate::types::{ProtocolRead, ProtocolString, ProtocolWrite, UnsignedShort, VarInt};

pub const SERVERBOUND_HANDSHAKE_ID: i32 = 0x00;

/// First packet of every connection; its `next_state` selects the stage the
/// session moves to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Handshake {
    pub protocol_version: VarInt,
    pub server_address: ProtocolString,
    pub server_port: UnsignedShort,
    pub next_state: VarInt,
}

impl Handshake {
    pub const STATE_STATUS: i32 = 1;
    pub const STATE_LOGIN: i32 = 2;

    pub fn new(protocol_version: i32, server_address: String, server_port: u16, next_state: i32) -> Self {
        Self {
            protocol_version: VarInt(protocol_version),
            server_address: ProtocolString(server_address),
            server_port: UnsignedShort(server_port),
            next_state: VarInt(next_state),
        }
    }

    pub fn is_status_request(&self) -> bool {
        self.next_state.0 == Self::STATE_STATUS
    }

    pub fn is_login_request(&self) -> bool {
        self.next_state.0 == Self::STATE_LOGIN
    }
}

impl Packet for Handshake {
    fn id(&self) -> i32 {
        SERVERBOUND_HANDSHAKE_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.protocol_version.write_to(writer)?;
        self.server_address.write_to(writer)?;
        self.server_port.write_to(writer)?;
        self.next_state.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.protocol_version = VarInt::read_from(reader)?.0;
        self.server_address = ProtocolString::read_from(reader)?.0;
        self.server_port = UnsignedShort::read_from(reader)?.0;
        self.next_state = VarInt::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
