use std::any::Any;
use std::io::{Read, Write};

use crate::error::PacketResult;
use crate::packet::Packet;
use crate::types::{Long, ProtocolRead, ProtocolString, ProtocolWrite};

pub const SERVERBOUND_STATUS_REQUEST_ID: i32 = 0x00;
pub const SERVERBOUND_PING_REQUEST_ID: i32 = 0x01;
pub const CLIENTBOUND_STATUS_RESPONSE_ID: i32 = 0x00;

/// Empty request for the server list status document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusRequest;

impl Packet for StatusRequest {
    fn id(&self) -> i32 {
        SERVERBOUND_STATUS_REQUEST_ID
    }

    fn encode(&self, _writer: &mut dyn Write) -> PacketResult<()> {
        Ok(())
    }

    fn decode(&mut self, _reader: &mut dyn Read) -> PacketResult<()> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PingRequest {
    pub timestamp: Long,
}

impl PingRequest {
    pub fn new(timestamp: i64) -> Self {
        Self {
            timestamp: Long(timestamp),
        }
    }
}

impl Packet for PingRequest {
    fn id(&self) -> i32 {
        SERVERBOUND_PING_REQUEST_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.timestamp.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.timestamp = Long::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Status document carried as a JSON string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResponse {
    pub response: ProtocolString,
}

impl StatusResponse {
    pub fn new(response: String) -> Self {
        Self {
            response: ProtocolString(response),
        }
    }
}

impl Packet for StatusResponse {
    fn id(&self) -> i32 {
        CLIENTBOUND_STATUS_RESPONSE_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.response.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.response = ProtocolString::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
