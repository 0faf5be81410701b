use std::any::Any;
use std::io::{Read, Write};

use crate::error::PacketResult;
use crate::packet::Packet;
use crate::types::{
    Boolean, ByteArray, Chat, PrefixedArray, ProtocolRead, ProtocolString, ProtocolUuid,
    ProtocolWrite, VarInt,
};

pub const SERVERBOUND_LOGIN_START_ID: i32 = 0x00;
pub const SERVERBOUND_ENCRYPTION_RESPONSE_ID: i32 = 0x01;
pub const SERVERBOUND_LOGIN_ACKNOWLEDGE_ID: i32 = 0x03;

pub const CLIENTBOUND_LOGIN_DISCONNECT_ID: i32 = 0x00;
pub const CLIENTBOUND_ENCRYPTION_REQUEST_ID: i32 = 0x01;
pub const CLIENTBOUND_LOGIN_SUCCESS_ID: i32 = 0x02;
pub const CLIENTBOUND_SET_COMPRESSION_ID: i32 = 0x03;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginStart {
    pub name: ProtocolString,
    pub player_uuid: ProtocolUuid,
}

impl Packet for LoginStart {
    fn id(&self) -> i32 {
        SERVERBOUND_LOGIN_START_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.name.write_to(writer)?;
        self.player_uuid.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.name = ProtocolString::read_from(reader)?.0;
        self.player_uuid = ProtocolUuid::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptionResponse {
    pub shared_secret: ByteArray,
    pub verify_token: ByteArray,
}

impl Packet for EncryptionResponse {
    fn id(&self) -> i32 {
        SERVERBOUND_ENCRYPTION_RESPONSE_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.shared_secret.write_to(writer)?;
        self.verify_token.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.shared_secret = ByteArray::read_from(reader)?.0;
        self.verify_token = ByteArray::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Acknowledges the end of the login stage. Empty body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoginAcknowledge;

impl Packet for LoginAcknowledge {
    fn id(&self) -> i32 {
        SERVERBOUND_LOGIN_ACKNOWLEDGE_ID
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

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginDisconnect {
    /// JSON text component explaining the disconnect.
    pub reason: Chat,
}

impl Packet for LoginDisconnect {
    fn id(&self) -> i32 {
        CLIENTBOUND_LOGIN_DISCONNECT_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.reason.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.reason = Chat::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EncryptionRequest {
    pub server_id: ProtocolString,
    pub public_key: ByteArray,
    pub verify_token: ByteArray,
    pub should_authenticate: Boolean,
}

impl Packet for EncryptionRequest {
    fn id(&self) -> i32 {
        CLIENTBOUND_ENCRYPTION_REQUEST_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.server_id.write_to(writer)?;
        self.public_key.write_to(writer)?;
        self.verify_token.write_to(writer)?;
        self.should_authenticate.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.server_id = ProtocolString::read_from(reader)?.0;
        self.public_key = ByteArray::read_from(reader)?.0;
        self.verify_token = ByteArray::read_from(reader)?.0;
        self.should_authenticate = Boolean::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// One entry of a game profile's property list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileProperty {
    pub name: ProtocolString,
    pub value: ProtocolString,
    pub signature: Option<ProtocolString>,
}

impl ProtocolWrite for ProfileProperty {
    fn write_to<W: Write + ?Sized>(&self, writer: &mut W) -> PacketResult<usize> {
        let mut written = self.name.write_to(writer)?;
        written += self.value.write_to(writer)?;
        written += self.signature.write_to(writer)?;
        Ok(written)
    }
}

impl ProtocolRead for ProfileProperty {
    fn read_from<R: Read + ?Sized>(reader: &mut R) -> PacketResult<(Self, usize)> {
        let (name, mut bytes_read) = ProtocolString::read_from(reader)?;
        let (value, n) = ProtocolString::read_from(reader)?;
        bytes_read += n;
        let (signature, n) = Option::<ProtocolString>::read_from(reader)?;
        bytes_read += n;

        Ok((
            Self {
                name,
                value,
                signature,
            },
            bytes_read,
        ))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginSuccess {
    pub uuid: ProtocolUuid,
    pub username: ProtocolString,
    pub properties: PrefixedArray<ProfileProperty>,
    pub strict_error_handling: Boolean,
}

impl Packet for LoginSuccess {
    fn id(&self) -> i32 {
        CLIENTBOUND_LOGIN_SUCCESS_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.uuid.write_to(writer)?;
        self.username.write_to(writer)?;
        self.properties.write_to(writer)?;
        self.strict_error_handling.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.uuid = ProtocolUuid::read_from(reader)?.0;
        self.username = ProtocolString::read_from(reader)?.0;
        self.properties = PrefixedArray::read_from(reader)?.0;
        self.strict_error_handling = Boolean::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetCompression {
    pub threshold: VarInt,
}

impl SetCompression {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold: VarInt(threshold),
        }
    }
}

impl Packet for SetCompression {
    fn id(&self) -> i32 {
        CLIENTBOUND_SET_COMPRESSION_ID
    }

    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()> {
        self.threshold.write_to(writer)?;
        Ok(())
    }

    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()> {
        self.threshold = VarInt::read_from(reader)?.0;
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
