use bytes::{BufMut, BytesMut};
use std::any::Any;
use std::fmt;
use std::io::{Read, Write};

use crate::error::PacketResult;
use crate::types::{ProtocolWrite, VarInt};

mod handshake;
mod login;
mod registry;
mod status;

pub use handshake::Handshake;
pub use login::{
    EncryptionRequest, EncryptionResponse, LoginAcknowledge, LoginDisconnect, LoginStart,
    LoginSuccess, ProfileProperty, SetCompression,
};
pub use registry::{
    handshake_serverbound, login_clientbound, login_serverbound, status_clientbound,
    status_serverbound, Direction, PacketFn, Registry, Stage,
};
pub use status::{PingRequest, StatusRequest, StatusResponse};

/// A protocol packet: a numeric id within its stage and direction, plus a
/// wire body.
///
/// `encode` and `decode` handle the body only; the id prefix is written by
/// [`to_bytes`] and read by [`Registry::decode_from`]. `as_any` lets a
/// caller that went through a registry recover the concrete type.
pub trait Packet: fmt::Debug {
    fn id(&self) -> i32;
    fn encode(&self, writer: &mut dyn Write) -> PacketResult<()>;
    fn decode(&mut self, reader: &mut dyn Read) -> PacketResult<()>;
    fn as_any(&self) -> &dyn Any;
}

/// Serializes `VarInt id || body` — the payload [`crate::network::Transport::send`]
/// expects.
pub fn to_bytes(packet: &dyn Packet) -> PacketResult<BytesMut> {
    let mut writer = BytesMut::new().writer();
    VarInt(packet.id()).write_to(&mut writer)?;
    packet.encode(&mut writer)?;
    Ok(writer.into_inner())
}
