use std::collections::HashMap;
use std::io::Read;

use crate::error::{PacketError, PacketResult};
use crate::packet::{
    EncryptionRequest, EncryptionResponse, Handshake, LoginAcknowledge, LoginDisconnect,
    LoginStart, LoginSuccess, Packet, PingRequest, SetCompression, StatusRequest, StatusResponse,
};
use crate::types::{ProtocolRead, VarInt};

/// Connection stage governing which packet catalogue applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Handshake,
    Status,
    Login,
    Config,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Serverbound,
    Clientbound,
}

/// Constructor yielding an empty packet of a concrete type, ready to decode.
pub type PacketFn = fn() -> Box<dyn Packet>;

/// Immutable packet id to constructor table for one (stage, direction).
pub struct Registry {
    stage: Stage,
    direction: Direction,
    factories: HashMap<i32, PacketFn>,
}

impl Registry {
    pub fn new(
        stage: Stage,
        direction: Direction,
        entries: impl IntoIterator<Item = (i32, PacketFn)>,
    ) -> Self {
        Self {
            stage,
            direction,
            factories: entries.into_iter().collect(),
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.factories.contains_key(&id)
    }

    /// Constructs an empty packet for `id`, or fails with
    /// [`PacketError::UnknownPacketId`] — the caller is then responsible for
    /// discarding the payload.
    pub fn create(&self, id: i32) -> PacketResult<Box<dyn Packet>> {
        match self.factories.get(&id) {
            Some(factory) => Ok(factory()),
            None => Err(PacketError::UnknownPacketId(id)),
        }
    }

    /// Reads the id prefix from `reader`, constructs the matching packet and
    /// decodes its body. The payload reader is left positioned after the
    /// body; validating exhaustion stays with the caller's `close`.
    pub fn decode_from<R: Read>(&self, reader: &mut R) -> PacketResult<Box<dyn Packet>> {
        let (VarInt(id), _) = VarInt::read_from(reader)?;
        let mut packet = self.create(id)?;
        packet.decode(reader)?;
        Ok(packet)
    }
}

fn empty<P: Packet + Default + 'static>() -> Box<dyn Packet> {
    Box::new(P::default())
}

pub fn handshake_serverbound() -> Registry {
    Registry::new(
        Stage::Handshake,
        Direction::Serverbound,
        [(0x00, empty::<Handshake> as PacketFn)],
    )
}

pub fn status_serverbound() -> Registry {
    Registry::new(
        Stage::Status,
        Direction::Serverbound,
        [
            (0x00, empty::<StatusRequest> as PacketFn),
            (0x01, empty::<PingRequest> as PacketFn),
        ],
    )
}

pub fn status_clientbound() -> Registry {
    Registry::new(
        Stage::Status,
        Direction::Clientbound,
        [(0x00, empty::<StatusResponse> as PacketFn)],
    )
}

pub fn login_serverbound() -> Registry {
    Registry::new(
        Stage::Login,
        Direction::Serverbound,
        [
            (0x00, empty::<LoginStart> as PacketFn),
            (0x01, empty::<EncryptionResponse> as PacketFn),
            (0x03, empty::<LoginAcknowledge> as PacketFn),
        ],
    )
}

pub fn login_clientbound() -> Registry {
    Registry::new(
        Stage::Login,
        Direction::Clientbound,
        [
            (0x00, empty::<LoginDisconnect> as PacketFn),
            (0x01, empty::<EncryptionRequest> as PacketFn),
            (0x02, empty::<LoginSuccess> as PacketFn),
            (0x03, empty::<SetCompression> as PacketFn),
        ],
    )
}
