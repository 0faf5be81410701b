//! Framed transport core for the Minecraft Java Edition wire protocol.
//!
//! The crate hides wire-level concerns — length-prefixed framing, per-packet
//! zlib compression under a threshold rule, and the codec primitives packets
//! are built from — behind a packet-oriented interface, without imposing a
//! session state machine or a packet catalogue on callers.
//!
//! The entry point is [`network::Transport`]: `send` writes one frame per
//! call, `recv` hands back a bounded [`network::Payload`] reader the caller
//! consumes and then closes (validating the frame) or discards (realigning
//! on the next frame boundary). [`types`] holds the field codecs and
//! [`packet`] the packet contract plus per-(stage, direction) registries.

pub mod error;
pub mod network;
pub mod packet;
pub mod types;

// Re-export the most commonly used types
pub use error::{PacketError, PacketResult};
pub use network::{BufferedReader, FrameReader, Payload, Transport, TransportConfig};
pub use packet::{Packet, Registry};
pub use types::{ProtocolRead, ProtocolWrite, VarInt};
