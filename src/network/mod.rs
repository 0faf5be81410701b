mod buffered;
mod frame;
mod payload;
mod transport;

pub use buffered::BufferedReader;
pub use frame::FrameReader;
pub use payload::Payload;
pub use transport::{Transport, TransportConfig};

// Public packet system constants (CF: https://minecraft.wiki/w/Minecraft_Wiki:Projects/wiki.vg_merge/Protocol)
pub const MAX_PACKET_LENGTH: i32 = 2097151; // 2^21 - 1 (3-byte VarInt max)
pub const MAX_UNCOMPRESSED_LENGTH: i32 = 8388608; // 2^23
