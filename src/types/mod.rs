mod arrays;
mod position;
mod primitives;
mod strings;
mod traits;
mod uuid;
mod var_numbers;

// Public re-exports
pub use arrays::{ByteArray, PrefixedArray};
pub use position::Position;
pub use primitives::{Boolean, Byte, Double, Float, Int, Long, Short, UnsignedShort};
pub use strings::{Chat, ProtocolString};
pub use traits::{ProtocolRead, ProtocolWrite, WriteToBytes};
pub use uuid::ProtocolUuid;
pub use var_numbers::VarInt;

// Constants
pub const MAX_VARINT_LEN: usize = 5;
