use bytes::{BufMut, BytesMut};
use flate2::bufread::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use tracing::{trace, warn};

use crate::error::{PacketError, PacketResult};
use crate::network::frame::FrameReader;
use crate::network::payload::Payload;
use crate::network::{MAX_PACKET_LENGTH, MAX_UNCOMPRESSED_LENGTH};
use crate::types::{ProtocolRead, ProtocolWrite, VarInt, WriteToBytes};

/// Limits applied to incoming frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Reject frames whose length prefix exceeds this.
    pub max_packet_len: i32,
    /// Reject compressed frames whose declared uncompressed length exceeds
    /// this. Only consulted while compression is active.
    pub max_decompressed_len: i32,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            max_packet_len: MAX_PACKET_LENGTH,
            max_decompressed_len: MAX_UNCOMPRESSED_LENGTH,
        }
    }
}

/// Read and write access to a framed stream, with compression handled
/// internally. The transport does not deserialize packets.
///
/// The transport owns its source and sink for its lifetime and performs no
/// background work; send and receive are plain blocking calls. Sources and
/// sinks that perform syscalls (e.g. a `TcpStream`) must be buffered —
/// `std::io::BufReader`/`BufWriter` or this crate's
/// [`crate::network::BufferedReader`].
pub struct Transport<R, W> {
    frame: FrameReader<R>,
    writer: W,

    // retained across sends so compression does not reallocate per frame
    scratch: BytesMut,

    compression_threshold: i32,
    encryption: bool,

    cfg: TransportConfig,
}

impl<R: BufRead, W: Write> Transport<R, W> {
    pub fn new(reader: R, writer: W, cfg: TransportConfig) -> Self {
        Self {
            frame: FrameReader::new(reader),
            writer,
            scratch: BytesMut::new(),
            compression_threshold: -1,
            encryption: false,
            cfg,
        }
    }

    /// Current compression threshold; `-1` means compression is disabled.
    pub fn compression_threshold(&self) -> i32 {
        self.compression_threshold
    }

    /// Sets the compression threshold, effective for the next frame in either
    /// direction. Typically called after exchanging the `SetCompression`
    /// packet. Cannot be called while a received payload is outstanding (the
    /// payload borrows the transport).
    pub fn set_compression_threshold(&mut self, threshold: i32) {
        self.compression_threshold = threshold;
    }

    /// Reserved. Stream encryption is not implemented; this always fails with
    /// [`PacketError::EncryptionUnsupported`].
    pub fn enable_encryption(&mut self, _shared_secret: &[u8]) -> PacketResult<()> {
        warn!("stream encryption requested but not implemented");
        Err(PacketError::EncryptionUnsupported)
    }

    pub fn is_encrypted(&self) -> bool {
        self.encryption
    }

    /// Bytes of the current frame still pending after a failed `recv`.
    pub fn pending(&self) -> i32 {
        self.frame.remaining()
    }

    /// Skips whatever is left of the current frame, realigning the source to
    /// the next frame's length prefix. This is the recovery path when `recv`
    /// fails after the frame header was read (e.g. `PacketTooBig`) or when a
    /// payload's `close` reported a malformed frame.
    pub fn discard_frame(&mut self) -> PacketResult<i32> {
        self.frame.skip()
    }

    /// Receives the next frame and returns a reader over its payload.
    ///
    /// The caller must release the payload (close or discard) before the next
    /// `recv`. On error the frame reader stays consistent: either no frame
    /// bytes were consumed, or [`Transport::pending`] reports what is left
    /// for [`Transport::discard_frame`].
    pub fn recv(&mut self) -> PacketResult<Payload<'_, R>> {
        let frame_len = self.frame.next()?;

        if frame_len > self.cfg.max_packet_len {
            return Err(PacketError::PacketTooBig {
                length: frame_len,
                max: self.cfg.max_packet_len,
            });
        }

        if self.compression_threshold < 0 {
            trace!(frame_len, "received frame");
            return Ok(Payload::Plain(&mut self.frame));
        }

        let (VarInt(data_len), _) = VarInt::read_from(&mut self.frame)?;

        if data_len == 0 {
            // uncompressed packet under the threshold
            trace!(frame_len, "received frame (stored uncompressed)");
            Ok(Payload::Plain(&mut self.frame))
        } else if data_len < 0 {
            Err(PacketError::InvalidDataLength(data_len))
        } else if data_len > self.cfg.max_decompressed_len {
            Err(PacketError::PacketTooBig {
                length: data_len,
                max: self.cfg.max_decompressed_len,
            })
        } else {
            trace!(frame_len, data_len, "received compressed frame");
            Ok(Payload::Compressed {
                decoder: ZlibDecoder::new(&mut self.frame),
                remaining: data_len,
            })
        }
    }

    /// Writes one frame carrying `payload` (typically `VarInt id || body`,
    /// see [`crate::packet::to_bytes`]), compressing it when the threshold
    /// says so, and flushes the sink.
    pub fn send(&mut self, payload: &[u8]) -> PacketResult<()> {
        let length = payload.len() as i32;

        if self.compression_threshold >= 0 {
            if length >= self.compression_threshold {
                self.scratch.clear();
                VarInt(length).write_to_bytes(&mut self.scratch)?;

                let mut encoder =
                    ZlibEncoder::new((&mut self.scratch).writer(), Compression::default());
                encoder.write_all(payload)?;
                encoder.finish()?;

                trace!(
                    len = payload.len(),
                    compressed = self.scratch.len(),
                    "sending compressed frame"
                );
                VarInt(self.scratch.len() as i32).write_to(&mut self.writer)?;
                self.writer.write_all(&self.scratch)?;
            } else {
                // one extra byte for the zero marker meaning "stored uncompressed"
                trace!(len = payload.len(), "sending frame below threshold");
                VarInt(length + 1).write_to(&mut self.writer)?;
                self.writer.write_all(&[0x00])?;
                self.writer.write_all(payload)?;
            }
        } else {
            trace!(len = payload.len(), "sending frame");
            VarInt(length).write_to(&mut self.writer)?;
            self.writer.write_all(payload)?;
        }

        self.writer.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> (&R, &W) {
        (self.frame.get_ref(), &self.writer)
    }

    pub fn into_inner(self) -> (R, W) {
        (self.frame.into_inner(), self.writer)
    }
}
