use flate2::bufread::ZlibDecoder;
use std::io::{self, BufRead, Read};

use crate::error::{PacketError, PacketResult};
use crate::network::frame::FrameReader;

/// Reader over a single received packet's payload, issued by
/// [`crate::network::Transport::recv`].
///
/// While alive it borrows the transport's frame reader, so the borrow checker
/// enforces at most one outstanding payload per transport; releasing it
/// (by [`Payload::close`], [`Payload::discard`], or dropping) gives the
/// transport back.
///
/// `close` validates that the payload was fully consumed and the frame is
/// intact; it does not realign on failure. `discard` abandons the packet and
/// realigns the source to the next frame boundary. After a failed `close`,
/// realign through [`crate::network::Transport::discard_frame`].
#[derive(Debug)]
pub enum Payload<'a, R: BufRead> {
    /// Pass-through over the frame (compression off, or a packet below the
    /// threshold inside a compressed stream).
    Plain(&'a mut FrameReader<R>),
    /// Inflates through a zlib stream bounded by the frame. `remaining`
    /// counts declared *uncompressed* bytes the caller has yet to see.
    Compressed {
        decoder: ZlibDecoder<&'a mut FrameReader<R>>,
        remaining: i32,
    },
}

impl<'a, R: BufRead> Payload<'a, R> {
    /// Declared-but-not-yet-consumed payload bytes.
    pub fn remaining(&self) -> i32 {
        match self {
            Payload::Plain(frame) => frame.remaining(),
            Payload::Compressed { remaining, .. } => *remaining,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, Payload::Compressed { .. })
    }

    /// Single-byte form of `read`. Reading past the end of the payload fails
    /// with [`PacketError::UnexpectedEof`].
    pub fn read_byte(&mut self) -> PacketResult<u8> {
        let mut buf = [0u8; 1];
        match self.read(&mut buf) {
            Ok(1) => Ok(buf[0]),
            Ok(_) => Err(PacketError::UnexpectedEof),
            Err(e) => Err(PacketError::from_read(e)),
        }
    }

    /// Consumes and discards all remaining payload bytes (not frame padding),
    /// enabling validation on [`Payload::close`].
    pub fn skip(&mut self) -> PacketResult<i32> {
        match self {
            Payload::Plain(frame) => frame.skip(),
            Payload::Compressed { .. } => {
                let n = io::copy(&mut *self, &mut io::sink()).map_err(PacketError::from_read)?;
                Ok(n as i32)
            }
        }
    }

    /// Validates payload exhaustion and frame integrity, releasing the
    /// borrowed frame reader.
    ///
    /// For a compressed payload this probes the zlib stream for one extra
    /// byte: data beyond the declared length is
    /// [`PacketError::ZlibPayloadOverrun`], and frame bytes left after the
    /// stream cleanly ends are [`PacketError::ZlibTrailingData`].
    pub fn close(self) -> PacketResult<()> {
        match self {
            Payload::Plain(frame) => {
                if frame.remaining() > 0 {
                    return Err(PacketError::NotExhausted(frame.remaining()));
                }
                Ok(())
            }
            Payload::Compressed {
                mut decoder,
                remaining,
            } => {
                if remaining > 0 {
                    return Err(PacketError::NotExhausted(remaining));
                }

                let mut probe = [0u8; 1];
                match decoder.read(&mut probe) {
                    Ok(0) => {}
                    Ok(_) => return Err(PacketError::ZlibPayloadOverrun),
                    Err(e) => return Err(PacketError::from_read(e)),
                }

                if decoder.get_ref().remaining() > 0 {
                    return Err(PacketError::ZlibTrailingData);
                }
                Ok(())
            }
        }
    }

    /// Abandons this packet and realigns the source to the next frame
    /// boundary. Does not attempt to finish the zlib stream.
    pub fn discard(self) -> PacketResult<i32> {
        match self {
            Payload::Plain(frame) => frame.skip(),
            Payload::Compressed { decoder, .. } => decoder.into_inner().skip(),
        }
    }
}

impl<R: BufRead> Read for Payload<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Payload::Plain(frame) => frame.read(buf),
            Payload::Compressed { decoder, remaining } => {
                if *remaining <= 0 || buf.is_empty() {
                    return Ok(0);
                }
                let cap = buf.len().min(*remaining as usize);
                let n = decoder.read(&mut buf[..cap])?;
                *remaining -= n as i32;
                if n == 0 && *remaining > 0 {
                    // zlib stream ended before producing the declared length
                    return Err(PacketError::ZlibPayloadUnderrun.into());
                }
                Ok(n)
            }
        }
    }
}
