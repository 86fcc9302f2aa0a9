//! `VarInt` and `VarLong` encoding/decoding.
//!
//! Variable-length, base-128 integer encoding: each byte carries 7 value
//! bits, least-significant group first, with the high bit flagging that
//! more bytes follow. Negative values are bit-cast to their unsigned
//! representation first, so they always occupy the maximum width.

use bytes::BufMut;
use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{ProtocolError, Result};

/// Segment bits mask (lower 7 bits).
const SEGMENT_BITS: u8 = 0x7F;

/// Continue bit (high bit).
const CONTINUE_BIT: u8 = 0x80;

/// Read a `VarInt` from an async reader.
///
/// # Errors
///
/// Returns [`ProtocolError::VarIntTooLong`] if the continuation bit is
/// still set after 5 bytes, or [`ProtocolError::Io`] on a stream failure
/// (including end-of-stream mid-value).
pub async fn read_varint<R: AsyncRead + Unpin>(reader: &mut R) -> Result<i32> {
    let mut acc: u32 = 0;
    let mut position: u32 = 0;

    loop {
        let byte = reader.read_u8().await?;
        acc |= u32::from(byte & SEGMENT_BITS) << position;

        if byte & CONTINUE_BIT == 0 {
            break;
        }

        position += 7;
        if position >= 32 {
            return Err(ProtocolError::VarIntTooLong);
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    let value = acc as i32;
    Ok(value)
}

/// Read a `VarLong` from an async reader.
///
/// # Errors
///
/// Returns [`ProtocolError::VarLongTooLong`] if the continuation bit is
/// still set after 10 bytes, or [`ProtocolError::Io`] on a stream failure.
pub async fn read_varlong<R: AsyncRead + Unpin>(reader: &mut R) -> Result<i64> {
    let mut acc: u64 = 0;
    let mut position: u32 = 0;

    loop {
        let byte = reader.read_u8().await?;
        acc |= u64::from(byte & SEGMENT_BITS) << position;

        if byte & CONTINUE_BIT == 0 {
            break;
        }

        position += 7;
        if position >= 64 {
            return Err(ProtocolError::VarLongTooLong);
        }
    }

    #[allow(clippy::cast_possible_wrap)]
    let value = acc as i64;
    Ok(value)
}

/// Write a `VarInt` into a buffer. Returns the number of bytes written.
#[allow(clippy::cast_sign_loss)]
pub fn write_varint_to_buf(buf: &mut impl BufMut, value: i32) -> usize {
    let mut x = value as u32;
    let mut written = 0;

    loop {
        #[allow(clippy::cast_possible_truncation)]
        let mut byte = (x as u8) & SEGMENT_BITS;
        x >>= 7;

        if x != 0 {
            byte |= CONTINUE_BIT;
        }

        buf.put_u8(byte);
        written += 1;

        if x == 0 {
            return written;
        }
    }
}

/// Write a `VarLong` into a buffer. Returns the number of bytes written.
#[allow(clippy::cast_sign_loss)]
pub fn write_varlong_to_buf(buf: &mut impl BufMut, value: i64) -> usize {
    let mut x = value as u64;
    let mut written = 0;

    loop {
        #[allow(clippy::cast_possible_truncation)]
        let mut byte = (x as u8) & SEGMENT_BITS;
        x >>= 7;

        if x != 0 {
            byte |= CONTINUE_BIT;
        }

        buf.put_u8(byte);
        written += 1;

        if x == 0 {
            return written;
        }
    }
}

/// Number of bytes needed to encode a `VarInt`: the smallest n with
/// the unsigned value below `128^n`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn varint_len(value: i32) -> usize {
    let x = value as u32;
    if x == 0 {
        return 1;
    }
    ((32 - x.leading_zeros()) as usize).div_ceil(7)
}

/// Number of bytes needed to encode a `VarLong`.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn varlong_len(value: i64) -> usize {
    let x = value as u64;
    if x == 0 {
        return 1;
    }
    ((64 - x.leading_zeros()) as usize).div_ceil(7)
}
