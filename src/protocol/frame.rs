//! Frame codec
//!
//! Encode and decode the `[u32 big-endian length][payload]` frame over any
//! `Write`/`Read`. Payloads are read in fixed-size chunks so the length
//! prefix alone never dictates an allocation.

use std::io::{Read, Write};

use byteorder::{BigEndian, ByteOrder, WriteBytesExt};

use crate::error::CdrError;

/// Size of the length prefix on the wire.
pub const LEN_PREFIX_SIZE: usize = 4;

/// Receive chunk size for payload reads.
const READ_CHUNK: usize = 64 * 1024;

/// Write one frame: length prefix, payload, flush.
pub fn write_frame<W: Write>(writer: &mut W, payload: &[u8]) -> Result<(), CdrError> {
    let len = u32::try_from(payload.len()).map_err(|_| CdrError::Oversize(payload.len()))?;

    writer.write_u32::<BigEndian>(len)?;
    writer.write_all(payload)?;
    writer.flush()?;

    Ok(())
}

/// Encode one frame into a fresh buffer.
pub fn encode_frame(payload: &[u8]) -> Result<Vec<u8>, CdrError> {
    let mut buf = Vec::with_capacity(LEN_PREFIX_SIZE + payload.len());
    write_frame(&mut buf, payload)?;
    Ok(buf)
}

/// Read one frame and return its payload.
///
/// EOF before the declared byte count is satisfied, on either the prefix or
/// the payload, is a protocol error with no partial data returned.
pub fn read_frame<R: Read>(reader: &mut R) -> Result<Vec<u8>, CdrError> {
    let mut prefix = [0u8; LEN_PREFIX_SIZE];
    read_exact_counted(reader, &mut prefix)?;
    let declared = BigEndian::read_u32(&prefix) as usize;

    let mut payload = Vec::new();
    let mut chunk = [0u8; READ_CHUNK];

    while payload.len() < declared {
        let want = (declared - payload.len()).min(READ_CHUNK);
        let n = reader.read(&mut chunk[..want])?;
        if n == 0 {
            return Err(CdrError::Protocol {
                expected: declared,
                got: payload.len(),
            });
        }
        payload.extend_from_slice(&chunk[..n]);
    }

    Ok(payload)
}

/// Fill `buf` completely, reporting how far we got when the peer closes
/// early. `Read::read_exact` discards that count, and the count is the
/// useful part of the error message.
fn read_exact_counted<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), CdrError> {
    let mut got = 0;
    while got < buf.len() {
        let n = reader.read(&mut buf[got..])?;
        if n == 0 {
            return Err(CdrError::Protocol {
                expected: buf.len(),
                got,
            });
        }
        got += n;
    }
    Ok(())
}

/// Strip at most one trailing line terminator: `\r\n`, `\n`, or `\r`.
/// Same record-separator handling as the original client.
pub fn chomp(payload: &mut Vec<u8>) {
    match payload.as_slice() {
        [.., b'\r', b'\n'] => payload.truncate(payload.len() - 2),
        [.., b'\n'] | [.., b'\r'] => payload.truncate(payload.len() - 1),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_empty_payload_is_four_zero_bytes() {
        assert_eq!(encode_frame(b"").unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_prefix_is_big_endian_length() {
        let frame = encode_frame(b"okay\n").unwrap();
        assert_eq!(&frame[..4], &[0, 0, 0, 5]);
        assert_eq!(&frame[4..], b"okay\n");
    }

    #[test]
    fn test_roundtrip_various_sizes() {
        // 70_000 crosses the 64 KiB receive chunk boundary.
        for size in [0usize, 1, 31, 4096, 70_000] {
            let payload: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
            let frame = encode_frame(&payload).unwrap();
            let decoded = read_frame(&mut Cursor::new(frame)).unwrap();
            assert_eq!(decoded, payload, "size {}", size);
        }
    }

    #[test]
    fn test_truncated_prefix_is_protocol_error() {
        let mut short = Cursor::new(vec![0u8, 0]);
        match read_frame(&mut short) {
            Err(CdrError::Protocol { expected, got }) => {
                assert_eq!(expected, 4);
                assert_eq!(got, 2);
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_payload_is_protocol_error() {
        // Declares 10 bytes, delivers 3.
        let mut short = Cursor::new(vec![0, 0, 0, 10, b'a', b'b', b'c']);
        match read_frame(&mut short) {
            Err(CdrError::Protocol { expected, got }) => {
                assert_eq!(expected, 10);
                assert_eq!(got, 3);
            }
            other => panic!("expected protocol error, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_stops_at_frame_boundary() {
        let mut bytes = encode_frame(b"first").unwrap();
        bytes.extend_from_slice(&encode_frame(b"second").unwrap());

        let mut cursor = Cursor::new(bytes);
        assert_eq!(read_frame(&mut cursor).unwrap(), b"first");
        assert_eq!(read_frame(&mut cursor).unwrap(), b"second");
    }

    #[test]
    fn test_chomp_strips_one_terminator() {
        let mut v = b"okay\n".to_vec();
        chomp(&mut v);
        assert_eq!(v, b"okay");

        let mut v = b"okay\r\n".to_vec();
        chomp(&mut v);
        assert_eq!(v, b"okay");

        let mut v = b"okay\r".to_vec();
        chomp(&mut v);
        assert_eq!(v, b"okay");
    }

    #[test]
    fn test_chomp_leaves_second_newline() {
        let mut v = b"okay\n\n".to_vec();
        chomp(&mut v);
        assert_eq!(v, b"okay\n");
    }

    #[test]
    fn test_chomp_no_terminator() {
        let mut v = b"okay".to_vec();
        chomp(&mut v);
        assert_eq!(v, b"okay");

        let mut v = Vec::new();
        chomp(&mut v);
        assert!(v.is_empty());
    }
}
