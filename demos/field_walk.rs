//! Demonstrates schema-tolerant decoding: encode a small record, then walk
//! it with a cursor, skipping the one field the reader does not know.
//!
//! Run with: `cargo run --example field_walk`

use proto_wire::{
    decode_zig_zag64, encode_bytes, encode_header, encode_varint, encode_zig_zag64, Result,
    WireCursor, WireType,
};

fn encode_record() -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    // Field 1: uint64 id.
    encode_header(1, WireType::Varint, &mut buf)?;
    encode_varint(86, &mut buf);

    // Field 2: string name.
    encode_header(2, WireType::LengthDelimited, &mut buf)?;
    encode_bytes(b"proto-wire", &mut buf);

    // Field 3: sint64 delta, zig-zag then varint.
    encode_header(3, WireType::Varint, &mut buf)?;
    encode_varint(encode_zig_zag64(-1200), &mut buf);

    // Field 7: a fixed32 the walking reader below knows nothing about.
    encode_header(7, WireType::Fixed32, &mut buf)?;
    buf.extend_from_slice(&1.5f32.to_le_bytes());

    Ok(buf)
}

fn main() -> Result<()> {
    let buf = encode_record()?;
    println!("encoded {} bytes: {buf:02X?}", buf.len());

    let mut cursor = WireCursor::new(&buf);
    while !cursor.is_at_end() {
        let (number, wire_type) = cursor.read_header()?;
        match number {
            1 => println!("field 1 (id)    = {}", cursor.read_varint()?),
            2 => {
                let name = cursor.read_length_delimited()?;
                println!("field 2 (name)  = {:?}", String::from_utf8_lossy(name));
            }
            3 => {
                let delta = decode_zig_zag64(cursor.read_varint()?);
                println!("field 3 (delta) = {delta}");
            }
            _ => {
                println!("field {number} ({}) skipped", wire_type.name());
                cursor.skip(wire_type)?;
            }
        }
    }
    println!("walked to end at offset {}", cursor.position());

    Ok(())
}
