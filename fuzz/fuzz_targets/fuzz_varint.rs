#![no_main]

use libfuzzer_sys::fuzz_target;
use proto_wire::decode_varint;

fuzz_target!(|data: &[u8]| {
    // Fuzz varint decoding - test for panics, crashes, unbounded loops
    if let Ok((_, pos)) = decode_varint(data, 0) {
        assert!(pos <= data.len());
    }
});
