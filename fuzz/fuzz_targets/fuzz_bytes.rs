#![no_main]

use libfuzzer_sys::fuzz_target;
use proto_wire::decode_bytes;

fuzz_target!(|data: &[u8]| {
    // Fuzz length-delimited decoding - the bounds check must never over-read
    if let Ok((payload, pos)) = decode_bytes(data, 0) {
        assert!(pos <= data.len());
        assert!(payload.len() <= data.len());
    }
});
