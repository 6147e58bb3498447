#![no_main]

use libfuzzer_sys::fuzz_target;
use proto_wire::{decode_header, skip_field};

fuzz_target!(|data: &[u8]| {
    // Fuzz the schema-tolerant walk: decode a tag, skip its payload, repeat
    let mut pos = 0;
    while pos < data.len() {
        let Ok((_, wire_type, next)) = decode_header(data, pos) else {
            break;
        };
        match skip_field(data, next, wire_type) {
            Ok(after) => {
                assert!(after > pos && after <= data.len());
                pos = after;
            }
            Err(_) => break,
        }
    }
});
