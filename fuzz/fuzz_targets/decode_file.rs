#![no_main]

use codec::{decode, encode_records, DecodeOptions, HEADER_SIZE, INSTANCE_SIZE};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = layout::decode_header(data);

    for options in [DecodeOptions::for_testing(), DecodeOptions::strict()] {
        let Ok(decoded) = decode(data, &options) else {
            continue;
        };
        assert!(decoded.records.len() <= decoded.header.instance_count as usize);
        assert!(HEADER_SIZE + decoded.records.len() * INSTANCE_SIZE <= data.len().max(HEADER_SIZE));

        // Whatever was decoded re-encodes to a well-formed file.
        if let Ok(bytes) = encode_records(&decoded.records, decoded.header.version) {
            let again = decode(&bytes, &DecodeOptions::lenient());
            assert!(again.is_ok_and(|again| again.records.len() == decoded.records.len()));
        }
    }
});
