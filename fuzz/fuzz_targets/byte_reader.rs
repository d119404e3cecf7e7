#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 7;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let _ = reader.read_i16();
            }
            2 => {
                let _ = reader.read_u32();
            }
            3 => {
                let _ = reader.read_f32();
            }
            4 => {
                let len = data[idx.saturating_sub(1)] as usize % 64;
                let _ = reader.read_slice(len);
            }
            5 => {
                let target = data[idx.saturating_sub(1)] as usize * 3;
                let _ = reader.seek(target);
            }
            _ => {
                let _ = reader.read_array::<24>();
            }
        }
        assert!(reader.position() <= reader.len());
    }
});
