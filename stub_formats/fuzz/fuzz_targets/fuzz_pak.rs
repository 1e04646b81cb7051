#![no_main]

use libfuzzer_sys::fuzz_target;
use stub_formats::pak::PakBuilder;

fuzz_target!(|data: &[u8]| {
    let mut pak = PakBuilder::new();
    for chunk in data.split(|&b| b == b'\n') {
        let (name, payload) = chunk.split_at(chunk.len().min(24));
        if let Ok(name) = std::str::from_utf8(name) {
            let _ = pak.add(name, payload.to_vec());
        }
    }
    if let Ok(encoded) = pak.encode() {
        assert_eq!(&encoded[0..4], b"PACK");
    }
});
