#![no_main]

use libfuzzer_sys::fuzz_target;
use stub_formats::bsp;

fuzz_target!(|data: &[u8]| {
    let mut patched = data.to_vec();
    if bsp::patch_version(&mut patched, bsp::BSP_VERSION).is_ok() {
        assert_eq!(&patched[4..8], &bsp::BSP_VERSION.to_le_bytes());
        assert_eq!(patched.len(), data.len());
    }
});
