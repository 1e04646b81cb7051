#![no_main]

use libfuzzer_sys::fuzz_target;
use stub_formats::lmp::{encode_lmp, LMP_HEADER_LEN};
use stub_formats::pattern::{self, Glyph, Weapon};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let width = u32::from(data[0]) + 1;
    let height = u32::from(data[1]) + 1;
    let selector = data[2];
    let color = data[3];

    let image = match selector % 5 {
        0 => pattern::solid(width, height, color),
        1 => pattern::checkerboard(width, height, color, !color),
        2 => pattern::glyph(width, height, Glyph::Digit(color % 12)),
        3 => pattern::weapon_icon(
            width,
            height,
            Weapon::ALL[usize::from(color) % Weapon::ALL.len()],
        ),
        _ => pattern::face_icon(width, height),
    };
    let image = image.expect("non-zero dimensions");
    let encoded = encode_lmp(&image).expect("encode");
    assert_eq!(encoded.len(), LMP_HEADER_LEN + (width * height) as usize);
});
