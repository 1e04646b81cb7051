//! Procedural pixel patterns used for placeholder status bar and HUD art.

use crate::lmp::{IndexedImage, LmpError};

pub const GLYPH_SIZE: u32 = 8;
pub const GLYPH_ON: u8 = 255;
pub const GLYPH_OFF: u8 = 0;
pub const ICON_ON: u8 = 255;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Glyph {
    Digit(u8),
    Minus,
    Colon,
    Slash,
}

impl Glyph {
    /// Rows of the 8x8 bitmap, most significant bit is the leftmost pixel.
    /// Digits above 9 have no bitmap.
    pub fn rows(self) -> Option<[u8; 8]> {
        let rows = match self {
            Glyph::Digit(0) => [0x3C, 0x42, 0x42, 0x42, 0x42, 0x42, 0x42, 0x3C],
            Glyph::Digit(1) => [0x08, 0x18, 0x28, 0x08, 0x08, 0x08, 0x08, 0x3E],
            Glyph::Digit(2) => [0x3C, 0x42, 0x02, 0x04, 0x08, 0x10, 0x20, 0x7E],
            Glyph::Digit(3) => [0x3C, 0x42, 0x02, 0x1C, 0x02, 0x02, 0x42, 0x3C],
            Glyph::Digit(4) => [0x04, 0x0C, 0x14, 0x24, 0x44, 0x7E, 0x04, 0x04],
            Glyph::Digit(5) => [0x7E, 0x40, 0x40, 0x7C, 0x02, 0x02, 0x42, 0x3C],
            Glyph::Digit(6) => [0x3C, 0x42, 0x40, 0x7C, 0x42, 0x42, 0x42, 0x3C],
            Glyph::Digit(7) => [0x7E, 0x02, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20],
            Glyph::Digit(8) => [0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x42, 0x3C],
            Glyph::Digit(9) => [0x3C, 0x42, 0x42, 0x42, 0x3E, 0x02, 0x42, 0x3C],
            Glyph::Digit(_) => return None,
            Glyph::Minus => [0x00, 0x00, 0x00, 0x7E, 0x7E, 0x00, 0x00, 0x00],
            Glyph::Colon => [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00],
            Glyph::Slash => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00],
        };
        Some(rows)
    }

    pub fn name(self) -> String {
        match self {
            Glyph::Digit(digit) => digit.to_string(),
            Glyph::Minus => "minus".to_string(),
            Glyph::Colon => "colon".to_string(),
            Glyph::Slash => "slash".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weapon {
    Shotgun,
    SuperShotgun,
    Nailgun,
    SuperNailgun,
    RocketLauncher,
    SuperRocketLauncher,
    LightningGun,
}

impl Weapon {
    pub const ALL: [Weapon; 7] = [
        Weapon::Shotgun,
        Weapon::SuperShotgun,
        Weapon::Nailgun,
        Weapon::SuperNailgun,
        Weapon::RocketLauncher,
        Weapon::SuperRocketLauncher,
        Weapon::LightningGun,
    ];

    /// Asset name suffix, as in `inv_<name>.lmp`.
    pub fn name(self) -> &'static str {
        match self {
            Weapon::Shotgun => "shotgun",
            Weapon::SuperShotgun => "sshotgun",
            Weapon::Nailgun => "nailgun",
            Weapon::SuperNailgun => "snailgun",
            Weapon::RocketLauncher => "rlaunch",
            Weapon::SuperRocketLauncher => "srlaunch",
            Weapon::LightningGun => "lightng",
        }
    }

    /// Inclusive `(x0, y0, x1, y1)` block drawn for the icon. The "super"
    /// variants have no silhouette and stay blank.
    pub fn silhouette(self) -> Option<(u32, u32, u32, u32)> {
        match self {
            Weapon::Shotgun => Some((2, 2, 5, 5)),
            Weapon::Nailgun => Some((1, 3, 6, 4)),
            Weapon::RocketLauncher => Some((2, 1, 5, 6)),
            Weapon::LightningGun => Some((3, 1, 4, 6)),
            Weapon::SuperShotgun | Weapon::SuperNailgun | Weapon::SuperRocketLauncher => None,
        }
    }
}

pub fn solid(width: u32, height: u32, index: u8) -> Result<IndexedImage, LmpError> {
    IndexedImage::filled(width, height, index)
}

/// `color1` where `x + y` is even, `color2` elsewhere.
pub fn checkerboard(
    width: u32,
    height: u32,
    color1: u8,
    color2: u8,
) -> Result<IndexedImage, LmpError> {
    let mut image = IndexedImage::filled(width, height, color2)?;
    let stride = width as usize;
    for y in 0..height as usize {
        for x in 0..stride {
            if (x + y) % 2 == 0 {
                image.indices[y * stride + x] = color1;
            }
        }
    }
    Ok(image)
}

/// Offset of the glyph's top-left corner, floor-divided like the HUD layout
/// code expects, so canvases narrower than a glyph get a negative origin.
pub fn glyph_origin(width: u32, height: u32) -> (i64, i64) {
    let size = i64::from(GLYPH_SIZE);
    (
        (i64::from(width) - size).div_euclid(2),
        (i64::from(height) - size).div_euclid(2),
    )
}

/// Glyph bitmap centered on a black canvas. Glyph pixels that fall outside
/// the canvas are clipped.
pub fn glyph(width: u32, height: u32, glyph: Glyph) -> Result<IndexedImage, LmpError> {
    let mut image = IndexedImage::filled(width, height, GLYPH_OFF)?;
    let Some(rows) = glyph.rows() else {
        return Ok(image);
    };
    let (start_x, start_y) = glyph_origin(width, height);
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            let index = if bits & (0x80u8 >> col) != 0 {
                GLYPH_ON
            } else {
                GLYPH_OFF
            };
            image.set_pixel(start_x + i64::from(col), start_y + row as i64, index);
        }
    }
    Ok(image)
}

pub fn weapon_icon(width: u32, height: u32, weapon: Weapon) -> Result<IndexedImage, LmpError> {
    let mut image = IndexedImage::filled(width, height, 0)?;
    if let Some((x0, y0, x1, y1)) = weapon.silhouette() {
        for y in y0..=y1 {
            for x in x0..=x1 {
                image.set_pixel(i64::from(x), i64::from(y), ICON_ON);
            }
        }
    }
    Ok(image)
}

/// Box outline one pixel in from the border, two eyes on row 3 and a mouth
/// on the third row from the bottom.
pub fn face_icon(width: u32, height: u32) -> Result<IndexedImage, LmpError> {
    let mut image = IndexedImage::filled(width, height, 0)?;
    let w = i64::from(width);
    let h = i64::from(height);
    for y in 0..h {
        for x in 0..w {
            let outline_col = (x == 1 || x == w - 2) && (1..=h - 2).contains(&y);
            let outline_row = (y == 1 || y == h - 2) && (1..=w - 2).contains(&x);
            let eye = (x == 2 || x == w - 3) && y == 3;
            let mouth = (2..=w - 3).contains(&x) && y == h - 3;
            if outline_col || outline_row || eye || mouth {
                image.set_pixel(x, y, ICON_ON);
            }
        }
    }
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkerboard_parity() {
        let image = checkerboard(8, 8, 100, 200).expect("checkerboard");
        for y in 0..8 {
            for x in 0..8 {
                let expected = if (x + y) % 2 == 0 { 100 } else { 200 };
                assert_eq!(image.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn checkerboard_odd_width() {
        let image = checkerboard(3, 2, 1, 2).expect("checkerboard");
        assert_eq!(image.indices, vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn solid_fill() {
        let image = solid(320, 24, 50).expect("solid");
        assert_eq!(image.indices.len(), 320 * 24);
        assert!(image.indices.iter().all(|&index| index == 50));
    }

    #[test]
    fn digit_zero_on_glyph_sized_canvas() {
        let image = glyph(8, 8, Glyph::Digit(0)).expect("glyph");
        // 0x3C -> ..XXXX..
        let top: Vec<u8> = (0..8).map(|x| image.pixel(x, 0).unwrap()).collect();
        assert_eq!(top, vec![0, 0, 255, 255, 255, 255, 0, 0]);
        // 0x42 -> .X....X.
        let mid: Vec<u8> = (0..8).map(|x| image.pixel(x, 3).unwrap()).collect();
        assert_eq!(mid, vec![0, 255, 0, 0, 0, 0, 255, 0]);
    }

    #[test]
    fn glyph_is_centered_and_surroundings_stay_black() {
        let (width, height) = (16u32, 12u32);
        let image = glyph(width, height, Glyph::Digit(8)).expect("glyph");
        let (sx, sy) = glyph_origin(width, height);
        assert_eq!((sx, sy), (4, 2));
        let rows = Glyph::Digit(8).rows().unwrap();
        for y in 0..height {
            for x in 0..width {
                let gx = i64::from(x) - sx;
                let gy = i64::from(y) - sy;
                let inside = (0..8).contains(&gx) && (0..8).contains(&gy);
                let expected = if inside && rows[gy as usize] & (0x80u8 >> gx) != 0 {
                    GLYPH_ON
                } else {
                    GLYPH_OFF
                };
                assert_eq!(image.pixel(x, y), Some(expected), "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn glyph_clips_on_small_canvas() {
        assert_eq!(glyph_origin(4, 4), (-2, -2));
        let image = glyph(4, 4, Glyph::Minus).expect("glyph");
        // Minus rows 3 and 4 are 0x7E; columns 2..6 of the glyph are visible.
        assert_eq!(image.indices[4..8], [255, 255, 255, 255]);
        assert_eq!(image.indices[8..12], [255, 255, 255, 255]);
        assert_eq!(image.indices[0..4], [0, 0, 0, 0]);
    }

    #[test]
    fn unknown_digit_is_blank() {
        let image = glyph(8, 8, Glyph::Digit(12)).expect("glyph");
        assert!(image.indices.iter().all(|&index| index == 0));
    }

    #[test]
    fn shotgun_block() {
        let image = weapon_icon(8, 8, Weapon::Shotgun).expect("icon");
        for y in 0..8 {
            for x in 0..8 {
                let lit = (2..=5).contains(&x) && (2..=5).contains(&y);
                assert_eq!(image.pixel(x, y), Some(if lit { 255 } else { 0 }));
            }
        }
    }

    #[test]
    fn super_weapons_are_blank() {
        for weapon in [
            Weapon::SuperShotgun,
            Weapon::SuperNailgun,
            Weapon::SuperRocketLauncher,
        ] {
            let image = weapon_icon(8, 8, weapon).expect("icon");
            assert!(image.indices.iter().all(|&index| index == 0), "{}", weapon.name());
        }
    }

    #[test]
    fn face_layout() {
        let image = face_icon(8, 8).expect("face");
        let rows: Vec<String> = (0..8)
            .map(|y| {
                (0..8)
                    .map(|x| if image.pixel(x, y) == Some(255) { '#' } else { '.' })
                    .collect()
            })
            .collect();
        assert_eq!(
            rows,
            vec![
                "........",
                ".######.",
                ".#....#.",
                ".##..##.",
                ".#....#.",
                ".######.",
                ".######.",
                "........",
            ]
        );
    }
}
