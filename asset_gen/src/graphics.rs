//! HUD and status bar placeholder pictures under `gfx/`.

use stub_formats::lmp::{encode_lmp, IndexedImage, LmpError};
use stub_formats::pattern::{self, Glyph, Weapon};

use crate::error::GenError;
use crate::logging;
use crate::output::AssetWriter;

pub const ICON_SIZE: u32 = 8;
pub const STATUS_BAR_WIDTH: u32 = 320;
pub const STATUS_BAR_HEIGHT: u32 = 24;
const STATUS_BAR_INDEX: u8 = 50;

const AMMO: [&str; 4] = ["shells", "nails", "rocket", "cells"];
const ITEMS: [&str; 6] = ["key1", "key2", "invis", "invuln", "suit", "quad"];
const SPECIAL_FACES: [&str; 4] = ["invis", "invul2", "inv2", "quad"];
const STATUS_BARS: [&str; 3] = ["sbar", "ibar", "scorebar"];
const MISC: [&str; 4] = ["disc", "backtile", "net", "turtle"];

#[derive(Clone, Debug)]
pub struct GfxAsset {
    /// File stem under `gfx/`.
    pub name: String,
    pub image: IndexedImage,
}

impl GfxAsset {
    pub fn path(&self) -> String {
        format!("gfx/{}.lmp", self.name)
    }
}

struct Plan {
    assets: Vec<GfxAsset>,
}

impl Plan {
    fn push(
        &mut self,
        name: impl Into<String>,
        image: Result<IndexedImage, LmpError>,
    ) -> Result<(), GenError> {
        let name = name.into();
        let image = image.map_err(|source| GenError::Lmp {
            name: name.clone(),
            source,
        })?;
        self.assets.push(GfxAsset { name, image });
        Ok(())
    }
}

/// Every picture the status bar code loads, in a fixed order.
pub fn plan_graphics() -> Result<Vec<GfxAsset>, GenError> {
    let mut plan = Plan { assets: Vec::new() };
    let icon = ICON_SIZE;

    // Only the minus sign has an alternate-color variant.
    let digits = (0..10u8).map(Glyph::Digit).chain([Glyph::Minus]);
    for glyph in digits {
        let image = pattern::glyph(icon, icon, glyph);
        plan.push(format!("num_{}", glyph.name()), image.clone())?;
        plan.push(format!("anum_{}", glyph.name()), image)?;
    }
    for glyph in [Glyph::Colon, Glyph::Slash] {
        plan.push(format!("num_{}", glyph.name()), pattern::glyph(icon, icon, glyph))?;
    }

    for weapon in Weapon::ALL {
        let image = pattern::weapon_icon(icon, icon, weapon);
        let name = weapon.name();
        plan.push(format!("inv_{}", name), image.clone())?;
        plan.push(format!("inv2_{}", name), image.clone())?;
        for frame in 1..=5 {
            plan.push(format!("inva{}_{}", frame, name), image.clone())?;
        }
    }

    for ammo in AMMO {
        plan.push(format!("sb_{}", ammo), pattern::checkerboard(icon, icon, 255, 0))?;
    }
    for armor in 1..=3u8 {
        plan.push(
            format!("sb_armor{}", armor),
            pattern::solid(icon, icon, 200 + armor * 10),
        )?;
    }
    for item in ITEMS {
        plan.push(format!("sb_{}", item), pattern::checkerboard(icon, icon, 100, 200))?;
    }
    for sigil in 1..=4u8 {
        plan.push(
            format!("sb_sigil{}", sigil),
            pattern::solid(icon, icon, 150 + sigil * 20),
        )?;
    }

    for face in 1..=5 {
        let image = pattern::face_icon(icon, icon);
        plan.push(format!("face{}", face), image.clone())?;
        plan.push(format!("face_p{}", face), image)?;
    }
    for face in SPECIAL_FACES {
        plan.push(format!("face_{}", face), pattern::face_icon(icon, icon))?;
    }

    for bar in STATUS_BARS {
        plan.push(
            bar,
            pattern::solid(STATUS_BAR_WIDTH, STATUS_BAR_HEIGHT, STATUS_BAR_INDEX),
        )?;
    }
    for name in MISC {
        plan.push(name, pattern::checkerboard(icon, icon, 128, 64))?;
    }

    Ok(plan.assets)
}

pub fn generate_graphics(writer: &mut AssetWriter) -> Result<(), GenError> {
    let assets = plan_graphics()?;
    for asset in &assets {
        let data = encode_lmp(&asset.image).map_err(|source| GenError::Lmp {
            name: asset.name.clone(),
            source,
        })?;
        writer.write(&asset.path(), &data)?;
        logging::info(format!(
            "created {} ({}x{})",
            asset.path(),
            asset.image.width,
            asset.image.height
        ));
    }
    logging::info(format!("created {} gfx stubs", assets.len()));
    Ok(())
}
