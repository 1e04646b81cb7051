//! Stub game-logic container, silent sounds and the default console script.

use stub_formats::progs::encode_progs_stub;
use stub_formats::wav::{encode_silent_wav, WaveFormat};

use crate::error::GenError;
use crate::logging;
use crate::output::AssetWriter;

pub const PROGS_PATH: &str = "progs/progs.dat";
pub const CONFIG_SCRIPT_PATH: &str = "scripts/quake.rc";

/// Sounds the engine precaches before any progs code runs.
pub const SOUND_PATHS: [&str; 9] = [
    "sound/ambience/water1.wav",
    "sound/ambience/wind2.wav",
    "sound/weapons/tink1.wav",
    "sound/weapons/ric1.wav",
    "sound/weapons/ric2.wav",
    "sound/weapons/ric3.wav",
    "sound/weapons/r_exp3.wav",
    "sound/wizard/hit.wav",
    "sound/hknight/hit.wav",
];

pub const QUAKE_RC: &str = r#"// Carnifex Engine - Basic Configuration
// This is a minimal configuration file

// Basic settings
set gl_texturemode "GL_LINEAR_MIPMAP_NEAREST"
set gl_anisotropic "1"
set gl_texturemode_gl1 "GL_LINEAR_MIPMAP_NEAREST"
set gl_texturemode_gl3 "GL_LINEAR_MIPMAP_NEAREST"

// Console settings
set scr_conalpha "0.5"
set scr_conbrightness "1.0"

// Video settings
set vid_width "640"
set vid_height "480"
set vid_fullscreen "0"

// Sound settings
set s_volume "0.7"
set s_musicvolume "0.5"

// Game settings
set skill "1"
set deathmatch "0"
set coop "0"

// Welcome message
echo "Welcome to Carnifex Engine!"
echo "This is a minimal placeholder game."
echo "Type 'help' for available commands."
"#;

pub fn generate_bundle(writer: &mut AssetWriter) -> Result<(), GenError> {
    writer.write(PROGS_PATH, &encode_progs_stub())?;
    logging::info(format!("created stub {}", PROGS_PATH));
    logging::warn("progs.dat is a placeholder; a playable game needs compiled QuakeC");

    let sound = encode_silent_wav(WaveFormat::PLACEHOLDER);
    for path in SOUND_PATHS {
        writer.write(path, &sound)?;
        logging::info(format!("created placeholder sound {}", path));
    }

    writer.write(CONFIG_SCRIPT_PATH, QUAKE_RC.as_bytes())?;
    logging::info(format!("created {}", CONFIG_SCRIPT_PATH));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_files_and_tags() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = AssetWriter::new(dir.path());
        generate_bundle(&mut writer).expect("bundle");

        assert_eq!(writer.written().len(), 1 + SOUND_PATHS.len() + 1);

        let progs = writer.read(PROGS_PATH).unwrap();
        assert_eq!(&progs[0..8], b"PROGS\0\0\0");
        assert_eq!(progs.len(), 1008);

        for path in SOUND_PATHS {
            let wav = writer.read(path).unwrap();
            assert_eq!(&wav[0..4], b"RIFF", "{}", path);
            assert_eq!(&wav[8..12], b"WAVE", "{}", path);
            assert_eq!(wav.len(), 44);
        }

        let script = String::from_utf8(writer.read(CONFIG_SCRIPT_PATH).unwrap()).unwrap();
        assert!(script.contains("set vid_width \"640\""));
        assert_eq!(script.lines().filter(|l| l.starts_with("echo")).count(), 3);
    }
}
