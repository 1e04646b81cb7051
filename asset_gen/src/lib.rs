//! Placeholder asset generators for the Carnifex engine.
#![forbid(unsafe_code)]

pub mod bundle;
pub mod config;
pub mod error;
pub mod graphics;
pub mod level;
pub mod logging;
pub mod output;
pub mod pack;

use config::GenConfig;
use error::GenError;
use output::AssetWriter;

/// Generators that write into the output tree. Each is independent; they
/// only share files on disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Bundle,
    Level,
    PatchLevel,
    Graphics,
}

impl Step {
    /// Order used when running everything at once. The patch step needs the
    /// level file, so it runs after `Level`.
    pub const ALL: [Step; 4] = [Step::Bundle, Step::Level, Step::PatchLevel, Step::Graphics];

    pub fn name(self) -> &'static str {
        match self {
            Step::Bundle => "bundle",
            Step::Level => "level",
            Step::PatchLevel => "patch-level",
            Step::Graphics => "gfx",
        }
    }
}

pub fn run_step(
    step: Step,
    writer: &mut AssetWriter,
    config: &GenConfig,
) -> Result<(), GenError> {
    logging::debug(format!(
        "running {} into {}",
        step.name(),
        writer.root().display()
    ));
    match step {
        Step::Bundle => bundle::generate_bundle(writer),
        Step::Level => level::generate_level(writer, config),
        Step::PatchLevel => level::patch_level(writer, config),
        Step::Graphics => graphics::generate_graphics(writer),
    }
}

pub fn run_steps(steps: &[Step], config: &GenConfig) -> Result<AssetWriter, GenError> {
    let validation = config.validate();
    for warning in &validation.warnings {
        logging::warn(warning);
    }
    if !validation.is_ok() {
        return Err(GenError::Config(validation.errors.join("; ")));
    }
    let mut writer = AssetWriter::new(&config.output_root);
    for &step in steps {
        run_step(step, &mut writer, config)?;
    }
    Ok(writer)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::Path;

    use super::*;

    fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
        walkdir::WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| {
                let rel = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/");
                (rel, fs::read(entry.path()).unwrap())
            })
            .collect()
    }

    fn config_at(root: &Path) -> GenConfig {
        GenConfig {
            output_root: root.to_path_buf(),
            ..GenConfig::default()
        }
    }

    #[test]
    fn full_run_layout() {
        let dir = tempfile::tempdir().unwrap();
        let writer = run_steps(&Step::ALL, &config_at(dir.path())).expect("run");
        let files = snapshot(dir.path());

        // 11 bundle files, 2 level files, start.bsp, 111 pictures
        assert_eq!(files.len(), 11 + 2 + 1 + 111);
        assert_eq!(files["maps/start.bsp"], files["maps/e1m1.bsp"]);
        assert_eq!(&files["maps/e1m1.bsp"][4..8], &29u32.to_le_bytes());
        assert_eq!(&files["progs/progs.dat"][0..5], b"PROGS");
        assert!(files.contains_key("gfx/scorebar.lmp"));
        assert!(files.contains_key("sound/hknight/hit.wav"));
        // e1m1.bsp is written twice: once by the generator, once by the patch.
        assert_eq!(writer.written().len(), files.len() + 1);
    }

    #[test]
    fn reruns_are_byte_identical() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        run_steps(&Step::ALL, &config_at(first.path())).expect("first run");
        run_steps(&Step::ALL, &config_at(second.path())).expect("second run");
        run_steps(&Step::ALL, &config_at(second.path())).expect("rerun in place");
        assert_eq!(snapshot(first.path()), snapshot(second.path()));
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = GenConfig {
            map_name: "a/b".to_string(),
            ..config_at(&dir.path().join("out"))
        };
        let err = run_steps(&Step::ALL, &config).expect_err("invalid");
        assert!(matches!(err, GenError::Config(_)));
        assert!(!dir.path().join("out").exists());
    }
}
