use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GenError;
use crate::logging;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    pub rel_path: String,
    pub len: usize,
}

/// Writes assets under a fixed root, creating parent directories on demand
/// and keeping a record of everything written.
#[derive(Debug)]
pub struct AssetWriter {
    root: PathBuf,
    written: Vec<WrittenFile>,
}

impl AssetWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `rel_path` always uses `/` separators.
    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in rel_path.split('/').filter(|part| !part.is_empty()) {
            path.push(part);
        }
        path
    }

    pub fn write(&mut self, rel_path: &str, data: &[u8]) -> Result<(), GenError> {
        let path = self.resolve(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| GenError::io(parent, err))?;
        }
        fs::write(&path, data).map_err(|err| GenError::io(&path, err))?;
        logging::debug(format!("wrote {} ({} bytes)", path.display(), data.len()));
        self.written.push(WrittenFile {
            rel_path: rel_path.to_string(),
            len: data.len(),
        });
        Ok(())
    }

    pub fn read(&self, rel_path: &str) -> Result<Vec<u8>, GenError> {
        let path = self.resolve(rel_path);
        fs::read(&path).map_err(|err| GenError::io(path, err))
    }

    pub fn written(&self) -> &[WrittenFile] {
        &self.written
    }

    pub fn bytes_written(&self) -> usize {
        self.written.iter().map(|file| file.len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_creates_parents_and_records() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = AssetWriter::new(dir.path().join("game"));
        writer.write("sound/weapons/ric1.wav", b"abc").unwrap();
        writer.write("scripts/quake.rc", b"echo").unwrap();

        let path = dir.path().join("game/sound/weapons/ric1.wav");
        assert_eq!(fs::read(path).unwrap(), b"abc");
        assert_eq!(writer.read("scripts/quake.rc").unwrap(), b"echo");
        assert_eq!(writer.written().len(), 2);
        assert_eq!(writer.written()[0].rel_path, "sound/weapons/ric1.wav");
        assert_eq!(writer.bytes_written(), 7);
    }

    #[test]
    fn read_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let writer = AssetWriter::new(dir.path());
        let err = writer.read("maps/e1m1.bsp").expect_err("missing");
        match err {
            GenError::Io { path, .. } => assert!(path.ends_with("maps/e1m1.bsp")),
            other => panic!("unexpected error: {}", other),
        }
    }
}
