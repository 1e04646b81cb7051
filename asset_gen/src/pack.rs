use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stub_formats::pak::PakBuilder;
use walkdir::WalkDir;

use crate::error::GenError;
use crate::logging;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackSummary {
    pub pak_path: PathBuf,
    pub entries: usize,
    pub bytes: usize,
}

/// Packs every file under `root` into a PAK written to `pak_path`. Entry
/// names are relative to `root` and sorted. Existing `.pak` files and the
/// destination archive itself are skipped, whatever its extension.
pub fn pack_tree(root: &Path, pak_path: &Path) -> Result<PackSummary, GenError> {
    let mut pak = PakBuilder::new();
    let destination = fs::canonicalize(pak_path).ok();
    let walker = WalkDir::new(root).sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "pak") {
            logging::debug(format!("skipping archive {}", path.display()));
            continue;
        }
        if destination.is_some() && fs::canonicalize(path).ok() == destination {
            logging::debug(format!("skipping destination {}", path.display()));
            continue;
        }
        let name = entry_name(root, path)?;
        let data = fs::read(path).map_err(|err| GenError::io(path, err))?;
        logging::debug(format!("packing {} ({} bytes)", name, data.len()));
        pak.add(&name, data)?;
    }

    let entries = pak.entries().len();
    let encoded = pak.encode()?;
    if let Some(parent) = pak_path.parent() {
        fs::create_dir_all(parent).map_err(|err| GenError::io(parent, err))?;
    }
    fs::write(pak_path, &encoded).map_err(|err| GenError::io(pak_path, err))?;
    logging::info(format!(
        "packed {} files into {}",
        entries,
        pak_path.display()
    ));
    Ok(PackSummary {
        pak_path: pak_path.to_path_buf(),
        entries,
        bytes: encoded.len(),
    })
}

fn entry_name(root: &Path, path: &Path) -> Result<String, GenError> {
    let rel = path.strip_prefix(root).map_err(|_| {
        GenError::Config(format!(
            "{} is outside {}",
            path.display(),
            root.display()
        ))
    })?;
    let parts: Option<Vec<&str>> = rel.iter().map(|part| part.to_str()).collect();
    match parts {
        Some(parts) => Ok(parts.join("/")),
        None => Err(GenError::Config(format!(
            "{} is not valid utf-8",
            path.display()
        ))),
    }
}

fn walk_error(err: walkdir::Error) -> GenError {
    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("directory walk loop"));
    GenError::io(path, source)
}
