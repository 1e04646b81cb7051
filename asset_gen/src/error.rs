use std::fmt;
use std::io;
use std::path::PathBuf;

use stub_formats::bsp::BspError;
use stub_formats::lmp::LmpError;
use stub_formats::pak::PakError;

#[derive(Debug)]
pub enum GenError {
    Io { path: PathBuf, source: io::Error },
    Lmp { name: String, source: LmpError },
    Bsp { path: PathBuf, source: BspError },
    Pak(PakError),
    Config(String),
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            GenError::Lmp { name, source } => write!(f, "{}: {}", name, source),
            GenError::Bsp { path, source } => write!(f, "{}: {}", path.display(), source),
            GenError::Pak(err) => write!(f, "pak: {}", err),
            GenError::Config(message) => write!(f, "config: {}", message),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenError::Io { source, .. } => Some(source),
            GenError::Lmp { source, .. } => Some(source),
            GenError::Bsp { source, .. } => Some(source),
            GenError::Pak(err) => Some(err),
            GenError::Config(_) => None,
        }
    }
}

impl From<PakError> for GenError {
    fn from(err: PakError) -> Self {
        GenError::Pak(err)
    }
}
