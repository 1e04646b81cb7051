use std::fmt;

// Placeholder Quake 1 BSP: header and an all-empty lump directory. Not a
// loadable map.

pub const BSP_IDENT: [u8; 4] = *b"IBSP";
pub const BSP_VERSION: u32 = 29;
pub const LUMP_COUNT: usize = 15;
pub const BSP_STUB_PADDING: usize = 1000;
pub const BSP_HEADER_LEN: usize = 8 + LUMP_COUNT * 8;

const VERSION_RANGE: std::ops::Range<usize> = 4..8;

#[derive(Debug, PartialEq, Eq)]
pub enum BspError {
    Truncated { len: usize },
}

impl fmt::Display for BspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BspError::Truncated { len } => write!(
                f,
                "bsp data is truncated: {} bytes, need at least {}",
                len, VERSION_RANGE.end
            ),
        }
    }
}

impl std::error::Error for BspError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Lump {
    pub offset: u32,
    pub length: u32,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LumpType {
    Entities = 0,
    Planes = 1,
    Textures = 2,
    Vertices = 3,
    Visibility = 4,
    Nodes = 5,
    TexInfo = 6,
    Faces = 7,
    Lighting = 8,
    ClipNodes = 9,
    Leaves = 10,
    LeafFaces = 11,
    Edges = 12,
    LeafEdges = 13,
    Models = 14,
}

impl LumpType {
    pub const ALL: [LumpType; LUMP_COUNT] = [
        LumpType::Entities,
        LumpType::Planes,
        LumpType::Textures,
        LumpType::Vertices,
        LumpType::Visibility,
        LumpType::Nodes,
        LumpType::TexInfo,
        LumpType::Faces,
        LumpType::Lighting,
        LumpType::ClipNodes,
        LumpType::Leaves,
        LumpType::LeafFaces,
        LumpType::Edges,
        LumpType::LeafEdges,
        LumpType::Models,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LumpType::Entities => "entities",
            LumpType::Planes => "planes",
            LumpType::Textures => "textures",
            LumpType::Vertices => "vertices",
            LumpType::Visibility => "visibility",
            LumpType::Nodes => "nodes",
            LumpType::TexInfo => "texinfo",
            LumpType::Faces => "faces",
            LumpType::Lighting => "lighting",
            LumpType::ClipNodes => "clipnodes",
            LumpType::Leaves => "leaves",
            LumpType::LeafFaces => "lface",
            LumpType::Edges => "edges",
            LumpType::LeafEdges => "ledges",
            LumpType::Models => "models",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BspStub {
    pub version: u32,
    pub lumps: [Lump; LUMP_COUNT],
    pub padding: usize,
}

impl Default for BspStub {
    fn default() -> Self {
        Self {
            version: BSP_VERSION,
            lumps: [Lump::default(); LUMP_COUNT],
            padding: BSP_STUB_PADDING,
        }
    }
}

impl BspStub {
    pub fn lump(&self, lump: LumpType) -> Lump {
        self.lumps[lump as usize]
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(BSP_HEADER_LEN + self.padding);
        out.extend_from_slice(&BSP_IDENT);
        out.extend_from_slice(&self.version.to_le_bytes());
        for lump in &self.lumps {
            out.extend_from_slice(&lump.offset.to_le_bytes());
            out.extend_from_slice(&lump.length.to_le_bytes());
        }
        out.resize(out.len() + self.padding, 0);
        out
    }
}

/// Overwrites the version field in place. Everything else is left untouched,
/// including the identifier.
pub fn patch_version(data: &mut [u8], version: u32) -> Result<(), BspError> {
    if data.len() < VERSION_RANGE.end {
        return Err(BspError::Truncated { len: data.len() });
    }
    data[VERSION_RANGE].copy_from_slice(&version.to_le_bytes());
    Ok(())
}

pub fn has_bsp_ident(data: &[u8]) -> bool {
    data.len() >= 4 && data[0..4] == BSP_IDENT
}
