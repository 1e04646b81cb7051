//! Placeholder level file, its README, and the version patch step.

use stub_formats::bsp::{self, BspStub, BSP_VERSION};

use crate::config::GenConfig;
use crate::error::GenError;
use crate::logging;
use crate::output::AssetWriter;

pub const MAP_README_PATH: &str = "maps/README.md";

pub fn map_readme(map_name: &str) -> String {
    format!(
        r#"# Carnifex Engine - Test Map Information

## Map: {map}.bsp
- **Name**: Test Map
- **Type**: Single Player
- **Description**: A minimal test map for the Carnifex Engine
- **Size**: Small
- **Difficulty**: Easy

## Features
- Basic geometry
- Minimal lighting
- Placeholder textures
- No entities (yet)

## Notes
This is a placeholder map created for testing the Carnifex Engine.
A real game would need:
- Proper geometry designed in a map editor
- Compiled with qbsp, vis, and light tools
- Proper textures and lighting
- Game entities and spawn points

## How to Use
1. Run the Carnifex engine
2. Type 'map {map}' in the console
3. The engine should load the map without crashing

## Development
To create a real map:
1. Use TrenchBroom or NetRadiant to design the map
2. Export as .map file
3. Compile with qbsp, vis, and light tools
4. Place the resulting .bsp file in maps/
"#,
        map = map_name
    )
}

pub fn generate_level(writer: &mut AssetWriter, config: &GenConfig) -> Result<(), GenError> {
    let map_path = config.map_path();
    writer.write(&map_path, &BspStub::default().encode())?;
    logging::info(format!("created placeholder map {}", map_path));

    writer.write(MAP_README_PATH, map_readme(&config.map_name).as_bytes())?;
    logging::info(format!("created {}", MAP_README_PATH));
    Ok(())
}

/// Forces the version field of the configured map to 29 and clones the
/// patched file as the start map.
pub fn patch_level(writer: &mut AssetWriter, config: &GenConfig) -> Result<(), GenError> {
    let map_path = config.map_path();
    let mut data = writer.read(&map_path)?;
    if !bsp::has_bsp_ident(&data) {
        logging::warn(format!("{} does not start with IBSP", map_path));
    }
    bsp::patch_version(&mut data, BSP_VERSION).map_err(|source| GenError::Bsp {
        path: writer.resolve(&map_path),
        source,
    })?;
    writer.write(&map_path, &data)?;
    logging::info(format!("set {} version to {}", map_path, BSP_VERSION));

    let start_path = config.start_map_path();
    writer.write(&start_path, &data)?;
    logging::info(format!("copied {} to {}", map_path, start_path));
    Ok(())
}
