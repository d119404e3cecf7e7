//! JSON placement lists consumed by `mti-tools export`.

use std::fs;
use std::path::Path;

use codec::{Color, Placement, Position, DEFAULT_SWAY};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ToolError;
use crate::type_tag::resolve_type_id;

/// One placement as written by a producer script.
///
/// ```json
/// { "position": [1.0, 2.0, 3.0], "pitch": 0.1, "yaw": 1.2,
///   "system": "Grass @TYPE(1, 2)", "sway": 128, "color": [255, 40, 200, 40] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSpec {
    /// Position in source (Z-up) space.
    pub position: Position,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default)]
    pub yaw: f32,
    /// Explicit type; takes precedence over a tag in `system`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u8>,
    /// Name of the emitting system, possibly carrying an `@TYPE(...)` tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sway: Option<u8>,
    /// Color as `[a, r, g, b]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 4]>,
}

impl PlacementSpec {
    /// Converts to a [`Placement`], picking a type from the system tag if
    /// no explicit type was given.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Placement {
        let type_id = match (self.type_id, &self.system) {
            (Some(type_id), _) => type_id,
            (None, Some(system)) => resolve_type_id(system, rng),
            (None, None) => codec::DEFAULT_TYPE,
        };
        Placement::new(self.position, self.pitch, self.yaw, type_id)
            .with_sway(self.sway.unwrap_or(DEFAULT_SWAY))
            .with_color(self.color.map_or(Color::WHITE, Color::from_argb))
    }
}

/// Parses a JSON array of [`PlacementSpec`] and resolves every entry.
pub fn parse_placements<R: Rng + ?Sized>(
    json: &str,
    rng: &mut R,
) -> serde_json::Result<Vec<Placement>> {
    let specs: Vec<PlacementSpec> = serde_json::from_str(json)?;
    Ok(specs.iter().map(|spec| spec.resolve(rng)).collect())
}

/// Reads and parses a placement list from `path`.
pub fn load_placements<R: Rng + ?Sized>(
    path: &Path,
    rng: &mut R,
) -> Result<Vec<Placement>, ToolError> {
    let contents = fs::read_to_string(path).map_err(|err| ToolError::io(path, err))?;
    parse_placements(&contents, rng).map_err(|source| ToolError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
