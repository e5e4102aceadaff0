use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Cells forming the western rim of the grid; their `x_min` is pushed
/// outward so a point sitting exactly on the rim still classifies.
const WEST_RIM_CELLS: [&str; 4] = ["A1", "B1", "C1", "D3"];

/// Cells forming the northern rim of the grid; their `y_max` is pushed
/// outward for the same reason.
const NORTH_RIM_CELLS: [&str; 5] = ["A1", "A2", "A3", "A4", "C5"];

/// Outward shift applied to the rim edges.
const RIM_EPSILON: f64 = 1e-6;

/// One rectangular grid cell with axis-aligned bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub id: String,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl GridCell {
    /// True if the point falls inside this cell.
    ///
    /// The x interval is open on the left and closed on the right, the y
    /// interval is closed on the bottom and open on the top, so a point on
    /// an edge shared by two adjacent cells belongs to exactly one of them.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.x_min < x && x <= self.x_max && self.y_min <= y && y < self.y_max
    }
}

/// Ordered set of grid cells, built once from a grid definition file and
/// read-only afterwards. Workers receive their own copy via broadcast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridIndex {
    cells: Vec<GridCell>,
}

/// Shape of the grid definition document: a list of features, each carrying
/// the cell id and bounds in its `properties` object.
#[derive(Deserialize)]
struct GridFile {
    features: Vec<GridFeature>,
}

#[derive(Deserialize)]
struct GridFeature {
    properties: CellDescriptor,
}

#[derive(Deserialize)]
struct CellDescriptor {
    id: Option<String>,
    xmin: Option<f64>,
    xmax: Option<f64>,
    ymin: Option<f64>,
    ymax: Option<f64>,
}

impl CellDescriptor {
    fn require<T>(value: Option<T>, feature: usize, field: &'static str) -> Result<T, ConfigError> {
        value.ok_or(ConfigError::MissingField { feature, field })
    }

    fn into_cell(self, feature: usize) -> Result<GridCell, ConfigError> {
        let mut cell = GridCell {
            id: Self::require(self.id, feature, "id")?,
            x_min: Self::require(self.xmin, feature, "xmin")?,
            x_max: Self::require(self.xmax, feature, "xmax")?,
            y_min: Self::require(self.ymin, feature, "ymin")?,
            y_max: Self::require(self.ymax, feature, "ymax")?,
        };
        if WEST_RIM_CELLS.contains(&cell.id.as_str()) {
            cell.x_min -= RIM_EPSILON;
        }
        if NORTH_RIM_CELLS.contains(&cell.id.as_str()) {
            cell.y_max += RIM_EPSILON;
        }
        Ok(cell)
    }
}

impl GridIndex {
    /// Load and build the index from a grid definition file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let document = fs::read_to_string(path)?;
        Self::from_json(&document)
    }

    /// Build the index from a grid definition document.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let file: GridFile = serde_json::from_str(document)?;
        let cells = file
            .features
            .into_iter()
            .enumerate()
            .map(|(feature, f)| f.properties.into_cell(feature))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells })
    }

    /// Classify a point: index of the first matching cell, in cell order.
    /// Bounds are disjoint by construction, so at most one cell matches.
    pub fn locate(&self, x: f64, y: f64) -> Option<usize> {
        self.cells.iter().position(|cell| cell.contains(x, y))
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// The grid definition file could not be read
    Io(std::io::Error),
    /// The grid definition document is not valid JSON of the expected shape
    Parse(serde_json::Error),
    /// A cell descriptor is missing a required property
    MissingField { feature: usize, field: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read grid definition: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid grid definition: {}", e),
            ConfigError::MissingField { feature, field } => {
                write!(f, "Grid feature {} is missing '{}'", feature, field)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
