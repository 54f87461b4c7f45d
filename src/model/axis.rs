use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Abstract model a translator converts: molecule, force field or trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum ModelKind {
    Molecule,
    ForceField,
    Trajectory,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [
        ModelKind::Molecule,
        ModelKind::ForceField,
        ModelKind::Trajectory,
    ];

    /// Short prefix used in axis names (`mol`, `ff`, `traj`).
    pub fn prefix(&self) -> &'static str {
        match self {
            ModelKind::Molecule => "mol",
            ModelKind::ForceField => "ff",
            ModelKind::Trajectory => "traj",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::Molecule => write!(f, "Molecule"),
            ModelKind::ForceField => write!(f, "ForceField"),
            ModelKind::Trajectory => write!(f, "Trajectory"),
        }
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "molecule" | "mol" => Ok(ModelKind::Molecule),
            "forcefield" | "ff" => Ok(ModelKind::ForceField),
            "trajectory" | "traj" => Ok(ModelKind::Trajectory),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl TryFrom<String> for ModelKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Read,
    Write,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Read => write!(f, "read"),
            Direction::Write => write!(f, "write"),
        }
    }
}

/// One of the six capability categories a plugin can declare an extension
/// map for: {molecule, force field, trajectory} × {read, write}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub enum Axis {
    MolRead,
    MolWrite,
    FfRead,
    FfWrite,
    TrajRead,
    TrajWrite,
}

impl Axis {
    pub const ALL: [Axis; 6] = [
        Axis::MolRead,
        Axis::MolWrite,
        Axis::FfRead,
        Axis::FfWrite,
        Axis::TrajRead,
        Axis::TrajWrite,
    ];

    pub fn new(kind: ModelKind, direction: Direction) -> Self {
        match (kind, direction) {
            (ModelKind::Molecule, Direction::Read) => Axis::MolRead,
            (ModelKind::Molecule, Direction::Write) => Axis::MolWrite,
            (ModelKind::ForceField, Direction::Read) => Axis::FfRead,
            (ModelKind::ForceField, Direction::Write) => Axis::FfWrite,
            (ModelKind::Trajectory, Direction::Read) => Axis::TrajRead,
            (ModelKind::Trajectory, Direction::Write) => Axis::TrajWrite,
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            Axis::MolRead | Axis::MolWrite => ModelKind::Molecule,
            Axis::FfRead | Axis::FfWrite => ModelKind::ForceField,
            Axis::TrajRead | Axis::TrajWrite => ModelKind::Trajectory,
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Axis::MolRead | Axis::FfRead | Axis::TrajRead => Direction::Read,
            Axis::MolWrite | Axis::FfWrite | Axis::TrajWrite => Direction::Write,
        }
    }

    /// Name of the module-level declaration plugins publish for this axis,
    /// e.g. `molread_ext_maps`.
    pub fn declaration_name(&self) -> &'static str {
        match self {
            Axis::MolRead => "molread_ext_maps",
            Axis::MolWrite => "molwrite_ext_maps",
            Axis::FfRead => "ffread_ext_maps",
            Axis::FfWrite => "ffwrite_ext_maps",
            Axis::TrajRead => "trajread_ext_maps",
            Axis::TrajWrite => "trajwrite_ext_maps",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind().prefix(), self.direction())
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase().replace(['_', ' '], "-");
        let (kind, direction) = match normalized.split_once('-') {
            Some(parts) => parts,
            None => {
                // Accept the compact declaration form, e.g. `molread`.
                let split = normalized
                    .find("read")
                    .or_else(|| normalized.find("write"))
                    .ok_or_else(|| Error::UnknownAxis(s.to_string()))?;
                normalized.split_at(split)
            }
        };

        let kind = kind
            .parse::<ModelKind>()
            .map_err(|_| Error::UnknownAxis(s.to_string()))?;
        let direction = match direction {
            "read" => Direction::Read,
            "write" => Direction::Write,
            _ => return Err(Error::UnknownAxis(s.to_string())),
        };

        Ok(Axis::new(kind, direction))
    }
}

impl TryFrom<String> for Axis {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
