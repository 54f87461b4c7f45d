use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use serde::de::Error as _;
use tracing::warn;

use super::axis::Axis;

/// Format a plugin maps a file extension to, e.g. `gro` → `GRO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct FormatDescriptor(String);

impl FormatDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormatDescriptor {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Lower-cases an extension and strips a leading dot.
pub fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

/// Returns the normalized extension of `path`, if it has one.
pub fn extension_of(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    let ext = normalize_extension(ext);
    (!ext.is_empty()).then_some(ext)
}

/// Capability declaration for one axis: `extension → format`.
///
/// Keys are stored normalized, so lookups are case-insensitive and accept
/// a leading dot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMap {
    formats: BTreeMap<String, FormatDescriptor>,
}

impl ExtensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the format previously mapped to the
    /// same normalized extension.
    pub fn insert(
        &mut self,
        extension: &str,
        format: impl Into<FormatDescriptor>,
    ) -> Option<FormatDescriptor> {
        self.formats
            .insert(normalize_extension(extension), format.into())
    }

    pub fn get(&self, extension: &str) -> Option<&FormatDescriptor> {
        self.formats.get(&normalize_extension(extension))
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.get(extension).is_some()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.formats.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FormatDescriptor> {
        self.formats.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}

impl<E: AsRef<str>, F: Into<FormatDescriptor>> FromIterator<(E, F)> for ExtensionMap {
    fn from_iter<I: IntoIterator<Item = (E, F)>>(iter: I) -> Self {
        let mut map = ExtensionMap::new();
        for (ext, format) in iter {
            let ext = ext.as_ref();
            if let Some(replaced) = map.insert(ext, format) {
                warn!(
                    extension = ext,
                    %replaced,
                    "extension declared twice, keeping the last format"
                );
            }
        }
        map
    }
}

impl<'de> Deserialize<'de> for ExtensionMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, FormatDescriptor>::deserialize(deserializer)?;

        let mut map = ExtensionMap::new();
        for (ext, format) in raw {
            if map.insert(&ext, format).is_some() {
                return Err(D::Error::custom(format!(
                    "extension '{}' is declared more than once (keys differ only by case or a leading dot)",
                    normalize_extension(&ext)
                )));
            }
        }
        Ok(map)
    }
}

/// The extension maps a plugin publishes, at most one per [`Axis`].
///
/// An axis without a map is simply unsupported by the plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    maps: BTreeMap<Axis, ExtensionMap>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, axis: Axis, map: ExtensionMap) {
        self.maps.insert(axis, map);
    }

    /// Builder form of [`declare`](Self::declare).
    pub fn with<E, F>(mut self, axis: Axis, formats: impl IntoIterator<Item = (E, F)>) -> Self
    where
        E: AsRef<str>,
        F: Into<FormatDescriptor>,
    {
        self.declare(axis, formats.into_iter().collect());
        self
    }

    pub fn get(&self, axis: Axis) -> Option<&ExtensionMap> {
        self.maps.get(&axis)
    }

    pub fn supports(&self, axis: Axis, extension: &str) -> bool {
        self.get(axis).is_some_and(|map| map.contains(extension))
    }

    pub fn axes(&self) -> impl Iterator<Item = Axis> + '_ {
        self.maps.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_lookup_is_case_insensitive_and_ignores_leading_dot() {
        let map: ExtensionMap = [("PDB", "pdb"), (".gro", "gro")].into_iter().collect();
        assert_eq!(map.get("pdb").map(FormatDescriptor::as_str), Some("pdb"));
        assert!(map.contains(".PDB"));
        assert!(map.contains("GRO"));
        assert!(!map.contains("xyz"));
        assert_eq!(map.extensions().collect::<Vec<_>>(), vec!["gro", "pdb"]);
    }

    #[test]
    fn extension_of_path_normalizes() {
        assert_eq!(extension_of(Path::new("traj/run.DCD")), Some("dcd".to_string()));
        assert_eq!(extension_of(Path::new("topol")), None);
        assert_eq!(extension_of(Path::new(".hidden")), None);
    }

    #[test]
    fn capability_set_reports_declared_axes_only() {
        let caps = CapabilitySet::new()
            .with(Axis::MolRead, [("pdb", "PDB"), ("gro", "GRO")])
            .with(Axis::TrajWrite, [("trr", "TRR")]);

        assert!(caps.supports(Axis::MolRead, "pdb"));
        assert!(!caps.supports(Axis::MolWrite, "pdb"));
        assert!(caps.get(Axis::FfRead).is_none());
        assert_eq!(
            caps.axes().collect::<Vec<_>>(),
            vec![Axis::MolRead, Axis::TrajWrite]
        );
    }

    #[test]
    fn capability_set_deserializes_from_axis_keyed_toml() {
        let caps: CapabilitySet = toml::from_str(
            r#"
            mol-read = { PDB = "pdb", gro = "gro" }
            traj-write = { dcd = "dcd" }
            "#,
        )
        .unwrap();

        assert!(caps.supports(Axis::MolRead, "pdb"));
        assert!(caps.supports(Axis::TrajWrite, "DCD"));
        assert!(caps.get(Axis::MolWrite).is_none());
    }

    #[test]
    fn colliding_extension_keys_are_rejected_in_toml() {
        let err = toml::from_str::<CapabilitySet>(r#"mol-read = { PDB = "A", pdb = "B" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("'pdb' is declared more than once"));

        let err = toml::from_str::<CapabilitySet>(r#"mol-read = { ".gro" = "A", gro = "B" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("'gro'"));
    }

    #[test]
    fn insert_reports_the_replaced_format() {
        let mut map = ExtensionMap::new();
        assert_eq!(map.insert("pdb", "PDB"), None);
        assert_eq!(map.insert(".PDB", "PQR"), Some(FormatDescriptor::new("PDB")));
        assert_eq!(map.len(), 1);

        let built: ExtensionMap = [("xyz", "XYZ"), ("XYZ", "EXTXYZ")].into_iter().collect();
        assert_eq!(built.get("xyz").map(FormatDescriptor::as_str), Some("EXTXYZ"));
    }
}
