use std::fmt;

use crate::model::capability::{ExtensionMap, FormatDescriptor};

/// Per-plugin extension maps for one axis, in resolution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilityMaps {
    maps: Vec<(String, ExtensionMap)>,
}

impl CapabilityMaps {
    pub(super) fn push(&mut self, plugin: String, map: ExtensionMap) {
        self.maps.push((plugin, map));
    }

    pub fn get(&self, plugin: &str) -> Option<&ExtensionMap> {
        self.maps
            .iter()
            .find(|(id, _)| id == plugin)
            .map(|(_, map)| map)
    }

    pub fn plugins(&self) -> impl Iterator<Item = &str> {
        self.maps.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtensionMap)> {
        self.maps.iter().map(|(id, map)| (id.as_str(), map))
    }

    /// Plugins declaring `extension`, with the format each maps it to.
    pub fn claiming<'s>(
        &'s self,
        extension: &'s str,
    ) -> impl Iterator<Item = (&'s str, &'s FormatDescriptor)> + 's {
        self.maps
            .iter()
            .filter_map(move |(id, map)| map.get(extension).map(|format| (id.as_str(), format)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl fmt::Display for CapabilityMaps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, map) in self.iter() {
            write!(f, "{id}:")?;
            for (ext, format) in map.iter() {
                write!(f, " {ext}={format}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps() -> CapabilityMaps {
        let mut maps = CapabilityMaps::default();
        maps.push("P1".into(), [("pdb", "PDB"), ("xyz", "XYZ")].into_iter().collect());
        maps.push("P2".into(), [("pdb", "PDB-2")].into_iter().collect());
        maps
    }

    #[test]
    fn claiming_keeps_insertion_order() {
        let maps = maps();
        let claims: Vec<_> = maps
            .claiming("pdb")
            .map(|(id, format)| (id, format.as_str()))
            .collect();
        assert_eq!(claims, vec![("P1", "PDB"), ("P2", "PDB-2")]);
        assert_eq!(maps.claiming("gro").count(), 0);
    }

    #[test]
    fn display_lists_one_plugin_per_line() {
        assert_eq!(maps().to_string(), "P1: pdb=PDB xyz=XYZ\nP2: pdb=PDB-2\n");
    }
}
