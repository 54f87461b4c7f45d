use anyhow::Result;

use super::Session;
use crate::display::{self, Context, PluginRow};

pub fn run(session: &Session, ctx: Context) -> Result<()> {
    let rows = collect_rows(session)?;
    display::print_plugins(&rows, ctx);
    Ok(())
}

/// One row per candidate in resolution order. Unregistered ids get `-` as
/// their toolkit.
fn collect_rows(session: &Session) -> Result<Vec<PluginRow>> {
    let router = session.router();
    let candidates = session.candidates();
    let installed = router.installed(candidates.as_deref())?;

    let mut rows = Vec::with_capacity(session.registry().len());
    for id in router.resolution_order(candidates.as_deref()) {
        let toolkit = session
            .registry()
            .get(&id)
            .map_or_else(|| "-".to_string(), |entry| entry.toolkit.clone());
        let is_installed = installed.contains(&id);

        let models = if is_installed {
            let plugin = session.environment().load(&id)?;
            plugin
                .models()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            String::new()
        };

        rows.push(PluginRow {
            plugin: id,
            toolkit,
            installed: is_installed,
            models,
        });
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmic_translator::{ManifestEnvironment, Registry};

    fn session(candidates: &[&str]) -> Session {
        let env = ManifestEnvironment::from_toml(
            r#"
            toolkits = ["parmed"]

            [plugins.mmic_parmed]
            models = ["ForceField"]

            [plugins.mmic_local]
            models = ["Molecule"]
            "#,
        )
        .unwrap();

        Session {
            registry: Registry::default_registry().clone(),
            env,
            priority: Vec::new(),
            candidates: candidates.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn lists_registry_in_declaration_order() {
        let rows = collect_rows(&session(&[])).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.plugin.as_str()).collect();
        assert_eq!(ids, vec!["mmic_mda", "mmic_parmed", "mmic_qcschema"]);

        let parmed = &rows[1];
        assert!(parmed.installed);
        assert_eq!(parmed.toolkit, "parmed");
        assert_eq!(parmed.models, "ForceField");
        assert!(!rows[0].installed);
        assert!(rows[0].models.is_empty());
    }

    #[test]
    fn unregistered_candidates_are_listed_without_toolkit() {
        let rows = collect_rows(&session(&["mmic_local", "mmic_parmed", "ghost"])).unwrap();
        let ids: Vec<_> = rows.iter().map(|r| r.plugin.as_str()).collect();
        assert_eq!(ids, vec!["mmic_parmed", "mmic_local", "ghost"]);

        assert_eq!(rows[1].toolkit, "-");
        assert!(rows[1].installed);
        assert_eq!(rows[1].models, "Molecule");

        assert_eq!(rows[2].toolkit, "-");
        assert!(!rows[2].installed);
    }
}
