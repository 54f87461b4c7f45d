mod maps;
mod plugins;
mod resolve;

use std::path::Path;

use anyhow::{Context as _, Result};
use mmic_translator::{Environment, ManifestEnvironment, Registry, RouterConfig, TransComponent};
use tracing::debug;

use crate::cli::{Cli, Command, GlobalOptions};
use crate::display::Context;

/// Registry, environment and ordering resolved from the command line.
pub struct Session {
    registry: Registry,
    env: ManifestEnvironment,
    priority: Vec<String>,
    candidates: Vec<String>,
}

impl Session {
    fn load(opts: &GlobalOptions) -> Result<Self> {
        let config = match &opts.config {
            Some(path) => load_config(path)?,
            None => {
                debug!("no configuration given, using the default registry");
                RouterConfig::default()
            }
        };

        let registry = config
            .registry()
            .context("Invalid registry in configuration")?;

        let priority = if opts.priority.is_empty() {
            config.priority.clone()
        } else {
            opts.priority.clone()
        };

        Ok(Self {
            registry,
            env: config.environment(),
            priority,
            candidates: opts.candidates.clone(),
        })
    }

    pub fn router(&self) -> TransComponent<'_> {
        TransComponent::new(&self.registry, &self.env).with_priority(self.priority.iter().cloned())
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn environment(&self) -> &dyn Environment {
        &self.env
    }

    /// Candidate restriction from `--only`, borrowed in the form the router takes.
    pub fn candidates(&self) -> Option<Vec<&str>> {
        (!self.candidates.is_empty()).then(|| self.candidates.iter().map(String::as_str).collect())
    }
}

fn load_config(path: &Path) -> Result<RouterConfig> {
    RouterConfig::from_path(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

pub fn dispatch(cli: Cli, ctx: Context) -> Result<()> {
    let session = Session::load(&cli.global)?;

    match cli.command {
        Command::Plugins => plugins::run(&session, ctx),
        Command::Maps(args) => maps::run(args, &session, ctx),
        Command::Resolve(args) => resolve::run(args, &session, ctx),
    }
}
