mod error;
mod tables;

use std::io::{self, IsTerminal};

pub use error::print_error;
pub use tables::{PluginRow, print_capability_maps, print_plugins, print_resolution};

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: io::stdout().is_terminal(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}
