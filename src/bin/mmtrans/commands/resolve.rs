use std::path::Path;

use anyhow::{Result, bail};
use mmic_translator::model::capability::{extension_of, normalize_extension};

use super::Session;
use crate::cli::ResolveArgs;
use crate::display::{self, Context};

pub fn run(args: ResolveArgs, session: &Session, ctx: Context) -> Result<()> {
    let extension = target_extension(&args.target);
    if extension.is_empty() {
        bail!("Cannot determine a file extension from '{}'", args.target);
    }

    let router = session.router();
    let candidates = session.candidates();

    match router.resolve_plugin(args.axis, &extension, candidates.as_deref())? {
        Some(plugin) => {
            let toolkit = router.toolkit_for(&plugin)?;
            display::print_resolution(args.axis, &extension, &plugin, toolkit, ctx);
            Ok(())
        }
        None => {
            let supported = router.supported_extensions(args.axis, candidates.as_deref())?;
            if supported.is_empty() {
                bail!(
                    "No installed translator supports '{}' for {} (no translator declares this axis)",
                    extension,
                    args.axis
                );
            }
            bail!(
                "No installed translator supports '{}' for {} (supported: {})",
                extension,
                args.axis,
                supported.join(", ")
            );
        }
    }
}

/// A path's extension, or the argument itself taken as a bare extension.
fn target_extension(target: &str) -> String {
    extension_of(Path::new(target)).unwrap_or_else(|| normalize_extension(target))
}
