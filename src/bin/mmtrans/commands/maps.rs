use anyhow::Result;

use super::Session;
use crate::cli::MapsArgs;
use crate::display::{self, Context};

pub fn run(args: MapsArgs, session: &Session, ctx: Context) -> Result<()> {
    let router = session.router();
    let candidates = session.candidates();
    let maps = router.capability_maps(args.axis, candidates.as_deref())?;

    display::print_capability_maps(args.axis, &maps, ctx);
    Ok(())
}
