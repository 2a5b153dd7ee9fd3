//! The demonstration run.
//!
//! Builds the fixed roster, registers one announcer, runs the daily
//! routine, then optionally swaps a cat's sleep behavior and closes the zoo
//! a second time to show the swap taking effect.

use std::sync::Arc;

use tracing::info;
use zoo_animals::behavior;
use zoo_core::config::DemoConfig;
use zoo_core::{RECONFIGURED_CAT, Transcript, ZooAnnouncer, ZooKeeper, demonstration_roster};

use crate::error::EngineError;

/// Run the full demonstration, writing every line to `out`.
///
/// Returns the keeper so callers can inspect the final roster.
pub fn run_demonstration(
    config: &DemoConfig,
    out: &mut dyn Transcript,
) -> Result<ZooKeeper, EngineError> {
    let mut keeper = ZooKeeper::with_residents(demonstration_roster()?)?;
    info!(residents = keeper.residents().len(), "Roster assembled");

    keeper.register(Arc::new(ZooAnnouncer::new()));

    keeper.daily_routine(out)?;

    if let Some(kind) = config.reassign_after_routine {
        let cat = keeper
            .cat_mut(RECONFIGURED_CAT)
            .ok_or_else(|| EngineError::MissingCat {
                name: RECONFIGURED_CAT.to_owned(),
            })?;
        let previous = cat.assign_behavior(behavior::build(kind));
        info!(
            cat = RECONFIGURED_CAT,
            ?previous,
            next = ?kind,
            "Sleep behavior reassigned at runtime"
        );
        keeper.shut_down(out)?;
    }

    Ok(keeper)
}
