//! The fixed demonstration roster.
//!
//! Two of each kind, in taxonomic order. The two cats get different sleep
//! behaviors so a single shut-down shows both delegation paths.

use zoo_animals::{Animal, AnimalError, DelegateCat, Resident};
use zoo_types::{AnimalKind, SleepBehaviorKind};

/// One roster row: name, kind, and the sleep behavior for delegate kinds.
type RosterRow = (&'static str, AnimalKind, Option<SleepBehaviorKind>);

const DEMONSTRATION_ROWS: [RosterRow; 16] = [
    ("Raakel", AnimalKind::Rhino, None),
    ("Raini", AnimalKind::Rhino, None),
    ("Henry", AnimalKind::Hippo, None),
    ("Hector", AnimalKind::Hippo, None),
    ("Ezra", AnimalKind::Elephant, None),
    ("Evan", AnimalKind::Elephant, None),
    ("Theodore", AnimalKind::Tiger, None),
    ("Tucker", AnimalKind::Tiger, None),
    ("Liam", AnimalKind::Lion, None),
    ("Leo", AnimalKind::Lion, None),
    ("Caleb", AnimalKind::Cat, Some(SleepBehaviorKind::Meow)),
    ("Chloe", AnimalKind::Cat, Some(SleepBehaviorKind::Doze)),
    ("Wyatt", AnimalKind::Wolf, None),
    ("Wade", AnimalKind::Wolf, None),
    ("Diego", AnimalKind::Dog, None),
    ("Declan", AnimalKind::Dog, None),
];

/// Name of the cat whose behavior the demonstration swaps at runtime.
pub const RECONFIGURED_CAT: &str = "Caleb";

/// Build one resident from its name, kind, and optional sleep behavior.
///
/// Delegate kinds become a [`DelegateCat`] (unassigned if `behavior` is
/// `None`); all other kinds become a plain [`Animal`] and ignore `behavior`.
///
/// # Errors
///
/// Propagates the constructor's [`AnimalError`].
pub fn build_resident(
    name: &str,
    kind: AnimalKind,
    behavior: Option<SleepBehaviorKind>,
) -> Result<Resident, AnimalError> {
    if kind.is_delegate() {
        let cat = match behavior {
            Some(behavior) => DelegateCat::with_behavior(name, behavior)?,
            None => DelegateCat::new(name)?,
        };
        Ok(Resident::Cat(cat))
    } else {
        Ok(Resident::Animal(Animal::new(name, kind)?))
    }
}

/// Build the demonstration roster in order.
///
/// # Errors
///
/// Propagates any constructor error (none occur for the built-in table).
pub fn demonstration_roster() -> Result<Vec<Resident>, AnimalError> {
    DEMONSTRATION_ROWS
        .iter()
        .map(|&(name, kind, behavior)| build_resident(name, kind, behavior))
        .collect()
}
