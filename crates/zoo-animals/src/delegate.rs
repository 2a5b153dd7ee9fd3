//! Cats whose sleep is delegated to a runtime-assigned behavior.
//!
//! A [`DelegateCat`] has fixed text for waking, noise, eating, and roaming.
//! Its `sleep` is resolved at call time by the currently assigned
//! [`SleepBehavior`]. The unassigned state is explicit: sleeping before a
//! behavior is assigned returns [`AnimalError::BehaviorUnassigned`].

use tracing::{debug, warn};
use zoo_types::{AnimalId, AnimalKind, Category, SleepBehaviorKind};

use crate::behavior::{self, SleepBehavior};
use crate::error::AnimalError;
use crate::lifecycle::Lifecycle;

/// A cat with a swappable sleep behavior.
#[derive(Debug)]
pub struct DelegateCat {
    id: AnimalId,
    name: String,
    behavior: Option<Box<dyn SleepBehavior>>,
}

impl DelegateCat {
    /// Create a cat with no sleep behavior assigned yet.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::EmptyName`] for a blank name.
    pub fn new(name: impl Into<String>) -> Result<Self, AnimalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnimalError::EmptyName);
        }
        Ok(Self {
            id: AnimalId::new(),
            name,
            behavior: None,
        })
    }

    /// Create a cat with one of the built-in behaviors already assigned.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::EmptyName`] for a blank name.
    pub fn with_behavior(
        name: impl Into<String>,
        kind: SleepBehaviorKind,
    ) -> Result<Self, AnimalError> {
        let mut cat = Self::new(name)?;
        cat.assign_behavior(behavior::build(kind));
        Ok(cat)
    }

    /// The cat's unique identifier.
    pub const fn id(&self) -> AnimalId {
        self.id
    }

    /// Replace the active behavior, returning the tag of the one it replaced.
    ///
    /// Can be called at any time, including between two keeper batches.
    pub fn assign_behavior(
        &mut self,
        behavior: Box<dyn SleepBehavior>,
    ) -> Option<SleepBehaviorKind> {
        let next = behavior.kind();
        let previous = self.behavior.replace(behavior).map(|b| b.kind());
        debug!(cat = %self.name, ?previous, ?next, "Sleep behavior assigned");
        previous
    }

    /// Return the cat to the unassigned state.
    pub fn clear_behavior(&mut self) -> Option<SleepBehaviorKind> {
        self.behavior.take().map(|b| b.kind())
    }

    /// The tag of the currently assigned behavior, if any.
    pub fn behavior_kind(&self) -> Option<SleepBehaviorKind> {
        self.behavior.as_ref().map(|b| b.kind())
    }
}

impl Lifecycle for DelegateCat {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AnimalKind {
        AnimalKind::Cat
    }

    fn make_noise(&self) -> Result<String, AnimalError> {
        Ok(self.describe("says meow"))
    }

    fn roam(&self) -> Result<String, AnimalError> {
        Ok(self.describe(Category::Feline.roam()))
    }

    fn sleep(&self) -> Result<String, AnimalError> {
        match &self.behavior {
            Some(behavior) => Ok(behavior.execute(&self.name)),
            None => {
                warn!(cat = %self.name, "Sleep requested with no behavior assigned");
                Err(AnimalError::BehaviorUnassigned {
                    name: self.name.clone(),
                })
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::behavior::{Doze, Meow, Run};

    #[test]
    fn fixed_actions_use_cat_text() {
        let cat = DelegateCat::with_behavior("Caleb", SleepBehaviorKind::Meow).unwrap();
        assert_eq!(cat.wake_up().unwrap(), "Caleb the Cat Woke up");
        assert_eq!(cat.make_noise().unwrap(), "Caleb the Cat says meow");
        assert_eq!(cat.eat().unwrap(), "Caleb the Cat is eating");
        assert_eq!(cat.roam().unwrap(), "Caleb the Cat is running around");
    }

    #[test]
    fn sleep_uses_the_current_behavior() {
        let mut cat = DelegateCat::new("Caleb").unwrap();
        assert_eq!(cat.assign_behavior(Box::new(Meow)), None);
        assert_eq!(cat.sleep().unwrap(), "Caleb the Cat is meowing");

        let replaced = cat.assign_behavior(Box::new(Run));
        assert_eq!(replaced, Some(SleepBehaviorKind::Meow));
        assert_eq!(cat.sleep().unwrap(), "Caleb the Cat is running around");
        assert_eq!(cat.behavior_kind(), Some(SleepBehaviorKind::Run));
    }

    #[test]
    fn sleep_before_assignment_is_an_error() {
        let cat = DelegateCat::new("Chloe").unwrap();
        assert_eq!(
            cat.sleep().unwrap_err(),
            AnimalError::BehaviorUnassigned {
                name: String::from("Chloe"),
            }
        );
    }

    #[test]
    fn clearing_returns_to_unassigned() {
        let mut cat = DelegateCat::new("Chloe").unwrap();
        cat.assign_behavior(Box::new(Doze));
        assert_eq!(cat.clear_behavior(), Some(SleepBehaviorKind::Doze));
        assert!(cat.behavior_kind().is_none());
        assert!(cat.sleep().is_err());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(DelegateCat::new("").unwrap_err(), AnimalError::EmptyName);
    }
}
