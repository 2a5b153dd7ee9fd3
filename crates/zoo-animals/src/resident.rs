//! Roster entries.
//!
//! [`Resident`] is the closed set of entities a keeper can own: a plain
//! table-driven [`Animal`] or a [`DelegateCat`]. Keeping the set closed lets
//! the keeper reach a cat's behavior slot without downcasting.

use zoo_types::{AnimalId, AnimalKind};

use crate::animal::Animal;
use crate::delegate::DelegateCat;
use crate::error::AnimalError;
use crate::lifecycle::Lifecycle;

/// One entity on the zoo roster.
#[derive(Debug)]
pub enum Resident {
    /// An animal whose every action comes from the taxonomy tables.
    Animal(Animal),
    /// A cat with a delegated sleep behavior.
    Cat(DelegateCat),
}

impl Resident {
    /// The resident's unique identifier.
    pub const fn id(&self) -> AnimalId {
        match self {
            Self::Animal(animal) => animal.id(),
            Self::Cat(cat) => cat.id(),
        }
    }

    /// Borrow the resident as a cat, if it is one.
    pub const fn as_cat(&self) -> Option<&DelegateCat> {
        match self {
            Self::Cat(cat) => Some(cat),
            Self::Animal(_) => None,
        }
    }

    /// Mutably borrow the resident as a cat, if it is one.
    pub const fn as_cat_mut(&mut self) -> Option<&mut DelegateCat> {
        match self {
            Self::Cat(cat) => Some(cat),
            Self::Animal(_) => None,
        }
    }

    fn inner(&self) -> &dyn Lifecycle {
        match self {
            Self::Animal(animal) => animal,
            Self::Cat(cat) => cat,
        }
    }
}

impl From<Animal> for Resident {
    fn from(animal: Animal) -> Self {
        Self::Animal(animal)
    }
}

impl From<DelegateCat> for Resident {
    fn from(cat: DelegateCat) -> Self {
        Self::Cat(cat)
    }
}

impl Lifecycle for Resident {
    fn name(&self) -> &str {
        self.inner().name()
    }

    fn kind(&self) -> AnimalKind {
        self.inner().kind()
    }

    fn wake_up(&self) -> Result<String, AnimalError> {
        self.inner().wake_up()
    }

    fn make_noise(&self) -> Result<String, AnimalError> {
        self.inner().make_noise()
    }

    fn eat(&self) -> Result<String, AnimalError> {
        self.inner().eat()
    }

    fn roam(&self) -> Result<String, AnimalError> {
        self.inner().roam()
    }

    fn sleep(&self) -> Result<String, AnimalError> {
        self.inner().sleep()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use zoo_types::{LifecycleAction, SleepBehaviorKind};

    use super::*;

    #[test]
    fn forwards_to_the_wrapped_entity() {
        let wolf = Resident::from(Animal::new("Wyatt", AnimalKind::Wolf).unwrap());
        assert_eq!(wolf.name(), "Wyatt");
        assert_eq!(
            wolf.perform(LifecycleAction::Roam).unwrap(),
            "Wyatt the Wolf is seeking something"
        );
        assert!(wolf.as_cat().is_none());

        let chloe = DelegateCat::with_behavior("Chloe", SleepBehaviorKind::Doze).unwrap();
        let cat = Resident::from(chloe);
        assert_eq!(cat.kind(), AnimalKind::Cat);
        assert_eq!(
            cat.perform(LifecycleAction::Sleep).unwrap(),
            "Chloe the Cat is sleeping"
        );
    }

    #[test]
    fn cat_behavior_is_reachable_through_the_roster_entry() {
        let caleb = DelegateCat::with_behavior("Caleb", SleepBehaviorKind::Meow).unwrap();
        let mut cat = Resident::from(caleb);
        cat.as_cat_mut()
            .unwrap()
            .assign_behavior(crate::behavior::build(SleepBehaviorKind::Run));
        assert_eq!(cat.sleep().unwrap(), "Caleb the Cat is running around");
    }
}
