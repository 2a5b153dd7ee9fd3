//! Enumeration types for the zoo simulation.
//!
//! The taxonomy is closed: every animal has exactly one [`AnimalKind`], and
//! every kind belongs to exactly one [`Category`]. Shared behavior lives in
//! lookup tables on these enums rather than in a type hierarchy, so adding a
//! kind means adding one variant and its table rows.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// The taxonomic kind of an animal.
///
/// A kind is fixed when the animal is created and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnimalKind {
    // --- Pachyderms ---
    /// Rhinoceros.
    Rhino,
    /// Hippopotamus.
    Hippo,
    /// Elephant.
    Elephant,

    // --- Felines ---
    /// Tiger.
    Tiger,
    /// Lion.
    Lion,
    /// House cat. Its sleep is delegated to a swappable behavior, so it is
    /// only ever represented by a delegate entity.
    Cat,

    // --- Canines ---
    /// Wolf.
    Wolf,
    /// Dog.
    Dog,
}

impl AnimalKind {
    /// Every kind, in taxonomic order.
    pub const ALL: [Self; 8] = [
        Self::Rhino,
        Self::Hippo,
        Self::Elephant,
        Self::Tiger,
        Self::Lion,
        Self::Cat,
        Self::Wolf,
        Self::Dog,
    ];

    /// Display name used in every line of text an animal produces.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rhino => "Rhino",
            Self::Hippo => "Hippo",
            Self::Elephant => "Elephant",
            Self::Tiger => "Tiger",
            Self::Lion => "Lion",
            Self::Cat => "Cat",
            Self::Wolf => "Wolf",
            Self::Dog => "Dog",
        }
    }

    /// The category this kind inherits shared defaults from.
    pub const fn category(self) -> Category {
        match self {
            Self::Rhino | Self::Hippo | Self::Elephant => Category::Pachyderm,
            Self::Tiger | Self::Lion | Self::Cat => Category::Feline,
            Self::Wolf | Self::Dog => Category::Canine,
        }
    }

    /// Kind-specific noise, or `None` when the kind has no table entry.
    ///
    /// [`AnimalKind::Cat`] has no entry: its noise belongs to the delegate
    /// entity, not to the taxonomy.
    pub const fn noise(self) -> Option<&'static str> {
        match self {
            Self::Rhino => Some("is growling"),
            Self::Hippo => Some("is grunting"),
            Self::Elephant => Some("is trumpeting"),
            Self::Tiger => Some("is chuffing"),
            Self::Lion => Some("is moaning"),
            Self::Wolf => Some("is bark-howling"),
            Self::Dog => Some("is barking"),
            Self::Cat => None,
        }
    }

    /// Whether this kind must be represented by a behavior delegate.
    pub const fn is_delegate(self) -> bool {
        matches!(self, Self::Cat)
    }
}

/// An intermediate taxonomic grouping supplying shared defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Thick-skinned herbivores (rhino, hippo, elephant).
    Pachyderm,
    /// Cats, big and small.
    Feline,
    /// Wolves and dogs.
    Canine,
}

impl Category {
    /// Roaming text shared by every kind in the category.
    pub const fn roam(self) -> &'static str {
        match self {
            Self::Pachyderm => "is jumping",
            Self::Feline => "is running around",
            Self::Canine => "is seeking something",
        }
    }
}

// ---------------------------------------------------------------------------
// Sleep behaviors
// ---------------------------------------------------------------------------

/// Tag for one of the built-in sleep behaviors a delegate can be assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SleepBehaviorKind {
    /// Meows instead of sleeping.
    Meow,
    /// Runs around instead of sleeping.
    Run,
    /// Actually sleeps.
    Doze,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

/// One of the five lifecycle actions every resident responds to.
///
/// Each action is also a keeper batch: the keeper prints a status line,
/// notifies subscribers, then dispatches the action across the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifecycleAction {
    /// Wake every animal.
    WakeUp,
    /// Roll call: every animal makes its noise.
    MakeNoise,
    /// Feed every animal.
    Eat,
    /// Exercise every animal.
    Roam,
    /// Put every animal to sleep and close the zoo.
    Sleep,
}

impl LifecycleAction {
    /// The daily routine, in the order the keeper runs it.
    pub const ROUTINE: [Self; 5] = [
        Self::WakeUp,
        Self::MakeNoise,
        Self::Eat,
        Self::Roam,
        Self::Sleep,
    ];

    /// Status line the keeper emits at the start of the batch.
    pub const fn status_line(self) -> &'static str {
        match self {
            Self::WakeUp => "The ZooKeeper is waking up the animals.",
            Self::MakeNoise => "The ZooKeeper called roll.",
            Self::Eat => "The ZooKeeper is feeding the animals.",
            Self::Roam => "The ZooKeeper is giving the animals exercises.",
            Self::Sleep => "The ZooKeeper is shutting down the zoo.",
        }
    }

    /// Message broadcast to subscribers before the batch is dispatched.
    pub const fn notice(self) -> &'static str {
        match self {
            Self::WakeUp => "The Zookeeper is about to wake the animals!",
            Self::MakeNoise => "The Zookeeper is about to call roll!",
            Self::Eat => "The Zookeeper is about to feed the animals!",
            Self::Roam => "The Zookeeper is about to exercise the animals!",
            Self::Sleep => "The Zookeeper is about to close the zoo!",
        }
    }

    /// Short operation name, used in logs and error messages.
    pub const fn operation(self) -> &'static str {
        match self {
            Self::WakeUp => "wake_up",
            Self::MakeNoise => "make_noise",
            Self::Eat => "eat",
            Self::Roam => "roam",
            Self::Sleep => "sleep",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn categories_group_kinds() {
        assert_eq!(AnimalKind::Rhino.category(), Category::Pachyderm);
        assert_eq!(AnimalKind::Elephant.category(), Category::Pachyderm);
        assert_eq!(AnimalKind::Lion.category(), Category::Feline);
        assert_eq!(AnimalKind::Cat.category(), Category::Feline);
        assert_eq!(AnimalKind::Dog.category(), Category::Canine);
    }

    #[test]
    fn only_the_delegate_kind_lacks_a_noise() {
        for kind in AnimalKind::ALL {
            assert_eq!(kind.noise().is_none(), kind.is_delegate(), "{kind:?}");
        }
    }

    #[test]
    fn routine_order_is_wake_to_sleep() {
        assert_eq!(LifecycleAction::ROUTINE.first(), Some(&LifecycleAction::WakeUp));
        assert_eq!(LifecycleAction::ROUTINE.last(), Some(&LifecycleAction::Sleep));
    }

    #[test]
    fn sleep_behavior_kind_serde() {
        let json = serde_json::to_string(&SleepBehaviorKind::Doze).unwrap();
        assert_eq!(json, "\"Doze\"");
        let back: SleepBehaviorKind = serde_json::from_str("\"Run\"").unwrap();
        assert_eq!(back, SleepBehaviorKind::Run);
    }
}
