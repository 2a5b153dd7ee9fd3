//! The lifecycle capability contract shared by every resident.
//!
//! [`Lifecycle`] names the five actions the keeper can ask of an animal.
//! Generic defaults are provided for `wake_up`, `eat`, and `sleep`; there is
//! no sensible root default for `make_noise` or `roam`, so those return
//! [`AnimalError::UnsupportedOperation`] until an implementor overrides them.

use zoo_types::{AnimalKind, LifecycleAction};

use crate::error::AnimalError;

/// An entity that responds to the five lifecycle actions.
///
/// Every action produces one line of descriptive text. Implementations do
/// not print anything themselves; delivery is the caller's concern.
pub trait Lifecycle {
    /// The animal's name.
    fn name(&self) -> &str;

    /// The animal's taxonomic kind.
    fn kind(&self) -> AnimalKind;

    /// Format `"{name} the {Kind} {what}"`.
    fn describe(&self, what: &str) -> String {
        format!("{} the {} {what}", self.name(), self.kind().label())
    }

    /// Wake up.
    fn wake_up(&self) -> Result<String, AnimalError> {
        Ok(self.describe("Woke up"))
    }

    /// Make the kind's characteristic noise.
    fn make_noise(&self) -> Result<String, AnimalError> {
        Err(self.unsupported(LifecycleAction::MakeNoise))
    }

    /// Eat.
    fn eat(&self) -> Result<String, AnimalError> {
        Ok(self.describe("is eating"))
    }

    /// Roam the enclosure.
    fn roam(&self) -> Result<String, AnimalError> {
        Err(self.unsupported(LifecycleAction::Roam))
    }

    /// Go to sleep.
    fn sleep(&self) -> Result<String, AnimalError> {
        Ok(self.describe("is sleeping"))
    }

    /// Dispatch `action` to the matching operation.
    fn perform(&self, action: LifecycleAction) -> Result<String, AnimalError> {
        match action {
            LifecycleAction::WakeUp => self.wake_up(),
            LifecycleAction::MakeNoise => self.make_noise(),
            LifecycleAction::Eat => self.eat(),
            LifecycleAction::Roam => self.roam(),
            LifecycleAction::Sleep => self.sleep(),
        }
    }

    /// Build the error for an operation this entity has no text for.
    fn unsupported(&self, action: LifecycleAction) -> AnimalError {
        AnimalError::UnsupportedOperation {
            name: self.name().to_owned(),
            kind: self.kind(),
            operation: action.operation(),
        }
    }
}
