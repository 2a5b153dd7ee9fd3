//! Pluggable sleep behaviors for behavior delegates.
//!
//! A [`SleepBehavior`] is stateless: its text is a pure function of the
//! owner's name. The three built-ins are [`Meow`], [`Run`], and [`Doze`];
//! [`build`] constructs one from its [`SleepBehaviorKind`] tag.

use std::fmt;

use zoo_types::SleepBehaviorKind;

/// A unit of logic a [`DelegateCat`] runs when asked to sleep.
///
/// [`DelegateCat`]: crate::delegate::DelegateCat
pub trait SleepBehavior: fmt::Debug + Send + Sync {
    /// The tag identifying this behavior.
    fn kind(&self) -> SleepBehaviorKind;

    /// Produce the sleep text for the cat named `owner`.
    fn execute(&self, owner: &str) -> String;
}

/// Meows the night away.
///
/// The text reads `is meowing`; some older transcripts of the demo spell it
/// `is mewoing`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Meow;

impl SleepBehavior for Meow {
    fn kind(&self) -> SleepBehaviorKind {
        SleepBehaviorKind::Meow
    }

    fn execute(&self, owner: &str) -> String {
        format!("{owner} the Cat is meowing")
    }
}

/// Gets the zoomies instead of sleeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Run;

impl SleepBehavior for Run {
    fn kind(&self) -> SleepBehaviorKind {
        SleepBehaviorKind::Run
    }

    fn execute(&self, owner: &str) -> String {
        format!("{owner} the Cat is running around")
    }
}

/// Sleeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Doze;

impl SleepBehavior for Doze {
    fn kind(&self) -> SleepBehaviorKind {
        SleepBehaviorKind::Doze
    }

    fn execute(&self, owner: &str) -> String {
        format!("{owner} the Cat is sleeping")
    }
}

/// Construct the built-in behavior for `kind`.
pub fn build(kind: SleepBehaviorKind) -> Box<dyn SleepBehavior> {
    match kind {
        SleepBehaviorKind::Meow => Box::new(Meow),
        SleepBehaviorKind::Run => Box::new(Run),
        SleepBehaviorKind::Doze => Box::new(Doze),
    }
}
