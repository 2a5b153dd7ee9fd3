//! Plain animals driven entirely by the taxonomy tables.
//!
//! An [`Animal`] is a flat record: identity plus a kind tag. Its noise comes
//! from [`AnimalKind::noise`] and its roaming from the kind's
//! [`Category::roam`]; everything else uses the [`Lifecycle`] defaults.
//!
//! [`Category::roam`]: zoo_types::Category::roam

use zoo_types::{AnimalId, AnimalKind, LifecycleAction};

use crate::error::AnimalError;
use crate::lifecycle::Lifecycle;

/// A named animal of a fixed kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    id: AnimalId,
    name: String,
    kind: AnimalKind,
}

impl Animal {
    /// Create a new animal.
    ///
    /// # Errors
    ///
    /// Returns [`AnimalError::EmptyName`] for a blank name, and
    /// [`AnimalError::DelegateKindRequired`] for kinds that only exist as
    /// behavior delegates (see [`DelegateCat`]).
    ///
    /// [`DelegateCat`]: crate::delegate::DelegateCat
    pub fn new(name: impl Into<String>, kind: AnimalKind) -> Result<Self, AnimalError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AnimalError::EmptyName);
        }
        if kind.is_delegate() {
            return Err(AnimalError::DelegateKindRequired { name, kind });
        }
        Ok(Self {
            id: AnimalId::new(),
            name,
            kind,
        })
    }

    /// The animal's unique identifier.
    pub const fn id(&self) -> AnimalId {
        self.id
    }
}

impl Lifecycle for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> AnimalKind {
        self.kind
    }

    fn make_noise(&self) -> Result<String, AnimalError> {
        self.kind
            .noise()
            .map(|noise| self.describe(noise))
            .ok_or_else(|| self.unsupported(LifecycleAction::MakeNoise))
    }

    fn roam(&self) -> Result<String, AnimalError> {
        Ok(self.describe(self.kind.category().roam()))
    }
}
