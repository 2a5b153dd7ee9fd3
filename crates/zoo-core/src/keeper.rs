//! The zoo keeper: roster owner, notifier, and batch driver.
//!
//! [`ZooKeeper`] owns the ordered roster of residents and the ordered list
//! of subscribers. Each lifecycle batch follows the same three steps:
//!
//! 1. Emit the keeper's status line for the action.
//! 2. Notify every subscriber, in registration order.
//! 3. Dispatch the action to every resident, in roster order.
//!
//! Every line goes to the caller's [`Transcript`], so that ordering is the
//! observable contract. Failures are fail-fast: the first error from a
//! subscriber, a resident, or the transcript aborts the batch.

use std::sync::Arc;

use tracing::{debug, info};
use zoo_animals::{DelegateCat, Lifecycle, Resident};
use zoo_types::{AnimalId, LifecycleAction, SubscriberId};

use crate::error::ZooError;
use crate::subscriber::Subscriber;
use crate::transcript::Transcript;

/// Owns the roster and subscribers, and drives lifecycle batches.
#[derive(Debug, Default)]
pub struct ZooKeeper {
    /// Residents in roster (insertion) order.
    residents: Vec<Resident>,
    /// Subscriber registrations in registration order. Duplicates allowed.
    subscribers: Vec<Arc<dyn Subscriber>>,
}

impl ZooKeeper {
    /// Create a keeper with an empty roster and no subscribers.
    pub const fn new() -> Self {
        Self {
            residents: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// Create a keeper owning `residents`, in the given order.
    ///
    /// Residents are matched by name in [`release`](Self::release) and
    /// [`cat_mut`](Self::cat_mut), so unlike a bare list the roster refuses
    /// a second resident with a name already in use.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::DuplicateName`] if two residents share a name.
    pub fn with_residents(
        residents: impl IntoIterator<Item = Resident>,
    ) -> Result<Self, ZooError> {
        let mut keeper = Self::new();
        for resident in residents {
            keeper.admit(resident)?;
        }
        Ok(keeper)
    }

    // -----------------------------------------------------------------------
    // Roster
    // -----------------------------------------------------------------------

    /// Append a resident to the end of the roster.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::DuplicateName`] if the name is already taken.
    pub fn admit(&mut self, resident: impl Into<Resident>) -> Result<AnimalId, ZooError> {
        let resident = resident.into();
        if self.resident(resident.name()).is_some() {
            return Err(ZooError::DuplicateName(resident.name().to_owned()));
        }
        let id = resident.id();
        debug!(name = resident.name(), kind = ?resident.kind(), %id, "Resident admitted");
        self.residents.push(resident);
        Ok(id)
    }

    /// Remove the resident called `name` from the roster and return it.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::ResidentNotFound`] if nobody has that name.
    pub fn release(&mut self, name: &str) -> Result<Resident, ZooError> {
        let index = self
            .residents
            .iter()
            .position(|r| r.name() == name)
            .ok_or_else(|| ZooError::ResidentNotFound(name.to_owned()))?;
        let resident = self.residents.remove(index);
        info!(name, "Resident released");
        Ok(resident)
    }

    /// Look up a resident by name.
    pub fn resident(&self, name: &str) -> Option<&Resident> {
        self.residents.iter().find(|r| r.name() == name)
    }

    /// Look up a cat by name for behavior reassignment.
    pub fn cat_mut(&mut self, name: &str) -> Option<&mut DelegateCat> {
        self.residents
            .iter_mut()
            .filter(|r| r.name() == name)
            .find_map(Resident::as_cat_mut)
    }

    /// The roster, in order.
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    // -----------------------------------------------------------------------
    // Subscribers
    // -----------------------------------------------------------------------

    /// Append a subscriber registration.
    ///
    /// Registering the same subscriber twice is allowed and results in two
    /// deliveries per notification.
    pub fn register(&mut self, subscriber: Arc<dyn Subscriber>) {
        info!(subscriber = %subscriber.id(), "Subscriber registered");
        self.subscribers.push(subscriber);
    }

    /// Remove the first registration matching `subscriber`.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::SubscriberNotFound`] if it is not registered.
    pub fn remove(
        &mut self,
        subscriber: &dyn Subscriber,
    ) -> Result<Arc<dyn Subscriber>, ZooError> {
        self.remove_by_id(subscriber.id())
    }

    /// Remove the first registration with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ZooError::SubscriberNotFound`] if no registration matches.
    pub fn remove_by_id(
        &mut self,
        id: SubscriberId,
    ) -> Result<Arc<dyn Subscriber>, ZooError> {
        let index = self
            .subscribers
            .iter()
            .position(|s| s.id() == id)
            .ok_or(ZooError::SubscriberNotFound(id))?;
        info!(subscriber = %id, "Subscriber removed");
        Ok(self.subscribers.remove(index))
    }

    /// Number of active registrations (duplicates counted).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Deliver `message` to every subscriber, in registration order.
    ///
    /// Delivery iterates over a snapshot of the registrations taken on
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a subscriber; later subscribers
    /// are not notified.
    pub fn notify(&self, message: &str, out: &mut dyn Transcript) -> Result<(), ZooError> {
        let snapshot = self.subscribers.clone();
        debug!(
            notice = message,
            receivers = snapshot.len(),
            "Notifying subscribers"
        );
        for subscriber in &snapshot {
            subscriber.on_notify(message, out)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Batches
    // -----------------------------------------------------------------------

    /// Run one lifecycle batch: status line, notification, then dispatch to
    /// every resident in roster order.
    ///
    /// # Errors
    ///
    /// Returns the first subscriber, resident, or transcript error.
    pub fn run_batch(
        &self,
        action: LifecycleAction,
        out: &mut dyn Transcript,
    ) -> Result<(), ZooError> {
        info!(
            action = action.operation(),
            residents = self.residents.len(),
            "Batch starting"
        );
        out.emit(action.status_line())?;
        self.notify(action.notice(), out)?;
        for resident in &self.residents {
            let line = resident.perform(action)?;
            debug!(
                name = resident.name(),
                action = action.operation(),
                "Resident acted"
            );
            out.emit(&line)?;
        }
        Ok(())
    }

    /// Wake every animal.
    ///
    /// # Errors
    ///
    /// See [`run_batch`](Self::run_batch).
    pub fn wake_animals(&self, out: &mut dyn Transcript) -> Result<(), ZooError> {
        self.run_batch(LifecycleAction::WakeUp, out)
    }

    /// Call roll: every animal makes its noise.
    ///
    /// # Errors
    ///
    /// See [`run_batch`](Self::run_batch).
    pub fn roll_call(&self, out: &mut dyn Transcript) -> Result<(), ZooError> {
        self.run_batch(LifecycleAction::MakeNoise, out)
    }

    /// Feed every animal.
    ///
    /// # Errors
    ///
    /// See [`run_batch`](Self::run_batch).
    pub fn feed_animals(&self, out: &mut dyn Transcript) -> Result<(), ZooError> {
        self.run_batch(LifecycleAction::Eat, out)
    }

    /// Exercise every animal.
    ///
    /// # Errors
    ///
    /// See [`run_batch`](Self::run_batch).
    pub fn exercise_animals(&self, out: &mut dyn Transcript) -> Result<(), ZooError> {
        self.run_batch(LifecycleAction::Roam, out)
    }

    /// Put every animal to sleep and close the zoo.
    ///
    /// # Errors
    ///
    /// See [`run_batch`](Self::run_batch).
    pub fn shut_down(&self, out: &mut dyn Transcript) -> Result<(), ZooError> {
        self.run_batch(LifecycleAction::Sleep, out)
    }

    /// Run all five batches in routine order.
    ///
    /// # Errors
    ///
    /// Stops at the first failing batch and returns its error.
    pub fn daily_routine(&self, out: &mut dyn Transcript) -> Result<(), ZooError> {
        for action in LifecycleAction::ROUTINE {
            self.run_batch(action, out)?;
        }
        info!("Daily routine complete");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use zoo_animals::{Animal, AnimalError};
    use zoo_types::{AnimalKind, SleepBehaviorKind};

    use super::*;
    use crate::subscriber::ZooAnnouncer;

    /// A subscriber that always fails.
    #[derive(Debug)]
    struct Heckler {
        id: SubscriberId,
    }

    impl Subscriber for Heckler {
        fn id(&self) -> SubscriberId {
            self.id
        }

        fn on_notify(&self, _message: &str, _out: &mut dyn Transcript) -> Result<(), ZooError> {
            Err(ZooError::Output {
                source: std::io::Error::other("heckled"),
            })
        }
    }

    fn animal(name: &str, kind: AnimalKind) -> Resident {
        Resident::from(Animal::new(name, kind).unwrap())
    }

    fn small_zoo() -> ZooKeeper {
        ZooKeeper::with_residents([
            animal("Raakel", AnimalKind::Rhino),
            animal("Tucker", AnimalKind::Tiger),
            animal("Diego", AnimalKind::Dog),
        ])
        .unwrap()
    }

    #[test]
    fn roll_call_orders_status_notice_then_roster() {
        let mut keeper = small_zoo();
        keeper.register(Arc::new(ZooAnnouncer::new()));

        let mut out: Vec<String> = Vec::new();
        keeper.roll_call(&mut out).unwrap();

        assert_eq!(
            out,
            vec![
                "The ZooKeeper called roll.",
                "Hi, This is the Zoo Announcer. The Zookeeper is about to call roll!",
                "Raakel the Rhino is growling",
                "Tucker the Tiger is chuffing",
                "Diego the Dog is barking",
            ]
        );
    }

    #[test]
    fn duplicate_registration_delivers_twice() {
        let mut keeper = ZooKeeper::new();
        let announcer: Arc<dyn Subscriber> = Arc::new(ZooAnnouncer::new());
        keeper.register(Arc::clone(&announcer));
        keeper.register(Arc::clone(&announcer));

        let mut out: Vec<String> = Vec::new();
        keeper.notify("hello", &mut out).unwrap();
        assert_eq!(out.len(), 2);

        keeper.remove(&*announcer).unwrap();
        assert_eq!(keeper.subscriber_count(), 1);
    }

    #[test]
    fn debug_output_names_residents_and_subscribers() {
        let mut keeper = small_zoo();
        keeper.register(Arc::new(ZooAnnouncer::new()));
        let rendered = format!("{keeper:?}");
        assert!(rendered.contains("Raakel"));
        assert!(rendered.contains("ZooAnnouncer"));
    }

    #[test]
    fn removing_an_unregistered_subscriber_fails() {
        let mut keeper = ZooKeeper::new();
        keeper.register(Arc::new(ZooAnnouncer::new()));
        let stranger = ZooAnnouncer::new();
        let err = keeper.remove(&stranger).unwrap_err();
        assert!(matches!(err, ZooError::SubscriberNotFound(id) if id == stranger.id()));
        assert_eq!(keeper.subscriber_count(), 1);
    }

    #[test]
    fn subscriber_failure_halts_the_batch() {
        let mut keeper = small_zoo();
        keeper.register(Arc::new(Heckler {
            id: SubscriberId::new(),
        }));
        keeper.register(Arc::new(ZooAnnouncer::new()));

        let mut out: Vec<String> = Vec::new();
        assert!(keeper.wake_animals(&mut out).is_err());
        assert_eq!(out, vec!["The ZooKeeper is waking up the animals."]);
    }

    #[test]
    fn resident_failure_halts_dispatch() {
        let mut keeper = small_zoo();
        keeper.admit(DelegateCat::new("Chloe").unwrap()).unwrap();
        keeper.admit(animal("Wade", AnimalKind::Wolf)).unwrap();

        let mut out: Vec<String> = Vec::new();
        let err = keeper.shut_down(&mut out).unwrap_err();
        assert!(matches!(
            err,
            ZooError::Animal {
                source: AnimalError::BehaviorUnassigned { .. }
            }
        ));
        // Status line plus the three residents ahead of the cat.
        assert_eq!(out.len(), 4);
        assert!(!out.iter().any(|line| line.contains("Wade")));
    }

    #[test]
    fn cats_can_be_reassigned_between_batches() {
        let mut keeper = small_zoo();
        keeper
            .admit(DelegateCat::with_behavior("Caleb", SleepBehaviorKind::Meow).unwrap())
            .unwrap();

        let mut first: Vec<String> = Vec::new();
        keeper.shut_down(&mut first).unwrap();
        assert_eq!(first.last().unwrap(), "Caleb the Cat is meowing");

        let previous = keeper
            .cat_mut("Caleb")
            .unwrap()
            .assign_behavior(zoo_animals::behavior::build(SleepBehaviorKind::Run));
        assert_eq!(previous, Some(SleepBehaviorKind::Meow));

        let mut second: Vec<String> = Vec::new();
        keeper.shut_down(&mut second).unwrap();
        assert_eq!(second.last().unwrap(), "Caleb the Cat is running around");
    }

    #[test]
    fn cat_lookup_ignores_non_cats() {
        let mut keeper = small_zoo();
        assert!(keeper.cat_mut("Raakel").is_none());
        assert!(keeper.cat_mut("Nobody").is_none());
    }

    #[test]
    fn roster_names_are_unique() {
        let mut keeper = small_zoo();
        let err = keeper.admit(animal("Diego", AnimalKind::Wolf)).unwrap_err();
        assert!(matches!(err, ZooError::DuplicateName(name) if name == "Diego"));
    }

    #[test]
    fn release_removes_from_roster() {
        let mut keeper = small_zoo();
        let released = keeper.release("Tucker").unwrap();
        assert_eq!(released.kind(), AnimalKind::Tiger);
        let names: Vec<&str> = keeper.residents().iter().map(Lifecycle::name).collect();
        assert_eq!(names, vec!["Raakel", "Diego"]);
        assert!(matches!(
            keeper.release("Tucker"),
            Err(ZooError::ResidentNotFound(_))
        ));
    }

    #[test]
    fn daily_routine_runs_five_batches() {
        let mut keeper = small_zoo();
        keeper.register(Arc::new(ZooAnnouncer::new()));
        let mut out: Vec<String> = Vec::new();
        keeper.daily_routine(&mut out).unwrap();
        // Each batch: status + announcement + three residents.
        assert_eq!(out.len(), 25);
        assert_eq!(out.first().unwrap(), "The ZooKeeper is waking up the animals.");
        assert_eq!(out.last().unwrap(), "Diego the Dog is sleeping");
    }
}
