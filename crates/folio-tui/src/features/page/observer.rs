//! Section observation registry.
//!
//! Sections that animate on entry register a reveal latch here; a frame
//! pass feeds each registered section its current visibility ratio. The
//! registry is scoped: teardown releases every registration (fired or not)
//! so no sample can land on a torn-down section, and samples for sections
//! that never registered are silently dropped.

use std::time::Duration;

use crate::anim::RevealLatch;
use crate::sections::SectionId;

/// Presentation snapshot for one section.
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub revealed: bool,
    /// Time since the latch fired; None once settled (or never fired).
    pub elapsed: Option<Duration>,
}

impl Reveal {
    /// Hidden/neutral presentation.
    pub fn hidden() -> Self {
        Self {
            revealed: false,
            elapsed: None,
        }
    }

    /// Fully revealed with every entrance animation finished.
    pub fn settled() -> Self {
        Self {
            revealed: true,
            elapsed: None,
        }
    }
}

/// Reveal latches for the observed sections, indexed by section.
#[derive(Debug, Default)]
pub struct SectionObserver {
    slots: [Option<RevealLatch>; SectionId::COUNT],
}

impl SectionObserver {
    /// Registers an armed latch for `id`.
    pub fn register(&mut self, id: SectionId, threshold: f32) {
        self.slots[id.index()] = Some(RevealLatch::new(threshold));
    }

    /// Registers a pre-fired latch for `id` (animations disabled).
    pub fn register_settled(&mut self, id: SectionId) {
        self.slots[id.index()] = Some(RevealLatch::settled());
    }

    /// Releases one registration. Safe after the latch has fired.
    pub fn release(&mut self, id: SectionId) {
        self.slots[id.index()] = None;
    }

    /// Releases every registration. Runs on teardown.
    pub fn release_all(&mut self) {
        self.slots = [None; SectionId::COUNT];
    }

    /// Feeds a visibility sample to `id`'s latch. Returns true only when
    /// this sample fires the latch. Unregistered sections ignore samples.
    pub fn observe(&mut self, id: SectionId, ratio: f32) -> bool {
        match &mut self.slots[id.index()] {
            Some(latch) => latch.observe(ratio),
            None => false,
        }
    }

    /// Reveal snapshot for an observed section.
    ///
    /// A section without a registration stays in its hidden presentation,
    /// which is the accepted behavior for a skipped observation.
    pub fn reveal_of(&self, id: SectionId) -> Reveal {
        match &self.slots[id.index()] {
            Some(latch) => Reveal {
                revealed: latch.is_revealed(),
                elapsed: latch.elapsed(),
            },
            None => Reveal::hidden(),
        }
    }

    /// Whether any latch fired recently enough that its entrance animation
    /// may still be moving. Drives the fast poll cadence.
    pub fn any_settling(&self, window: Duration) -> bool {
        self.slots
            .iter()
            .flatten()
            .any(|latch| latch.elapsed().is_some_and(|elapsed| elapsed < window))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_section_latches_once() {
        let mut observer = SectionObserver::default();
        observer.register(SectionId::About, 0.2);

        assert!(!observer.observe(SectionId::About, 0.1));
        assert!(!observer.reveal_of(SectionId::About).revealed);

        assert!(observer.observe(SectionId::About, 0.3));
        assert!(observer.reveal_of(SectionId::About).revealed);

        // Re-entry is ignored.
        assert!(!observer.observe(SectionId::About, 0.9));
    }

    #[test]
    fn unregistered_section_drops_samples() {
        let mut observer = SectionObserver::default();

        assert!(!observer.observe(SectionId::Projects, 1.0));
        assert!(!observer.reveal_of(SectionId::Projects).revealed);
    }

    #[test]
    fn release_after_fire_is_clean() {
        let mut observer = SectionObserver::default();
        observer.register(SectionId::Skills, 0.2);
        assert!(observer.observe(SectionId::Skills, 1.0));

        observer.release(SectionId::Skills);

        assert!(!observer.observe(SectionId::Skills, 1.0));
        assert!(!observer.reveal_of(SectionId::Skills).revealed);
    }

    #[test]
    fn release_all_clears_every_slot() {
        let mut observer = SectionObserver::default();
        for id in SectionId::ALL {
            if id.threshold().is_some() {
                observer.register(id, 0.1);
            }
        }

        observer.release_all();

        for id in SectionId::ALL {
            assert!(!observer.observe(id, 1.0));
        }
    }

    #[test]
    fn settled_registration_is_revealed_without_motion() {
        let mut observer = SectionObserver::default();
        observer.register_settled(SectionId::Contact);

        let reveal = observer.reveal_of(SectionId::Contact);
        assert!(reveal.revealed);
        assert!(reveal.elapsed.is_none());
        assert!(!observer.any_settling(Duration::from_secs(10)));
    }

    #[test]
    fn settling_window_tracks_recent_reveals() {
        let mut observer = SectionObserver::default();
        observer.register(SectionId::About, 0.1);
        assert!(!observer.any_settling(Duration::from_secs(5)));

        observer.observe(SectionId::About, 1.0);
        assert!(observer.any_settling(Duration::from_secs(5)));
    }
}
