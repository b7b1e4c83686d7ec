use crate::catalog::CATALOG;
use crate::templates;
use chrono::Utc;
use logsynth_core::event::{Event, StreamIdentity};
use logsynth_core::traits::EventSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Event factory: picks a category uniformly at random and assembles a
/// fully populated event with the fixed stream identity.
pub struct EventGenerator {
    rng: StdRng,
    identity: StreamIdentity,
}

impl EventGenerator {
    /// Builds a generator, seeded for deterministic output when a seed
    /// is given.
    pub fn new(identity: StreamIdentity, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, identity }
    }
}

impl EventSource for EventGenerator {
    fn next_event(&mut self) -> Event {
        // Uniform over the catalog; no per-category weighting.
        let entry = &CATALOG[self.rng.gen_range(0..CATALOG.len())];
        let now = Utc::now();
        let message = templates::render(entry.category, &mut self.rng, now);
        Event::assemble(now.timestamp_millis(), message, &self.identity, entry.level)
    }
}
