//! User-agent rotation.

use std::sync::Mutex;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Sent when the pool has no agents configured.
pub const FALLBACK_USER_AGENT: &str = concat!("pantip-scraper/", env!("CARGO_PKG_VERSION"));

/// Picks a user agent uniformly at random for each request.
///
/// The generator is seedable so tests get a deterministic sequence.
#[derive(Debug)]
pub struct UserAgentPool {
    agents: Vec<String>,
    rng: Mutex<ChaCha8Rng>,
}

impl UserAgentPool {
    /// Create a pool seeded from the thread-local generator.
    pub fn new(agents: Vec<String>) -> Self {
        Self::seeded(agents, rand::random())
    }

    pub fn seeded(agents: Vec<String>, seed: u64) -> Self {
        Self {
            agents,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn pick(&self) -> String {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        self.agents
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_USER_AGENT.to_string())
    }
}
