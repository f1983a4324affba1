use crate::core::throttle::ThrottlePolicy;

/// Configuration for the behavior engine, provided by the host at
/// construction.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// How repeat sound requests for the same category are gated.
    pub throttle: ThrottlePolicy,
    /// Probability (0.0..=1.0) that a matched tilt tick also requests a
    /// sound. Applies to the tilt path only; discrete events always
    /// attempt playback. Default: 0.2.
    pub tilt_sound_chance: f32,
    /// Duration of the movement command issued per matched tilt tick,
    /// and of the settle-back movement after a release (default: 250).
    pub tilt_move_duration_ms: u32,
    /// Distance in pixels above the bottom of the screen where the
    /// character comes to rest after being released (default: 50).
    pub settle_margin_px: i32,
    /// Endpoint for the fire-and-forget validation post of network
    /// responses. None disables the post.
    pub validation_url: Option<String>,
    /// Seed for the engine's random source. Fixed seeds make resource
    /// selection deterministic.
    pub rng_seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            throttle: ThrottlePolicy::Deduplicating,
            tilt_sound_chance: 0.2,
            tilt_move_duration_ms: 250,
            settle_margin_px: 50,
            validation_url: None,
            rng_seed: 42,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_device_cadence() {
        let cfg = AgentConfig::default();
        assert_eq!(cfg.tilt_move_duration_ms, 250);
        assert_eq!(cfg.tilt_sound_chance, 0.2);
        assert_eq!(cfg.settle_margin_px, 50);
        assert!(cfg.validation_url.is_none());
    }
}
