//! Core data types shared across the engine.

/// Screen orientation as reported by the host device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// One sample of the device tilt sensor, read each tick.
/// `angle_degrees` is in 0..=359 relative to the reference orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiltReading {
    pub orientation: Orientation,
    pub angle_degrees: u16,
}

/// Which way the character is leaning/falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A movement decision derived from one tilt reading.
/// Transient: produced by the classifier, consumed by the dispatch path,
/// never stored. Speed is signed degrees past the band pivot (negative =
/// leftward).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementIntent {
    pub category: &'static str,
    pub speed_degrees: i32,
    pub direction: Direction,
}

/// A single drawable or playable resource, identified by its path in the
/// host's resource storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub path: String,
}

impl Resource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// The fixed category vocabulary.
///
/// Categories partition the character's resources and name its reactions.
/// The vocabulary is open: phone/system event names are used verbatim as
/// categories, so everything here is a plain string key.
pub mod categories {
    /// Shown when the character first activates, and whenever the tilt
    /// angle matches no band (the idle pose).
    pub const ACTIVATION: &str = "activation";
    pub const FALLING_LEFT: &str = "falling_left";
    pub const FALLING_RIGHT: &str = "falling_right";
    pub const MOVE_LEFT: &str = "move_left";
    pub const MOVE_RIGHT: &str = "move_right";
    pub const MOVE_UP: &str = "move_up";
    pub const MOVE_DOWN: &str = "move_down";
    pub const PICK: &str = "pick";
    pub const RELEASE: &str = "release";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_from_str() {
        let r = Resource::new("idle/blink.png");
        assert_eq!(r.path, "idle/blink.png");
    }

    #[test]
    fn orientation_variants_distinct() {
        assert_ne!(Orientation::Portrait, Orientation::Landscape);
    }
}
