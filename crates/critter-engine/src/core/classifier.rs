//! Tilt classifier — maps a (orientation, surface angle) reading to a
//! movement category and speed.

use crate::api::types::{categories, Direction, MovementIntent, Orientation};

/// One angular band. Bounds are exclusive on both ends; speed is the
/// signed offset of the angle from `pivot`.
struct Band {
    lo: u16,
    hi: u16,
    pivot: i32,
    category: &'static str,
    direction: Direction,
}

const PORTRAIT_BANDS: &[Band] = &[
    Band {
        lo: 10,
        hi: 70,
        pivot: 10,
        category: categories::FALLING_RIGHT,
        direction: Direction::Right,
    },
    Band {
        lo: 290,
        hi: 350,
        pivot: 350,
        category: categories::FALLING_LEFT,
        direction: Direction::Left,
    },
];

const LANDSCAPE_BANDS: &[Band] = &[
    Band {
        lo: 280,
        hi: 340,
        pivot: 280,
        category: categories::FALLING_RIGHT,
        direction: Direction::Right,
    },
    Band {
        lo: 200,
        hi: 260,
        pivot: 260,
        category: categories::FALLING_LEFT,
        direction: Direction::Left,
    },
    Band {
        lo: 100,
        hi: 160,
        pivot: 100,
        category: categories::FALLING_RIGHT,
        direction: Direction::Right,
    },
    Band {
        lo: 20,
        hi: 80,
        pivot: 80,
        category: categories::FALLING_LEFT,
        direction: Direction::Left,
    },
];

/// Classify a tilt reading. Returns None when the angle falls outside
/// every band for the given orientation — the idle case, not an error.
///
/// Bands are checked in table order. They are disjoint by construction,
/// so order only matters for malformed input (e.g. wrap-around values),
/// which falls through to None.
pub fn classify(orientation: Orientation, angle_degrees: u16) -> Option<MovementIntent> {
    let bands = match orientation {
        Orientation::Portrait => PORTRAIT_BANDS,
        Orientation::Landscape => LANDSCAPE_BANDS,
    };
    bands
        .iter()
        .find(|band| angle_degrees > band.lo && angle_degrees < band.hi)
        .map(|band| MovementIntent {
            category: band.category,
            speed_degrees: angle_degrees as i32 - band.pivot,
            direction: band.direction,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portrait_right_lean() {
        let m = classify(Orientation::Portrait, 40).unwrap();
        assert_eq!(m.category, categories::FALLING_RIGHT);
        assert_eq!(m.speed_degrees, 30);
        assert_eq!(m.direction, Direction::Right);
    }

    #[test]
    fn portrait_left_lean_is_negative() {
        let m = classify(Orientation::Portrait, 320).unwrap();
        assert_eq!(m.category, categories::FALLING_LEFT);
        assert_eq!(m.speed_degrees, -30);
        assert_eq!(m.direction, Direction::Left);
    }

    #[test]
    fn landscape_bands() {
        let cases = [
            (300, categories::FALLING_RIGHT, 20),
            (230, categories::FALLING_LEFT, -30),
            (130, categories::FALLING_RIGHT, 30),
            (50, categories::FALLING_LEFT, -30),
        ];
        for (angle, category, speed) in cases {
            let m = classify(Orientation::Landscape, angle).unwrap();
            assert_eq!(m.category, category, "angle {}", angle);
            assert_eq!(m.speed_degrees, speed, "angle {}", angle);
        }
    }

    #[test]
    fn band_bounds_are_exclusive() {
        for angle in [10, 70, 290, 350] {
            assert!(classify(Orientation::Portrait, angle).is_none(), "angle {}", angle);
        }
        for angle in [20, 80, 100, 160, 200, 260, 280, 340] {
            assert!(classify(Orientation::Landscape, angle).is_none(), "angle {}", angle);
        }
    }

    #[test]
    fn flat_and_wrap_angles_are_idle() {
        assert!(classify(Orientation::Portrait, 0).is_none());
        assert!(classify(Orientation::Portrait, 180).is_none());
        assert!(classify(Orientation::Landscape, 0).is_none());
        assert!(classify(Orientation::Landscape, 359).is_none());
    }
}
