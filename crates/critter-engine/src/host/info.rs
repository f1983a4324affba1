//! Informational event payloads delivered by the host.
//!
//! These carry ambient awareness data (location, weather, user activity).
//! The engine formats them for display and forwards them; they never
//! touch classification state.

/// A device location fix.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    /// Estimated accuracy radius in meters.
    pub accuracy: f32,
    /// Heading in degrees.
    pub bearing: f32,
    pub latitude: f64,
    pub longitude: f64,
    /// Ground speed in m/s.
    pub speed: f32,
}

/// Detected user activity (walking, in vehicle, still, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserActivityInfo {
    pub state: String,
    /// Confidence, 0..=100.
    pub chance: u8,
}

/// Current weather at the device location.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherInfo {
    pub description: String,
    pub dew_point: f32,
    pub feels_like: f32,
    pub humidity: f32,
    pub temperature: f32,
}

/// A nearby place candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceLikelihood {
    pub name: String,
    pub likelihood: f32,
}

/// Headphone jack state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadphoneState {
    Plugged,
    Unplugged,
}
