pub mod agent;
pub mod api;
pub mod assets;
pub mod core;
pub mod host;

// Re-export key types at crate root for convenience
pub use agent::behavior::Agent;
pub use api::config::AgentConfig;
pub use api::types::{categories, Direction, MovementIntent, Orientation, Resource, TiltReading};
pub use assets::catalog::ResourceCatalog;
pub use assets::manifest::{CategoryResources, ResourceManifest};
pub use core::classifier::classify;
pub use core::rng::Rng;
pub use core::selector::{pick_image, pick_sound};
pub use core::throttle::{SoundGate, ThrottlePolicy};
pub use host::info::{
    HeadphoneState, LocationInfo, PlaceLikelihood, UserActivityInfo, WeatherInfo,
};
pub use host::traits::{
    ActionDispatcher, CharacterHandle, DeviceState, HostBundle, MenuBuilder, ResourceStore,
    RestClient,
};
