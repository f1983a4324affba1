//! Host capability traits.
//!
//! Everything outside the decision core — rendering, audio output,
//! resource storage, device sensors, network transport — is owned by the
//! host and reached through these narrow traits. The host implements
//! them and hands the engine a [`HostBundle`] once, at construction.
//!
//! The engine is single-threaded and host-driven (one callback at a
//! time, run to completion), so no `Send`/`Sync` bounds are required.

use crate::api::types::{Orientation, Resource};

/// Outbound command surface: how the character acts on screen.
pub trait ActionDispatcher {
    /// Move the character by/to the given screen offset over `duration_ms`.
    /// A zero duration positions instantly.
    fn move_by(&mut self, dx: i32, dy: i32, duration_ms: u32);

    /// Draw an image resource at the given resize ratio.
    fn draw(&mut self, image: &Resource, resize_ratio: f32, flipped: bool);

    /// Play a sound resource.
    fn play_sound(&mut self, sound: &Resource, looping: bool);

    /// Show a transient message bubble next to the character.
    fn show_message(&mut self, text: &str);

    /// Show a system-level notification.
    fn show_system_message(&mut self, text: &str);
}

/// Read-only device and screen state, sampled by the engine each tick.
pub trait DeviceState {
    /// Current surface angle in degrees, 0..=359.
    fn surface_angle(&self) -> u16;

    fn orientation(&self) -> Orientation;

    fn is_screen_off(&self) -> bool;

    /// Screen height in pixels; the character rests at the bottom.
    fn screen_height(&self) -> i32;

    /// Largest resize ratio the host permits for drawn images.
    fn max_resize_ratio(&self) -> f32;

    /// Whether a previously dispatched sound is still playing.
    fn is_sound_playing(&self) -> bool;
}

/// On-screen character state owned by the host's gesture handling.
pub trait CharacterHandle {
    fn is_being_dragged(&self) -> bool;
}

/// Fire-and-forget network capability. Optional: hosts without network
/// access simply omit it from the bundle. Replies, if any, arrive later
/// through the engine's `on_response_received` callback — never awaited
/// in place.
pub trait RestClient {
    fn post_object(&mut self, url: &str, body: &str);

    /// Re-run the host's user identity check.
    fn verify_user_identity(&mut self);
}

/// Receives menu entries during `on_configure_menu_items`. Menu layout
/// and rendering are entirely host-side.
pub trait MenuBuilder {
    fn add_item(&mut self, label: &str);
}

/// Read access to the character's resources, keyed by category.
/// The engine only queries; registration and storage are host concerns.
pub trait ResourceStore {
    /// All image resources registered under `category`. Empty slice for
    /// unknown categories.
    fn images(&self, category: &str) -> &[Resource];

    /// All sound resources registered under `category`.
    fn sounds(&self, category: &str) -> &[Resource];
}

/// The full set of host capabilities, injected once at construction.
pub struct HostBundle {
    pub actions: Box<dyn ActionDispatcher>,
    pub device: Box<dyn DeviceState>,
    pub character: Box<dyn CharacterHandle>,
    pub resources: Box<dyn ResourceStore>,
    /// Network capability; None for offline hosts.
    pub rest: Option<Box<dyn RestClient>>,
}
