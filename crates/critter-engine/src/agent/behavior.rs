//! The behavior engine: consumes host ticks and events, dispatches
//! draw/sound/movement commands.

use glam::Vec2;

use crate::api::config::AgentConfig;
use crate::api::types::{categories, TiltReading};
use crate::core::classifier;
use crate::core::rng::Rng;
use crate::core::selector;
use crate::core::throttle::SoundGate;
use crate::host::info::{
    HeadphoneState, LocationInfo, PlaceLikelihood, UserActivityInfo, WeatherInfo,
};
use crate::host::traits::{HostBundle, MenuBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Inactive,
    Active,
}

/// The character's reactive core.
///
/// Owns the host capabilities and the per-session dispatch state. The
/// host drives it: one callback at a time, run to completion. Ticks
/// arrive roughly every 250 ms while the screen is on, much less often
/// while it is off.
pub struct Agent {
    host: HostBundle,
    config: AgentConfig,
    gate: SoundGate,
    rng: Rng,
    phase: Phase,
    resize_ratio: f32,
    current_time: u64,
}

impl Agent {
    pub fn new(host: HostBundle, config: AgentConfig) -> Self {
        let gate = SoundGate::new(config.throttle);
        let rng = Rng::new(config.rng_seed);
        Self {
            host,
            config,
            gate,
            rng,
            phase: Phase::Inactive,
            resize_ratio: 1.0,
            current_time: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Activation: position the character at the bottom of the screen,
    /// capture the resize ratio, and show the activation pose.
    pub fn on_start(&mut self, disabled_permissions: &[String]) {
        self.phase = Phase::Active;
        let height = self.host.device.screen_height();
        self.host.actions.move_by(0, height, 0);
        self.resize_ratio = self.host.device.max_resize_ratio();
        if !disabled_permissions.is_empty() {
            log::debug!("activated with disabled permissions: {:?}", disabled_permissions);
        }
        log::info!("character activated, resting at screen bottom ({height}px)");
        self.draw_and_play(categories::ACTIVATION);
    }

    /// Screen-on tick. Reacts to the current tilt unless the character
    /// is being dragged or the screen is off.
    pub fn on_tick(&mut self, time: u64) {
        if self.phase == Phase::Active
            && !self.host.character.is_being_dragged()
            && !self.host.device.is_screen_off()
        {
            self.react_to_tilt();
        }
        self.current_time = time;
    }

    /// Screen-off tick, delivered at a much lower cadence. Same path as
    /// the foreground tick; the screen-off guard reduces it to a
    /// timestamp update in practice.
    pub fn on_background_tick(&mut self, time: u64) {
        self.on_tick(time);
    }

    fn react_to_tilt(&mut self) {
        let reading = TiltReading {
            orientation: self.host.device.orientation(),
            angle_degrees: self.host.device.surface_angle(),
        };
        match classifier::classify(reading.orientation, reading.angle_degrees) {
            Some(intent) => {
                self.draw_category(intent.category);
                if self.rng.chance(self.config.tilt_sound_chance) {
                    self.play_category(intent.category);
                }
                self.host.actions.move_by(
                    intent.speed_degrees,
                    0,
                    self.config.tilt_move_duration_ms,
                );
            }
            None => self.draw_and_play(categories::ACTIVATION),
        }
    }

    /// The user is dragging the character: show the pose matching the
    /// dominant axis of motion.
    pub fn on_move(&mut self, old: Vec2, new: Vec2) {
        let delta = new - old;
        let category = if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                categories::MOVE_RIGHT
            } else {
                categories::MOVE_LEFT
            }
        } else if delta.y > 0.0 {
            categories::MOVE_DOWN
        } else {
            categories::MOVE_UP
        };
        self.draw_and_play(category);
    }

    /// The user let go of the character. If it was dropped above its
    /// resting line, glide it back down to the bottom of the screen.
    pub fn on_release(&mut self, pos: Vec2) {
        self.draw_and_play(categories::RELEASE);
        let floor = self.host.device.screen_height() - self.config.settle_margin_px;
        if pos.y < floor as f32 {
            self.host
                .actions
                .move_by(0, floor, self.config.tilt_move_duration_ms);
        }
    }

    /// The user grabbed the character.
    pub fn on_pick(&mut self, _pos: Vec2) {
        self.draw_and_play(categories::PICK);
    }

    /// A registered phone/system event occurred. The event name is the
    /// resource category. A screen-off event additionally re-checks the
    /// user's identity when a network capability is present.
    pub fn on_phone_event(&mut self, name: &str, payload_json: &str) {
        log::debug!("phone event {name}: {payload_json}");
        self.host.actions.show_message(&format!("{name} received"));
        self.draw_and_play(name);
        if name.contains("SCREEN_OFF") {
            if let Some(rest) = self.host.rest.as_mut() {
                rest.verify_user_identity();
            }
        }
    }

    /// Reply to an earlier outbound request. Forwarded to the message
    /// sinks; optionally re-posted to the configured validation endpoint.
    pub fn on_response_received(&mut self, response: &str) {
        self.host.actions.show_message(response);
        if let Ok(encoded) = serde_json::to_string(response) {
            self.host.actions.show_system_message(&encoded);
        }
        if let (Some(rest), Some(url)) =
            (self.host.rest.as_mut(), self.config.validation_url.as_deref())
        {
            rest.post_object(url, response);
        }
    }

    pub fn on_location_received(&mut self, location: &LocationInfo) {
        let text = format!(
            "Location: accuracy {:.0}m | bearing {:.0} | lat {:.5} | lon {:.5} | speed {:.1}",
            location.accuracy,
            location.bearing,
            location.latitude,
            location.longitude,
            location.speed,
        );
        self.host.actions.show_message(&text);
    }

    pub fn on_user_activity_state_received(&mut self, activity: &UserActivityInfo) {
        let text = format!(
            "User activity: {} ({}% confidence)",
            activity.state, activity.chance
        );
        self.host.actions.show_message(&text);
    }

    pub fn on_weather_received(&mut self, weather: &WeatherInfo) {
        let text = format!(
            "Weather: {} | temp {:.1} | feels like {:.1} | humidity {:.0}% | dew point {:.1}",
            weather.description,
            weather.temperature,
            weather.feels_like,
            weather.humidity,
            weather.dew_point,
        );
        self.host.actions.show_message(&text);
    }

    pub fn on_places_received(&mut self, places: &[PlaceLikelihood]) {
        log::debug!("{} nearby places received", places.len());
    }

    pub fn on_headphone_state_received(&mut self, state: HeadphoneState) {
        log::debug!("headphone state: {:?}", state);
    }

    pub fn on_menu_item_selected(&mut self, item: &str) {
        log::debug!("menu item selected: {item}");
    }

    pub fn on_configure_menu_items(&mut self, _menu: &mut dyn MenuBuilder) {}

    pub fn on_speech_recognition_results(&mut self, results: &str) {
        log::debug!("speech recognized: {results}");
    }

    fn draw_and_play(&mut self, category: &str) {
        self.draw_category(category);
        self.play_category(category);
    }

    /// Draw a random image for the category. Categories without images
    /// draw nothing.
    fn draw_category(&mut self, category: &str) {
        if let Some(image) =
            selector::pick_image(self.host.resources.as_ref(), category, &mut self.rng)
        {
            self.host.actions.draw(image, self.resize_ratio, false);
        }
    }

    /// Request a random sound for the category, subject to the throttle
    /// gate. The gate records the category even when the category has no
    /// sound registered.
    fn play_category(&mut self, category: &str) {
        let playing = self.host.device.is_sound_playing();
        if !self.gate.should_play(category, playing) {
            return;
        }
        self.gate.record_play(category, self.current_time);
        if let Some(sound) =
            selector::pick_sound(self.host.resources.as_ref(), category, &mut self.rng)
        {
            self.host.actions.play_sound(sound, false);
        }
    }
}
