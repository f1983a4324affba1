//! A terminal host for the character engine.
//!
//! Implements every host capability against stdout, then drives the
//! agent through a full tilt revolution in both orientations and fires
//! each discrete event once. Run it to watch the dispatch stream.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;

use critter_engine::{
    ActionDispatcher, Agent, AgentConfig, CharacterHandle, DeviceState, HeadphoneState,
    HostBundle, LocationInfo, MenuBuilder, Orientation, PlaceLikelihood, Resource,
    ResourceCatalog, ResourceManifest, RestClient, UserActivityInfo, WeatherInfo,
};

const SCREEN_HEIGHT: i32 = 1920;

const MANIFEST: &str = r#"{
    "categories": {
        "activation":    { "images": ["idle/stand.png", "idle/blink.png"], "sounds": ["idle/chirp.mp3"] },
        "falling_left":  { "images": ["fall/lean_left.png"],  "sounds": ["fall/whoa.mp3"] },
        "falling_right": { "images": ["fall/lean_right.png"], "sounds": ["fall/whee.mp3"] },
        "move_left":     { "images": ["drag/face_left.png"] },
        "move_right":    { "images": ["drag/face_right.png"] },
        "move_up":       { "images": ["drag/look_up.png"] },
        "move_down":     { "images": ["drag/look_down.png"] },
        "pick":          { "images": ["drag/dangle.png"], "sounds": ["drag/squeak.mp3"] },
        "release":       { "images": ["drag/tumble.png"], "sounds": ["drag/thud.mp3"] },
        "SMS_RECEIVED":  { "images": ["events/mailbag.png"], "sounds": ["events/ding.mp3"] },
        "SCREEN_OFF":    { "images": ["idle/sleep.png"] }
    }
}"#;

struct StdoutActions;

impl ActionDispatcher for StdoutActions {
    fn move_by(&mut self, dx: i32, dy: i32, duration_ms: u32) {
        println!("  move   dx={dx} dy={dy} over {duration_ms}ms");
    }
    fn draw(&mut self, image: &Resource, resize_ratio: f32, _flipped: bool) {
        println!("  draw   {} (x{resize_ratio})", image.path);
    }
    fn play_sound(&mut self, sound: &Resource, _looping: bool) {
        println!("  play   {}", sound.path);
    }
    fn show_message(&mut self, text: &str) {
        println!("  bubble {text}");
    }
    fn show_system_message(&mut self, text: &str) {
        println!("  notify {text}");
    }
}

/// Device state the main loop mutates between ticks.
struct DeviceSim {
    angle: Cell<u16>,
    orientation: Cell<Orientation>,
}

struct SimDevice(Rc<DeviceSim>);

impl DeviceState for SimDevice {
    fn surface_angle(&self) -> u16 {
        self.0.angle.get()
    }
    fn orientation(&self) -> Orientation {
        self.0.orientation.get()
    }
    fn is_screen_off(&self) -> bool {
        false
    }
    fn screen_height(&self) -> i32 {
        SCREEN_HEIGHT
    }
    fn max_resize_ratio(&self) -> f32 {
        1.0
    }
    fn is_sound_playing(&self) -> bool {
        false
    }
}

struct NeverDragged;

impl CharacterHandle for NeverDragged {
    fn is_being_dragged(&self) -> bool {
        false
    }
}

struct StdoutMenu;

impl MenuBuilder for StdoutMenu {
    fn add_item(&mut self, label: &str) {
        println!("  menu   + {label}");
    }
}

struct StdoutRest;

impl RestClient for StdoutRest {
    fn post_object(&mut self, url: &str, body: &str) {
        println!("  POST   {url}: {body}");
    }
    fn verify_user_identity(&mut self) {
        println!("  rest   verifying user identity");
    }
}

fn main() {
    let manifest = match ResourceManifest::from_json(MANIFEST) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("bad manifest: {err}");
            return;
        }
    };
    let catalog = ResourceCatalog::from_manifest(&manifest);

    let sim = Rc::new(DeviceSim {
        angle: Cell::new(0),
        orientation: Cell::new(Orientation::Portrait),
    });

    let host = HostBundle {
        actions: Box::new(StdoutActions),
        device: Box::new(SimDevice(sim.clone())),
        character: Box::new(NeverDragged),
        resources: Box::new(catalog),
        rest: Some(Box::new(StdoutRest)),
    };

    let config = AgentConfig {
        validation_url: Some("https://example.test/api/validate".to_string()),
        ..AgentConfig::default()
    };
    let mut agent = Agent::new(host, config);

    println!("== activation ==");
    agent.on_configure_menu_items(&mut StdoutMenu);
    agent.on_start(&[]);

    let mut time: u64 = 0;
    for orientation in [Orientation::Portrait, Orientation::Landscape] {
        println!("== tilt sweep ({orientation:?}) ==");
        sim.orientation.set(orientation);
        for angle in (0u16..360).step_by(15) {
            sim.angle.set(angle);
            time += 250;
            println!("angle {angle}:");
            agent.on_tick(time);
        }
    }

    println!("== drag gestures ==");
    agent.on_pick(Vec2::new(200.0, 900.0));
    agent.on_move(Vec2::new(200.0, 900.0), Vec2::new(420.0, 880.0));
    agent.on_release(Vec2::new(420.0, 880.0));

    println!("== phone events ==");
    agent.on_phone_event("SMS_RECEIVED", r#"{"from":"+440000000000"}"#);
    agent.on_phone_event("SCREEN_OFF", "{}");

    println!("== awareness ==");
    agent.on_location_received(&LocationInfo {
        accuracy: 8.0,
        bearing: 270.0,
        latitude: 51.50135,
        longitude: -0.14189,
        speed: 1.2,
    });
    agent.on_user_activity_state_received(&UserActivityInfo {
        state: "ON_FOOT".to_string(),
        chance: 92,
    });
    agent.on_weather_received(&WeatherInfo {
        description: "scattered clouds".to_string(),
        dew_point: 8.5,
        feels_like: 13.0,
        humidity: 72.0,
        temperature: 14.0,
    });
    agent.on_headphone_state_received(HeadphoneState::Unplugged);
    agent.on_places_received(&[PlaceLikelihood {
        name: "Hyde Park".to_string(),
        likelihood: 0.74,
    }]);
    agent.on_speech_recognition_results("hello there");
    agent.on_menu_item_selected("feed");

    println!("== network response ==");
    agent.on_response_received(r#"{"status":"ok"}"#);

    println!("== background ==");
    agent.on_background_tick(3_600_000);
}
