//! Narrative sequencing through full ticks: line activation, fades and nightfall.

use std::sync::{Arc, Mutex};

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use glimmerwood::components::boxcollider::BoxCollider;
use glimmerwood::components::dynamictext::DynamicText;
use glimmerwood::components::mapposition::MapPosition;
use glimmerwood::components::nightoverlay::NightOverlay;
use glimmerwood::components::opacity::Opacity;
use glimmerwood::components::screenposition::ScreenPosition;
use glimmerwood::components::timer::{Continuation, Timer};
use glimmerwood::events::narrative::{NightfallEvent, PoemLineActivated};
use glimmerwood::events::timer::TimerEvent;
use glimmerwood::game::FrameOrchestrator;
use glimmerwood::resources::gameconfig::GameConfig;
use glimmerwood::resources::input::{InputSource, Intents};
use glimmerwood::resources::narrative::{FadePhase, NarrativeScript, NarrativeState};
use glimmerwood::resources::spawnchance::AmbientSpawnChance;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn poem_line(id: u32, x: f32, text: &str, chance: f32) -> String {
    format!(
        r#"{{ "id": {id}, "x": {x}, "y": 0, "properties": [
            {{ "name": "text", "type": "string", "value": "{text}" }},
            {{ "name": "bulbSpawnChance", "type": "float", "value": {chance} }} ] }}"#
    )
}

fn level_json(poem: &[String]) -> String {
    format!(
        r#"{{
            "width": 100, "height": 12, "tilewidth": 32, "tileheight": 32,
            "layers": [
                {{ "name": "bulbs", "type": "objectgroup", "objects": [] }},
                {{ "name": "poem", "type": "objectgroup", "objects": [{}] }}
            ]
        }}"#,
        poem.join(",")
    )
}

fn three_lines() -> String {
    level_json(&[
        poem_line(1, 100.0, "first", 0.3),
        poem_line(2, 500.0, "second", 0.4),
        poem_line(3, 900.0, "third", 0.5),
    ])
}

fn new_game(json: &str) -> FrameOrchestrator {
    let mut config = GameConfig::new();
    config.seed = 3;
    let mut game = FrameOrchestrator::new(config, json).unwrap();
    game.set_grounded(Some(true));
    game
}

fn count_nightfalls(game: &mut FrameOrchestrator) -> Arc<Mutex<usize>> {
    let count = Arc::new(Mutex::new(0));
    let sink = count.clone();
    game.world_mut()
        .spawn(Observer::new(move |_trigger: On<NightfallEvent>| {
            *sink.lock().unwrap() += 1;
        }));
    count
}

fn player_center_x(game: &FrameOrchestrator) -> f32 {
    let world = game.world();
    let pos = world.get::<MapPosition>(game.player_entity()).unwrap().pos;
    world
        .get::<BoxCollider>(game.player_entity())
        .unwrap()
        .center_x(pos)
}

fn text_entity(game: &FrameOrchestrator) -> Entity {
    game.world()
        .resource::<NarrativeState>()
        .text_entity
        .unwrap()
}

#[test]
fn test_script_completes_once_after_last_line() {
    let mut game = new_game(&three_lines());
    let nightfalls = count_nightfalls(&mut game);
    game.set_input(InputSource::Keyboard, Intents::new(false, false, true, false));

    for _ in 0..400 {
        game.tick(DT);
        let x = player_center_x(&game);
        let complete = game.world().resource::<NarrativeState>().script_complete;
        if x < 900.0 {
            assert!(!complete, "complete too early at x={x}");
            assert_eq!(*nightfalls.lock().unwrap(), 0);
        } else {
            assert!(complete, "not complete at x={x}");
            assert_eq!(*nightfalls.lock().unwrap(), 1);
        }
    }
    assert_eq!(*nightfalls.lock().unwrap(), 1);
    let script = game.world().resource::<NarrativeScript>();
    assert!(script.lines().iter().all(|l| l.processed));
}

#[test]
fn test_line_sets_ambient_spawn_chance() {
    let mut game = new_game(&three_lines());
    game.set_input(InputSource::Keyboard, Intents::new(false, false, true, false));
    assert!(approx_eq(game.world().resource::<AmbientSpawnChance>().0, 0.2));
    while player_center_x(&game) < 100.0 {
        game.tick(DT);
    }
    assert!(approx_eq(game.world().resource::<AmbientSpawnChance>().0, 0.3));
    while player_center_x(&game) < 500.0 {
        game.tick(DT);
    }
    assert!(approx_eq(game.world().resource::<AmbientSpawnChance>().0, 0.4));
}

#[test]
fn test_last_line_shown_after_fades() {
    let mut game = new_game(&three_lines());
    game.set_input(InputSource::Keyboard, Intents::new(false, false, true, false));
    while player_center_x(&game) < 950.0 {
        game.tick(DT);
    }
    game.set_input(InputSource::Keyboard, Intents::default());
    for _ in 0..180 {
        game.tick(DT);
    }

    let text = text_entity(&game);
    let world = game.world();
    let state = world.resource::<NarrativeState>();
    assert_eq!(state.displayed_text, "third");
    assert_eq!(state.phase, FadePhase::Idle);
    assert_eq!(state.pending_line, None);
    assert_eq!(world.get::<DynamicText>(text).unwrap().content, "third");
    assert!(approx_eq(world.get::<Opacity>(text).unwrap().alpha, 1.0));
    assert!(approx_eq(world.get::<ScreenPosition>(text).unwrap().pos.x, 320.0));
    assert!(world.get::<Timer>(text).is_none());
}

#[test]
fn test_fade_out_then_fade_in_phases() {
    let json = level_json(&[poem_line(1, 0.0, "hello", 0.2)]);
    let mut game = new_game(&json);
    let text = text_entity(&game);

    game.tick(DT);
    {
        let state = game.world().resource::<NarrativeState>();
        assert_eq!(state.phase, FadePhase::FadingOut);
        assert_eq!(state.pending_line, Some(0));
        assert_eq!(state.displayed_text, "");
        let timer = game.world().get::<Timer>(text).unwrap();
        assert_eq!(timer.continuation, Continuation::ShowLine(0));
    }

    // default fade-out is 0.8s
    for _ in 0..50 {
        game.tick(DT);
    }
    {
        let state = game.world().resource::<NarrativeState>();
        assert_eq!(state.phase, FadePhase::FadingIn);
        assert_eq!(state.displayed_text, "hello");
    }

    // default fade-in is 1.2s
    for _ in 0..80 {
        game.tick(DT);
    }
    let state = game.world().resource::<NarrativeState>();
    assert_eq!(state.phase, FadePhase::Idle);
    assert!(approx_eq(game.world().get::<Opacity>(text).unwrap().alpha, 1.0));
}

#[test]
fn test_at_most_one_activation_per_tick() {
    let json = level_json(&[
        poem_line(1, 0.0, "a", 0.2),
        poem_line(2, 5.0, "b", 0.2),
        poem_line(3, 10.0, "c", 0.2),
    ]);
    let mut game = new_game(&json);
    let activations = Arc::new(Mutex::new(Vec::new()));
    let sink = activations.clone();
    game.world_mut()
        .spawn(Observer::new(move |trigger: On<PoemLineActivated>| {
            sink.lock().unwrap().push(trigger.event().index);
        }));

    for expected in 1..=3 {
        game.tick(DT);
        assert_eq!(activations.lock().unwrap().len(), expected);
    }
    assert_eq!(*activations.lock().unwrap(), vec![0, 1, 2]);
    assert!(game.world().resource::<NarrativeState>().script_complete);
}

#[test]
fn test_superseded_line_never_shows() {
    let json = level_json(&[poem_line(1, 0.0, "a", 0.2), poem_line(2, 5.0, "b", 0.2)]);
    let mut game = new_game(&json);
    // both lines activate on consecutive ticks, well inside one fade-out
    for _ in 0..200 {
        game.tick(DT);
        let state = game.world().resource::<NarrativeState>();
        assert_ne!(state.displayed_text, "a");
    }
    assert_eq!(
        game.world().resource::<NarrativeState>().displayed_text,
        "b"
    );
}

#[test]
fn test_stale_timer_event_is_ignored() {
    let mut game = new_game(&level_json(&[poem_line(1, 0.0, "only", 0.2)]));
    game.tick(DT);
    let text = text_entity(&game);
    let current = game.world().resource::<NarrativeState>().fade_token();

    game.world_mut().trigger(TimerEvent {
        entity: text,
        token: current - 1,
        continuation: Continuation::ShowLine(0),
    });
    game.world_mut().flush();

    let state = game.world().resource::<NarrativeState>();
    assert_eq!(state.phase, FadePhase::FadingOut);
    assert_eq!(state.displayed_text, "");
    assert_eq!(state.fade_token(), current);
}

#[test]
fn test_empty_script_triggers_nightfall_on_first_tick() {
    let mut game = new_game(&level_json(&[]));
    let nightfalls = count_nightfalls(&mut game);
    game.tick(DT);
    assert_eq!(*nightfalls.lock().unwrap(), 1);
    for _ in 0..10 {
        game.tick(DT);
    }
    assert_eq!(*nightfalls.lock().unwrap(), 1);
}

#[test]
fn test_night_overlays_fade_in() {
    let mut game = new_game(&level_json(&[]));
    game.tick(DT);
    // default night fade is 4s
    for _ in 0..250 {
        game.tick(DT);
    }
    let world = game.world_mut();
    let mut overlays = world.query::<(&NightOverlay, &Opacity)>();
    let alphas: Vec<f32> = overlays.iter(world).map(|(_, o)| o.alpha).collect();
    assert_eq!(alphas.len(), 3);
    assert!(alphas.iter().all(|&a| approx_eq(a, 1.0)));
}

#[test]
fn test_line_not_activated_before_trigger() {
    let mut game = new_game(&level_json(&[poem_line(1, 300.0, "far", 0.9)]));
    for _ in 0..60 {
        game.tick(DT);
    }
    let script = game.world().resource::<NarrativeScript>();
    assert!(!script.lines()[0].processed);
    assert!(!game.world().resource::<NarrativeState>().script_complete);
}
