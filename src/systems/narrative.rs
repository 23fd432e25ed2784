//! Narrative sequencing.
//!
//! The poem is a list of lines pinned to horizontal positions. As the player
//! walks right:
//!
//! 1. [`narrative_sequencer`] activates at most one due line per tick. The
//!    line's spawn chance becomes the ambient one and the current text starts
//!    fading out. A [`Timer`] on the text entity carries the continuation.
//! 2. [`narrative_timer_observer`] runs that continuation: it swaps in the
//!    new text, re-centres it and fades it in.
//! 3. Once every line has been activated, a single [`NightfallEvent`] fires
//!    and [`nightfall_observer`] fades in all night overlay layers.
//!
//! A line that activates while another is still fading supersedes it: the
//! fade token is bumped and the new timer replaces the old one, so the older
//! continuation can never apply its text.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, trace, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::dynamictext::DynamicText;
use crate::components::mapposition::MapPosition;
use crate::components::nightoverlay::NightOverlay;
use crate::components::opacity::Opacity;
use crate::components::player::Player;
use crate::components::screenposition::ScreenPosition;
use crate::components::timer::{Continuation, Timer};
use crate::components::tween::{Easing, TweenOpacity};
use crate::events::narrative::{NightfallEvent, PoemLineActivated};
use crate::events::timer::TimerEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::narrative::{NarrativeScript, NarrativeState};
use crate::resources::screensize::ScreenSize;
use crate::resources::spawnchance::AmbientSpawnChance;

/// Activate the next due poem line and detect script completion.
#[allow(clippy::too_many_arguments)]
pub fn narrative_sequencer(
    player: Query<(&MapPosition, &BoxCollider), With<Player>>,
    texts: Query<&Opacity, With<DynamicText>>,
    mut script: ResMut<NarrativeScript>,
    mut state: ResMut<NarrativeState>,
    mut chance: ResMut<AmbientSpawnChance>,
    config: Res<GameConfig>,
    mut commands: Commands,
) {
    match player.single() {
        Ok((position, collider)) => {
            let x = collider.center_x(position.pos);
            if let Some(index) = script.next_due(x) {
                script.mark_processed(index);
                if let Some(line) = script.line(index) {
                    activate_line(
                        index,
                        line.spawn_chance,
                        &line.text,
                        &texts,
                        &mut state,
                        &mut chance,
                        &config,
                        &mut commands,
                    );
                }
            }
        }
        Err(_) => trace!("Narrative activation skipped: no single player"),
    }

    if script.unprocessed_count() == 0 && state.mark_complete() {
        info!("Poem complete, nightfall");
        commands.trigger(NightfallEvent);
    }
}

#[allow(clippy::too_many_arguments)]
fn activate_line(
    index: usize,
    spawn_chance: f32,
    text: &str,
    texts: &Query<&Opacity, With<DynamicText>>,
    state: &mut NarrativeState,
    chance: &mut AmbientSpawnChance,
    config: &GameConfig,
    commands: &mut Commands,
) {
    debug!("Poem line {} activated, spawn chance {:.2}", index, spawn_chance);
    chance.set(spawn_chance);
    commands.trigger(PoemLineActivated {
        index,
        spawn_chance,
    });

    let Some(text_entity) = state.text_entity else {
        warn!("No poem text entity; showing line {} without a fade", index);
        state.begin_fade_in(text);
        state.finish_fade_in();
        return;
    };
    let token = state.begin_fade_out(index);
    let alpha = texts.get(text_entity).map(|o| o.alpha).unwrap_or(0.0);
    commands.entity(text_entity).insert((
        TweenOpacity::new(alpha, 0.0, config.fade_out).with_easing(Easing::QuadIn),
        Timer::new(config.fade_out, token, Continuation::ShowLine(index)),
    ));
}

/// Run the continuation of an expired fade timer.
pub fn narrative_timer_observer(
    trigger: On<TimerEvent>,
    script: Res<NarrativeScript>,
    screen: Res<ScreenSize>,
    config: Res<GameConfig>,
    mut state: ResMut<NarrativeState>,
    mut texts: Query<(&mut DynamicText, &mut ScreenPosition, &Opacity)>,
    mut commands: Commands,
) {
    let event = trigger.event();
    if !state.is_current(event.token) {
        trace!(
            "Ignoring superseded timer token {} (current {})",
            event.token,
            state.fade_token()
        );
        return;
    }

    match event.continuation {
        Continuation::ShowLine(index) => {
            let text = script
                .line(index)
                .map(|l| l.text.clone())
                .unwrap_or_default();
            let token = state.begin_fade_in(text.clone());
            let Ok((mut dynamic_text, mut screen_pos, opacity)) = texts.get_mut(event.entity)
            else {
                trace!("Poem text entity {:?} is gone", event.entity);
                state.finish_fade_in();
                return;
            };
            dynamic_text.set_content(text);
            screen_pos.pos.x = screen.w as f32 * 0.5;
            commands.entity(event.entity).insert((
                TweenOpacity::new(opacity.alpha, 1.0, config.fade_in).with_easing(Easing::QuadOut),
                Timer::new(config.fade_in, token, Continuation::FadeInDone),
            ));
            debug!("Poem line {} fading in", index);
        }
        Continuation::FadeInDone => state.finish_fade_in(),
    }
}

/// Fade every night overlay layer in.
pub fn nightfall_observer(
    _trigger: On<NightfallEvent>,
    config: Res<GameConfig>,
    overlays: Query<(Entity, &NightOverlay, &Opacity)>,
    mut commands: Commands,
) {
    for (entity, overlay, opacity) in overlays.iter() {
        debug!("Night overlay '{}' fading in", overlay.layer);
        commands.entity(entity).insert(
            TweenOpacity::new(opacity.alpha, 1.0, config.night_fade)
                .with_easing(Easing::QuadInOut),
        );
    }
}
