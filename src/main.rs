//! Brick Catcher entry point
//!
//! Headless native runner: loads settings, drives the simulation under the
//! autopilot and reports the score. Rendering is left to a windowed host.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use brick_catcher::Settings;
    use brick_catcher::platform::InputState;
    use brick_catcher::sim::{GameEvent, GamePhase, GameState, tick};

    env_logger::init();
    log::info!("Brick Catcher (native) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });
    log::info!("Seed: {}", seed);

    let mut state = GameState::with_speed(seed, settings.initial_speed);
    let mut input = InputState::new(settings.screen);
    input.idle_mode = settings.idle_mode;

    let mut games_over = 0u32;
    let mut best = state.score;
    for n in 0..settings.demo_ticks {
        let tick_input = input.take_tick_input(settings.frame_dt);
        tick(&mut state, &tick_input);
        best = best.max(state.score);

        if state.events.contains(&GameEvent::GameOver) {
            games_over += 1;
            log::info!("Tick {}: game over with score {}", n, state.score);
        }
        // Keep the demo going
        if state.phase == GamePhase::GameOver && settings.idle_mode {
            state.reset();
        }
        if state.quit_requested {
            break;
        }
        if n % 600 == 0 {
            log::debug!("Tick {}: score {} phase {:?}", n, state.score, state.phase);
        }
    }

    let display = state.score_display();
    println!(
        "Score: {}{}{} (best {}, {} game over{}) after {:.1}s",
        if display.negative { "-" } else { "" },
        display.tens,
        display.ones,
        best,
        games_over,
        if games_over == 1 { "" } else { "s" },
        state.time
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No web host; the library is driven by the embedding page
}
