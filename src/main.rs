//! Supply Run entry point
//!
//! Runs a headless scripted session: the frame loop drives the simulation and
//! the draw list is recorded rather than shown. Pass a JSON config path as the
//! first argument to override the defaults.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::time::Instant;

    use supply_run::platform::{Key, ScriptedInput};
    use supply_run::renderer::DrawRecorder;
    use supply_run::{Game, GameConfig};

    env_logger::init();
    log::info!("Supply Run (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load config {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => GameConfig::default(),
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid config: {}", e);
            std::process::exit(1);
        }
    };

    // Through the menus into a Medium round, then wander the arena
    let mut input = ScriptedInput::new()
        .hold(&[Key::C], 1)
        .idle(1)
        .hold(&[Key::S], 1)
        .idle(1)
        .hold(&[Key::M], 1)
        .hold(&[Key::Right], 180)
        .hold(&[Key::Right, Key::Up], 90)
        .hold(&[Key::Down], 180)
        .hold(&[Key::Left, Key::Down], 60)
        .idle(120);

    log::info!("Running {} scripted frames", input.remaining());

    let mut renderer = DrawRecorder::new();
    let started = Instant::now();
    while game.is_running() {
        renderer.begin_frame();
        let now = started.elapsed().as_secs_f64();
        if !game.frame(&mut input, &mut renderer, now) {
            break;
        }
    }

    let state = game.state();
    log::info!(
        "Session ended on {:?} after {} frames ({} fps): {}/{} supplies ({} left), {} lives, {} draw calls",
        state.screen,
        game.frames(),
        game.fps(),
        state.collected,
        state.total_supplies(),
        state.remaining_supplies(),
        state.lives,
        renderer.total()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts embed the library directly
}
