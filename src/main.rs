//! Midnight Run headless runner
//!
//! Plays a scripted delivery run against the simulation core and logs every
//! event. The browser build drives the core through `midnight_run::web`.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use midnight_run::{Action, GamePhase, Session, Tuning};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let tuning = match std::env::args().nth(1) {
        Some(path) => match Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{path}: {e}");
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut session = match Session::with_tuning(seed, tuning) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    // (held direction, frames) legs: out to the dumpster, then back to the cafe
    let script = [
        (Action::Right, 250),
        (Action::Down, 40),
        (Action::Left, 260),
    ];

    let frame_ms = 1000.0 / 60.0;
    let mut t = 0.0;
    session.tick(t);
    'run: for (action, frames) in script {
        session.set_input_held(action, true);
        for _ in 0..frames {
            t += frame_ms;
            let snapshot = session.tick(t);
            for event in &snapshot.events {
                log::info!(
                    "{:>7.0} ms  {:?}  player=({:.0}, {:.0}) camera={:.0} pursuers={}",
                    t,
                    event,
                    snapshot.player.pos().x,
                    snapshot.player.pos().y,
                    snapshot.camera_offset,
                    snapshot.pursuers.len()
                );
            }
            if snapshot.phase != GamePhase::Playing {
                break 'run;
            }
        }
        session.set_input_held(action, false);
    }

    let snapshot = session.snapshot();
    match snapshot.phase {
        GamePhase::Delivered => log::info!("Delivered! {}", snapshot.objective_text),
        GamePhase::Caught => log::info!("Caught after {:.1} s", t / 1000.0),
        GamePhase::Playing => log::info!("Still out: {}", snapshot.objective_text),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::wasm_start, this is just to satisfy the compiler
}
