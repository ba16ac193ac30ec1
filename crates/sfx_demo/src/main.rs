//! Sound effect demo
//!
//! Plays the effects named on the command line through the pooled player,
//! then waits for them to finish.
//!
//! ```text
//! sfx_demo [--config sfx.toml] [--list] LAZER LAZER EXPLOSION1 ...
//! ```

use sfx_player::foundation::logging;
use sfx_player::prelude::*;
use std::time::{Duration, Instant};

const DEFAULT_CONFIG_PATH: &str = "sfx.toml";
const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_WAIT: Duration = Duration::from_secs(30);
const PLAY_SPACING: Duration = Duration::from_millis(120);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let mut config_path = DEFAULT_CONFIG_PATH.to_string();
    let mut effects = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                config_path = args.next().ok_or("--config needs a path")?;
            }
            "--list" => {
                for effect in SoundEffect::ALL {
                    println!("{:<12} {}", effect, effect.resource_path());
                }
                return Ok(());
            }
            name => effects.push(name.parse::<SoundEffect>()?),
        }
    }

    if effects.is_empty() {
        effects.push(SoundEffect::Startup);
    }

    let config = load_config(&config_path);

    let backend = RodioBackend::try_default()?;
    let store = FileResourceStore::new(config.search_paths.clone());
    let player = SoundPlayer::new(backend, store, &config);

    for effect in effects {
        match player.play(effect) {
            Some(_) => log::info!("Playing {}", effect),
            None => log::warn!("{} did not play", effect),
        }
        std::thread::sleep(PLAY_SPACING);
    }

    let started = Instant::now();
    while player.is_any_running() && started.elapsed() < MAX_WAIT {
        std::thread::sleep(POLL_INTERVAL);
    }

    log::info!(
        "Done: {} sound files cached ({} bytes)",
        player.cache().len(),
        player.cache().total_bytes()
    );
    Ok(())
}

/// Load the config file, falling back to defaults when it is absent or broken
fn load_config(path: &str) -> SoundConfig {
    if !std::path::Path::new(path).exists() {
        log::debug!("No config at {}, using defaults", path);
        return SoundConfig::default();
    }

    match SoundConfig::load_from_file(path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path, e);
            SoundConfig::default()
        }
    }
}
