//! Sphere Dash entry point

use std::path::Path;
use std::process::ExitCode;

use sphere_dash::Settings;
use sphere_dash::app::App;
use sphere_dash::settings::SETTINGS_PATH;

fn main() -> ExitCode {
    // RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Sphere Dash starting...");

    let settings = Settings::load(Path::new(SETTINGS_PATH));

    match App::run(settings) {
        Ok(()) => {
            log::info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}
