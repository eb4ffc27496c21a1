use tictactoe_core::Settings;
use tictactoe_web::{init_logging, mount};
use tracing::{error, info, warn};

const SETTINGS: &str = include_str!("../settings.toml");

fn main() {
    console_error_panic_hook::set_once();

    let (settings, invalid) = match Settings::from_toml_str(SETTINGS) {
        Ok(settings) => (settings, None),
        Err(err) => (Settings::default(), Some(err)),
    };

    init_logging(settings.log_filter());
    if let Some(err) = invalid {
        warn!(error = %err, "Embedded settings invalid, using defaults");
    }
    info!("Starting tic-tac-toe");

    if let Err(err) = mount(&settings) {
        error!(error = %err, "Failed to mount app");
    }
}
