use std::path::Path;
use std::process::Command;

/// Program name, resolved through the activated environment's PATH.
pub const DASHBOARD_COMMAND: &str = "streamlit";

/// Entry point expected next to the launcher. Not validated before launch;
/// a missing file is the dashboard's own startup failure.
pub const APP_ENTRYPOINT: &str = "app.py";

pub const STATUS_BANNER: &str = "Starting Stock Dashboard...";
pub const VENV_MISSING_MESSAGE: &str = "Error: 'venv' directory not found.";
pub const VENV_MISSING_HINT: &str = "Create one first with: python3 -m venv venv";

/// URL prefix for serving behind a reverse proxy, e.g. `Some("/stocks")`.
/// No runtime switch selects it; edit this constant and rebuild to enable.
const BASE_URL_PATH: Option<&str> = None;

/// The fixed argument list: headless (no browser window on the server host)
/// and bound to all interfaces instead of localhost only.
pub fn arguments() -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        APP_ENTRYPOINT.to_string(),
        "--server.headless".to_string(),
        "true".to_string(),
        "--server.address".to_string(),
        "0.0.0.0".to_string(),
    ];

    if let Some(prefix) = BASE_URL_PATH {
        args.push("--server.baseUrlPath".to_string());
        args.push(prefix.to_string());
    }

    args
}

/// Builds the dashboard invocation, rooted at `dir`.
pub fn command(dir: &Path) -> Command {
    let mut cmd = Command::new(DASHBOARD_COMMAND);
    cmd.args(arguments()).current_dir(dir);
    cmd
}
