use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use dashboard_launcher::dashboard;
use dashboard_launcher::launcher::Launcher;
use dashboard_launcher::Error;

#[derive(Parser)]
#[command(
    name = "run-dashboard",
    version,
    about = "Start the Stock Dashboard inside its Python virtual environment"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The launcher takes no arguments; parsing only rejects stray ones and
    // provides --help/--version.
    Cli::parse();

    let launcher = match Launcher::from_executable() {
        Ok(launcher) => launcher,
        Err(Error::VenvMissing(_)) => {
            eprintln!("{}", dashboard::VENV_MISSING_MESSAGE);
            eprintln!("{}", dashboard::VENV_MISSING_HINT);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", dashboard::STATUS_BANNER);

    let code = launcher.run()?;
    std::process::exit(code);
}
