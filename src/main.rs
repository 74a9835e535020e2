use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use octoscope::Config;

mod cli;

use cli::print;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "octoscope=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let commands = cli::CommandLine::parse_args();
    let config = Config::from_env().context("Failed to load configuration")?;

    let result = cli::run(commands, &config).await;
    if let Err(e) = &result {
        let rate_limited = e
            .downcast_ref::<octoscope::Error>()
            .is_some_and(octoscope::Error::is_rate_limited);
        if rate_limited {
            print::rate_limit_advice();
        }
    }
    result
}
