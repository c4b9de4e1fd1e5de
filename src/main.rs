use taskdesk::commands::Cli;
use taskdesk::libs::messages::macros::is_debug_mode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    Cli::menu().await
}

fn init_tracing() {
    let default = if is_debug_mode() {
        "taskdesk=info,tower_http=info"
    } else {
        "taskdesk=error"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
