use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use subdeck_bot::controllers::interactions::InteractionController;
use subdeck_bot::domain::subreddit::SubredditService;
use subdeck_bot::infrastructure::config::{Config, LogFormat};
use subdeck_bot::infrastructure::discord::start_discord_client;
use subdeck_bot::infrastructure::reddit::RedditClient;
use subdeck_bot::infrastructure::repositories::ChannelListRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        environment = ?config.environment,
        guild_scoped = config.guild_id.is_some(),
        "Starting Subdeck bot"
    );

    // Reddit client with the required identifying User-Agent and a fixed
    // request timeout
    let reddit_client = Arc::new(RedditClient::new(
        config.reddit_base_url.clone(),
        &config.reddit_user_agent,
        Duration::from_secs(config.reddit_timeout_seconds),
    )?);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the in-memory channel list repository
    let channel_lists = Arc::new(ChannelListRepository::new());

    // 2. Instantiate services (inject repository and Reddit client)
    let subreddit_service = Arc::new(SubredditService::new(channel_lists, reddit_client));

    // 3. Instantiate controllers (inject services)
    let interaction_controller = Arc::new(InteractionController::new(subreddit_service));

    let config = Arc::new(config);

    // Connect to Discord and serve slash commands until shutdown
    start_discord_client(config, interaction_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "subdeck_bot=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "subdeck_bot=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
