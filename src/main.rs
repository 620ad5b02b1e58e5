use std::sync::Arc;

use anyhow::Context;
use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use warden::bot::{self, TelegramLookup};
use warden::clock::{Clock, SystemClock};
use warden::config::Config;
use warden::database::{ChatSettings, Database, MemoryBackend, MongoSettingsBackend, SettingsBackend, SettingsStore};
use warden::events::FloodDetector;
use warden::moderation::Moderator;
use warden::permissions::AdminCache;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warden=info,teloxide=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Warden bot...");

    let config = Config::from_env().context("Invalid configuration")?;
    info!("Bot mode: {:?}, locale: {}", config.bot_mode, config.locale);

    let backend: Arc<dyn SettingsBackend> = match config.mongodb_uri.as_deref() {
        Some(uri) => {
            info!("Connecting to MongoDB...");
            let db = Database::connect(uri, &config.mongodb_database).await?;
            info!("Database connected");
            Arc::new(MongoSettingsBackend::new(&db))
        }
        None => {
            info!("MONGODB_URI not set, keeping settings in memory");
            Arc::new(MemoryBackend::new())
        }
    };
    let store = SettingsStore::new(backend).with_defaults(ChatSettings::for_locale(&config.locale));

    // Throttle respects Telegram's global and per-chat rate limits
    let bot = Bot::new(&config.bot_token).throttle(Limits::default());

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    if config.owner_ids.is_empty() {
        info!("No owner IDs configured (OWNER_IDS is empty)");
    } else {
        info!("Bot owners: {:?}", config.owner_ids);
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let lookup = Arc::new(TelegramLookup::new(bot.inner().clone()));
    let admins = AdminCache::new(lookup, clock.clone(), config.owner_ids.clone());
    let moderator = Moderator::new(store, admins, FloodDetector::new(), clock, &config.locale);

    let dispatcher = bot::build_dispatcher(bot.clone(), moderator);
    bot::run(&config, dispatcher, bot).await
}
