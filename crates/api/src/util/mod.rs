pub mod catchers;

#[cfg(test)]
pub mod test;

/// Configure logging and error reporting
pub async fn setup_logging() -> Option<sentry::ClientInitGuard> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if std::env::var("ROCKET_ADDRESS").is_err() {
        std::env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    pretty_env_logger::init();

    let config = sportsync_config::config().await;
    if config.sentry.api.is_empty() {
        None
    } else {
        Some(sentry::init((
            config.sentry.api,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        )))
    }
}
