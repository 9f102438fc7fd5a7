use cached::proc_macro::cached;
use config::{Config, Environment, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Sportsync.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Sportsync.toml").exists() {
            builder = builder.add_source(File::new("Sportsync.toml", FileFormat::Toml));
        }

        builder = builder.add_source(Environment::with_prefix("SPORTSYNC").separator("__"));

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
    pub name: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApiIdentity {
    /// Base64-encoded service credential issued by the identity provider
    pub service_account: String,
    pub jwks_url: String,
    /// Shared secret for the development verifier
    pub static_secret: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Api {
    pub identity: ApiIdentity,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Sentry {
    pub api: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub api: Api,
    pub sentry: Sentry,
}

pub async fn init() {
    println!(
        ":: sportsync Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

#[cfg(test)]
mod tests {
    use crate::config;

    #[async_std::test]
    async fn it_loads_defaults() {
        let settings = config().await;
        assert!(settings.database.mongodb.is_empty());
        assert!(!settings.api.identity.static_secret.is_empty());
    }
}
