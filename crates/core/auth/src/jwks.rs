use std::collections::HashMap;
use std::time::{Duration, Instant};

use futures_locks::RwLock;
use sportsync_result::Result;

/// How long a fetched key set stays valid, picking up provider key rotation
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Public key published by the identity provider
#[derive(Deserialize, Debug, Clone)]
pub struct Jwk {
    /// Key type
    pub kty: String,

    /// Key id, matched against the token header
    pub kid: String,

    /// Algorithm
    #[serde(default)]
    pub alg: Option<String>,

    /// RSA modulus, base64url encoded
    #[serde(default)]
    pub n: Option<String>,

    /// RSA exponent, base64url encoded
    #[serde(default)]
    pub e: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
struct JwksResponse {
    keys: Vec<Jwk>,
}

struct CachedKeys {
    keys: HashMap<String, Jwk>,
    expires_at: Instant,
}

/// Fetches and caches the identity provider's published key set
pub struct JwksClient {
    jwks_url: String,
    http_client: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
    cache_ttl: Duration,
}

impl JwksClient {
    pub fn new(jwks_url: String) -> JwksClient {
        JwksClient::with_ttl(jwks_url, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(jwks_url: String, cache_ttl: Duration) -> JwksClient {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        JwksClient {
            jwks_url,
            http_client,
            cache: RwLock::new(None),
            cache_ttl,
        }
    }

    /// Get a key by its id, refreshing the cached set if necessary
    pub async fn get_key(&self, kid: &str) -> Result<Jwk> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.expires_at > Instant::now() {
                    if let Some(key) = cached.keys.get(kid) {
                        return Ok(key.clone());
                    }
                }
            }
        }

        self.refresh().await?;

        let cache = self.cache.read().await;
        cache
            .as_ref()
            .and_then(|cached| cached.keys.get(kid).cloned())
            .ok_or_else(|| create_error!(NotAuthenticated))
    }

    async fn refresh(&self) -> Result<()> {
        debug!("Refreshing the identity provider key set.");

        let response: JwksResponse = self
            .http_client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|_| create_error!(InternalError))?
            .json()
            .await
            .map_err(|_| create_error!(InternalError))?;

        let keys = response
            .keys
            .into_iter()
            .map(|key| (key.kid.clone(), key))
            .collect();

        *self.cache.write().await = Some(CachedKeys {
            keys,
            expires_at: Instant::now() + self.cache_ttl,
        });

        Ok(())
    }
}
