#[macro_use]
extern crate serde;

#[macro_use]
extern crate log;

#[macro_use]
extern crate sportsync_result;

#[cfg(feature = "rocket")]
pub mod rocket;

mod jwks;
pub use jwks::{Jwk, JwksClient};

use std::time::{SystemTime, UNIX_EPOCH};

use base64::{engine::general_purpose::STANDARD, Engine};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sportsync_config::Settings;
use sportsync_result::Result;

/// Verified identity claims extracted from a bearer token
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IdentityClaims {
    /// Subject identifier assigned by the identity provider
    pub sub: String,

    /// Verified email address of the caller
    pub email: String,

    /// Issued-at timestamp in seconds
    pub iat: i64,

    /// Expiry timestamp in seconds
    pub exp: i64,
}

impl IdentityClaims {
    /// Create claims valid for the given number of seconds
    pub fn new(sub: String, email: String, valid_for: i64) -> IdentityClaims {
        let now = unix_timestamp();

        IdentityClaims {
            sub,
            email,
            iat: now,
            exp: now + valid_for,
        }
    }
}

/// Current time in seconds since the Unix epoch
fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or_default()
}

/// Extract the token from an `Authorization` header value
///
/// The credential must carry the `Bearer ` prefix.
pub fn parse_bearer_header(value: &str) -> Result<&str> {
    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(create_error!(NotAuthenticated)),
    }
}

/// Service credential issued by the identity provider
#[derive(Deserialize, Debug, Clone)]
pub struct ServiceAccount {
    pub project_id: String,
}

/// Identity verifier
pub enum IdentityVerifier {
    /// Verify provider-issued tokens against the provider's published keys
    Jwks(JwksVerifier),
    /// Verify locally-signed tokens with a shared secret
    Static(StaticVerifier),
}

impl IdentityVerifier {
    /// Create a verifier from the application configuration
    ///
    /// Falls back to the static verifier when no service credential is
    /// configured.
    pub fn from_config(settings: &Settings) -> Result<IdentityVerifier> {
        let identity = &settings.api.identity;

        if identity.service_account.is_empty() {
            info!("No service credential configured, accepting locally-signed tokens.");

            return Ok(IdentityVerifier::Static(StaticVerifier::new(
                identity.static_secret.clone(),
            )));
        }

        let decoded = STANDARD
            .decode(&identity.service_account)
            .map_err(|_| create_error!(InvalidOperation))?;

        let account: ServiceAccount =
            serde_json::from_slice(&decoded).map_err(|_| create_error!(InvalidOperation))?;

        Ok(IdentityVerifier::Jwks(JwksVerifier::new(
            identity.jwks_url.clone(),
            account,
        )))
    }

    /// Verify a bearer token and return the verified claims
    ///
    /// Never trusts any caller-supplied identity string.
    pub async fn verify(&self, token: &str) -> Result<IdentityClaims> {
        match self {
            IdentityVerifier::Jwks(verifier) => verifier.verify(token).await,
            IdentityVerifier::Static(verifier) => verifier.verify(token),
        }
    }
}

/// Verifies RS256 tokens against the identity provider's key set
pub struct JwksVerifier {
    keys: JwksClient,
    issuer: String,
    audience: String,
}

impl JwksVerifier {
    pub fn new(jwks_url: String, account: ServiceAccount) -> JwksVerifier {
        JwksVerifier {
            keys: JwksClient::new(jwks_url),
            issuer: format!("https://securetoken.google.com/{}", account.project_id),
            audience: account.project_id,
        }
    }

    pub async fn verify(&self, token: &str) -> Result<IdentityClaims> {
        let header =
            jsonwebtoken::decode_header(token).map_err(|_| create_error!(NotAuthenticated))?;

        let kid = header.kid.ok_or_else(|| create_error!(NotAuthenticated))?;
        let jwk = self.keys.get_key(&kid).await?;

        let (n, e) = match (&jwk.n, &jwk.e) {
            (Some(n), Some(e)) => (n, e),
            _ => return Err(create_error!(NotAuthenticated)),
        };

        let decoding_key =
            DecodingKey::from_rsa_components(n, e).map_err(|_| create_error!(NotAuthenticated))?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);

        decode::<IdentityClaims>(token, &decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|error| {
                debug!("Token verification failed: {error}");
                create_error!(NotAuthenticated)
            })
    }
}

/// Verifies HS256 tokens signed with a shared secret
///
/// Stands in for the identity provider during development and tests, the
/// same way the reference database stands in for MongoDB.
pub struct StaticVerifier {
    secret: String,
}

impl StaticVerifier {
    pub fn new(secret: String) -> StaticVerifier {
        StaticVerifier { secret }
    }

    /// Issue a signed development token for the given claims
    pub fn sign(&self, claims: &IdentityClaims) -> Result<String> {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|_| create_error!(InternalError))
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<IdentityClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|error| {
            debug!("Token verification failed: {error}");
            create_error!(NotAuthenticated)
        })
    }
}
