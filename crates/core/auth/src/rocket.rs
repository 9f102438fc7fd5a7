use rocket::http::Status;
use rocket::request::{self, FromRequest, Outcome, Request};

use sportsync_result::Error;

use crate::{parse_bearer_header, IdentityClaims, IdentityVerifier};

/// Verified caller identity, available on any route once the bearer
/// credential has been checked against the identity provider
#[derive(Debug, Clone)]
pub struct Identity(pub IdentityClaims);

impl Identity {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Identity {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let claims: &Option<IdentityClaims> = request
            .local_cache_async(async {
                let verifier = request
                    .rocket()
                    .state::<IdentityVerifier>()
                    .expect("`IdentityVerifier`");

                if let Some(header) = request.headers().get("Authorization").next() {
                    if let Ok(token) = parse_bearer_header(header) {
                        if let Ok(claims) = verifier.verify(token).await {
                            return Some(claims);
                        }
                    }
                }

                None
            })
            .await;

        if let Some(claims) = claims {
            Outcome::Success(Identity(claims.clone()))
        } else {
            Outcome::Error((Status::Unauthorized, create_error!(NotAuthenticated)))
        }
    }
}

/// Query email proven to belong to the verified caller
///
/// Runs the `Identity` guard first, then compares the verified email with
/// the caller-supplied `email` query parameter. The caller proved who they
/// are but asked for someone else's data when these differ.
#[derive(Debug, Clone)]
pub struct OwnedEmail(pub String);

#[rocket::async_trait]
impl<'r> FromRequest<'r> for OwnedEmail {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let identity = match request.guard::<Identity>().await {
            Outcome::Success(identity) => identity,
            _ => return Outcome::Error((Status::Unauthorized, create_error!(NotAuthenticated))),
        };

        match request.query_value::<String>("email") {
            Some(Ok(email)) if email == identity.email() => Outcome::Success(OwnedEmail(email)),
            _ => Outcome::Error((Status::Forbidden, create_error!(NotOwner))),
        }
    }
}

#[cfg(feature = "okapi")]
mod okapi {
    use revolt_rocket_okapi::gen::OpenApiGenerator;
    use revolt_rocket_okapi::request::{OpenApiFromRequest, RequestHeaderInput};

    use super::{Identity, OwnedEmail};

    impl<'r> OpenApiFromRequest<'r> for Identity {
        fn from_request_input(
            _gen: &mut OpenApiGenerator,
            _name: String,
            _required: bool,
        ) -> revolt_rocket_okapi::Result<RequestHeaderInput> {
            Ok(RequestHeaderInput::None)
        }
    }

    impl<'r> OpenApiFromRequest<'r> for OwnedEmail {
        fn from_request_input(
            _gen: &mut OpenApiGenerator,
            _name: String,
            _required: bool,
        ) -> revolt_rocket_okapi::Result<RequestHeaderInput> {
            Ok(RequestHeaderInput::None)
        }
    }
}
