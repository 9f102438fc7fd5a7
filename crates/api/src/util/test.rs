use std::ops::Deref;

use chrono::Utc;
use rocket::local::asynchronous::Client;
use ulid::Ulid;

use sportsync_auth::{IdentityClaims, IdentityVerifier};
use sportsync_database::{Booking, Database, Event};

pub struct TestHarness {
    pub client: Client,
    pub db: Database,
}

impl TestHarness {
    pub async fn new() -> TestHarness {
        dotenv::dotenv().ok();

        let client = Client::tracked(crate::web().await)
            .await
            .expect("valid rocket instance");

        let db = client
            .rocket()
            .state::<Database>()
            .expect("`Database`")
            .clone();

        TestHarness { client, db }
    }

    pub fn rand_string() -> String {
        nanoid::nanoid!(32)
    }

    /// Issue a signed bearer credential for the given email
    pub fn bearer_token(&self, email: &str) -> String {
        let verifier = self
            .client
            .rocket()
            .state::<IdentityVerifier>()
            .expect("`IdentityVerifier`");

        match verifier {
            IdentityVerifier::Static(signer) => {
                let claims = IdentityClaims::new(TestHarness::rand_string(), email.to_string(), 3600);
                format!("Bearer {}", signer.sign(&claims).expect("signed token"))
            }
            IdentityVerifier::Jwks(_) => unreachable!("tests run against the static verifier"),
        }
    }

    pub fn event(creator: &str, status: &str, deadline: &str) -> Event {
        Event {
            id: Ulid::new().to_string(),
            creator_email: creator.to_string(),
            status: status.to_string(),
            deadline: Some(deadline.to_string()),
            event_image: Some("https://example.com/cover.png".to_string()),
            event_name: Some("Sunday League Final".to_string()),
            event_date: Some("2025-06-15".to_string()),
            event_type: Some("football".to_string()),
            location: Some("City Arena".to_string()),
            created_at: Utc::now().to_rfc3339(),
            extra: Default::default(),
        }
    }

    pub fn booking(booked_by: &str, event_id: &str) -> Booking {
        Booking {
            id: Ulid::new().to_string(),
            booked_by: booked_by.to_string(),
            event_id: event_id.to_string(),
            created_at: Utc::now().to_rfc3339(),
            extra: Default::default(),
        }
    }
}

impl Deref for TestHarness {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
