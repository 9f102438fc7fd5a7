use rocket::serde::json::Json;
use rocket::State;

use sportsync_auth::rocket::OwnedEmail;
use sportsync_database::{Database, Event};
use sportsync_result::Result;

/// # List my events
///
/// Fetch every event created by the verified caller, regardless of status.
#[openapi(tag = "Events")]
#[get("/private")]
pub async fn list_private_events(
    db: &State<Database>,
    owner: OwnedEmail,
) -> Result<Json<Vec<Event>>> {
    Ok(Json(db.fetch_events_by_creator(&owner.0).await?))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{Header, Status};
    use sportsync_database::{Event, STATUS_AVAILABLE};

    #[rocket::async_test]
    async fn requires_authentication() {
        let harness = TestHarness::new().await;

        let response = harness
            .get("/events/private?email=a@x.com")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Unauthorized);
    }

    #[rocket::async_test]
    async fn rejects_foreign_email() {
        let harness = TestHarness::new().await;

        let response = harness
            .get("/events/private?email=b@x.com")
            .header(Header::new(
                "Authorization",
                harness.bearer_token("a@x.com"),
            ))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);
    }

    #[rocket::async_test]
    async fn lists_own_events_only() {
        let harness = TestHarness::new().await;

        harness
            .db
            .insert_event(&TestHarness::event("a@x.com", "draft", "2025-06-01"))
            .await
            .unwrap();
        harness
            .db
            .insert_event(&TestHarness::event("b@x.com", STATUS_AVAILABLE, "2025-06-02"))
            .await
            .unwrap();

        let response = harness
            .get("/events/private?email=a@x.com")
            .header(Header::new(
                "Authorization",
                harness.bearer_token("a@x.com"),
            ))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let events: Vec<Event> = response.into_json().await.expect("`Vec<Event>`");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].creator_email, "a@x.com");
    }
}
