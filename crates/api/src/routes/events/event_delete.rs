use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Serialize;

use sportsync_auth::rocket::Identity;
use sportsync_database::Database;
use sportsync_result::{create_error, Result};

/// # Delete response
#[derive(Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteEventResponse {
    /// Number of dependent bookings that were removed
    pub deleted_bookings: u64,
}

/// # Delete an event
///
/// Delete an event and every booking made against it. Only the organizer
/// who created the event may delete it. Bookings go first so an
/// interrupted delete never leaves bookings pointing at a missing event.
#[openapi(tag = "Events")]
#[delete("/<id>")]
pub async fn delete_event(
    db: &State<Database>,
    identity: Identity,
    id: String,
) -> Result<Json<DeleteEventResponse>> {
    let event = db.fetch_event(&id).await?;
    if event.creator_email != identity.email() {
        return Err(create_error!(NotOwner));
    }

    let deleted_bookings = db.delete_bookings_for_event(&id).await?;
    db.delete_event(&id).await?;

    Ok(Json(DeleteEventResponse { deleted_bookings }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{Header, Status};
    use serde_json::json;
    use sportsync_database::STATUS_AVAILABLE;

    #[rocket::async_test]
    async fn requires_authentication() {
        let harness = TestHarness::new().await;

        let event = TestHarness::event("a@x.com", STATUS_AVAILABLE, "2025-06-01");
        harness.db.insert_event(&event).await.unwrap();

        let response = harness
            .delete(format!("/events/{}", event.id))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Unauthorized);
        assert!(harness.db.fetch_event(&event.id).await.is_ok());
    }

    #[rocket::async_test]
    async fn rejects_other_organizers() {
        let harness = TestHarness::new().await;

        let event = TestHarness::event("a@x.com", STATUS_AVAILABLE, "2025-06-01");
        harness.db.insert_event(&event).await.unwrap();

        let response = harness
            .delete(format!("/events/{}", event.id))
            .header(Header::new(
                "Authorization",
                harness.bearer_token("b@x.com"),
            ))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Forbidden);
        assert!(harness.db.fetch_event(&event.id).await.is_ok());
    }

    #[rocket::async_test]
    async fn cascades_to_bookings() {
        let harness = TestHarness::new().await;

        let event = TestHarness::event("a@x.com", STATUS_AVAILABLE, "2025-06-01");
        harness.db.insert_event(&event).await.unwrap();

        let first = TestHarness::booking("guest1@x.com", &event.id);
        let second = TestHarness::booking("guest2@x.com", &event.id);
        harness.db.insert_booking(&first).await.unwrap();
        harness.db.insert_booking(&second).await.unwrap();

        let response = harness
            .delete(format!("/events/{}", event.id))
            .header(Header::new(
                "Authorization",
                harness.bearer_token("a@x.com"),
            ))
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let value: serde_json::Value = response.into_json().await.expect("`Value`");
        assert_eq!(value["deletedBookings"], json!(2));

        assert!(harness.db.fetch_event(&event.id).await.is_err());
        assert!(harness.db.fetch_booking(&first.id).await.is_err());
        assert!(harness.db.fetch_booking(&second.id).await.is_err());
    }
}
