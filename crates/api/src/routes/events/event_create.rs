use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use ulid::Ulid;

use sportsync_database::{Database, Event};
use sportsync_result::Result;

/// # Event details
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataCreateEvent {
    /// Email of the organizer posting the event
    pub creator_email: String,

    /// Listing status, "available" makes the event publicly visible
    pub status: Option<String>,

    /// Booking deadline
    pub deadline: Option<String>,

    /// Cover image URL
    pub event_image: Option<String>,

    /// Display name
    pub event_name: Option<String>,

    /// Date the event takes place
    pub event_date: Option<String>,

    /// Kind of sport
    pub event_type: Option<String>,

    /// Venue
    pub location: Option<String>,

    /// Arbitrary organizer-supplied fields, stored as given
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// # Create an event
///
/// Post a new event. The server assigns the id and creation timestamp.
#[openapi(tag = "Events")]
#[post("/", data = "<data>")]
pub async fn create_event(
    db: &State<Database>,
    data: Json<DataCreateEvent>,
) -> Result<Json<Event>> {
    let data = data.into_inner();

    let event = Event {
        id: Ulid::new().to_string(),
        creator_email: data.creator_email,
        status: data.status.unwrap_or_default(),
        deadline: data.deadline,
        event_image: data.event_image,
        event_name: data.event_name,
        event_date: data.event_date,
        event_type: data.event_type,
        location: data.location,
        created_at: Utc::now().to_rfc3339(),
        extra: data.extra,
    };

    db.insert_event(&event).await?;
    Ok(Json(event))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Status};
    use serde_json::json;
    use sportsync_database::Event;

    #[rocket::async_test]
    async fn create_then_fetch() {
        let harness = TestHarness::new().await;

        let response = harness
            .post("/events")
            .header(ContentType::JSON)
            .body(
                json!({
                    "creatorEmail": "a@x.com",
                    "status": "available",
                    "deadline": "2025-06-01",
                    "eventName": "City Marathon",
                    "prize": "gold medal"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let created: Event = response.into_json().await.expect("`Event`");
        assert!(!created.id.is_empty());
        assert!(!created.created_at.is_empty());
        assert_eq!(created.creator_email, "a@x.com");
        assert_eq!(created.event_name.as_deref(), Some("City Marathon"));
        assert_eq!(created.extra["prize"], json!("gold medal"));

        let fetched: Event = harness
            .get(format!("/events/{}", created.id))
            .dispatch()
            .await
            .into_json()
            .await
            .expect("`Event`");
        assert_eq!(fetched, created);
    }

    #[rocket::async_test]
    async fn missing_body_is_unprocessable() {
        let harness = TestHarness::new().await;

        let response = harness
            .post("/events")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::UnprocessableEntity);
    }
}
