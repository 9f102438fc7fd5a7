use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;
use ulid::Ulid;

use sportsync_database::{Booking, Database};
use sportsync_result::Result;

/// # Booking details
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataCreateBooking {
    /// Email of the user booking the event
    pub booked_by: String,

    /// Id of the event being booked
    pub event_id: String,

    /// Arbitrary client-supplied fields, stored as given
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// # Book an event
///
/// Create a booking. The store enforces at most one booking per user and
/// event, so concurrent duplicate requests cannot both succeed.
#[openapi(tag = "Bookings")]
#[post("/", data = "<data>")]
pub async fn create_booking(
    db: &State<Database>,
    data: Json<DataCreateBooking>,
) -> Result<Json<Booking>> {
    let data = data.into_inner();

    let booking = Booking {
        id: Ulid::new().to_string(),
        booked_by: data.booked_by,
        event_id: data.event_id,
        created_at: Utc::now().to_rfc3339(),
        extra: data.extra,
    };

    db.insert_booking(&booking).await?;
    Ok(Json(booking))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::{ContentType, Status};
    use serde_json::json;
    use sportsync_database::{Booking, STATUS_AVAILABLE};

    #[rocket::async_test]
    async fn books_an_event() {
        let harness = TestHarness::new().await;

        let event = TestHarness::event("a@x.com", STATUS_AVAILABLE, "2025-06-01");
        harness.db.insert_event(&event).await.unwrap();

        let response = harness
            .post("/event-bookings")
            .header(ContentType::JSON)
            .body(
                json!({
                    "bookedBy": "guest@x.com",
                    "eventId": event.id,
                    "seats": 2
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);

        let booking: Booking = response.into_json().await.expect("`Booking`");
        assert_eq!(booking.booked_by, "guest@x.com");
        assert_eq!(booking.event_id, event.id);
        assert_eq!(booking.extra["seats"], json!(2));

        assert!(harness.db.fetch_booking(&booking.id).await.is_ok());
    }

    #[rocket::async_test]
    async fn rejects_duplicate_booking() {
        let harness = TestHarness::new().await;

        let body = json!({
            "bookedBy": "guest@x.com",
            "eventId": "event_1"
        })
        .to_string();

        let response = harness
            .post("/event-bookings")
            .header(ContentType::JSON)
            .body(body.clone())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let response = harness
            .post("/event-bookings")
            .header(ContentType::JSON)
            .body(body)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let value: serde_json::Value = response.into_json().await.expect("`Value`");
        assert_eq!(value["success"], json!(false));
        assert_eq!(value["type"], json!("AlreadyBooked"));
    }
}
