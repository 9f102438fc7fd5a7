use std::collections::HashMap;

use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Serialize;

use sportsync_auth::rocket::OwnedEmail;
use sportsync_database::{Booking, Database, Event};
use sportsync_result::Result;

/// # Booking with event details
#[derive(Serialize, JsonSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    #[serde(flatten)]
    pub booking: Booking,

    /// Cover image of the booked event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_image: Option<String>,

    /// Display name of the booked event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,

    /// Date the booked event takes place
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,

    /// Kind of sport
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,

    /// Venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// # List my bookings
///
/// Fetch every booking made by the verified caller, each enriched with
/// display fields from the event it refers to. Bookings whose event no
/// longer exists are returned without the event fields.
#[openapi(tag = "Bookings")]
#[get("/")]
pub async fn list_bookings(
    db: &State<Database>,
    owner: OwnedEmail,
) -> Result<Json<Vec<BookingView>>> {
    let bookings = db.fetch_bookings_by_user(&owner.0).await?;

    let ids = bookings
        .iter()
        .map(|booking| booking.event_id.clone())
        .collect::<Vec<String>>();

    let events: HashMap<String, Event> = db
        .fetch_events(&ids)
        .await?
        .into_iter()
        .map(|event| (event.id.clone(), event))
        .collect();

    Ok(Json(
        bookings
            .into_iter()
            .map(|booking| {
                let event = events.get(&booking.event_id);

                BookingView {
                    event_image: event.and_then(|event| event.event_image.clone()),
                    event_name: event.and_then(|event| event.event_name.clone()),
                    event_date: event.and_then(|event| event.event_date.clone()),
                    event_type: event.and_then(|event| event.event_type.clone()),
                    location: event.and_then(|event| event.location.clone()),
                    booking,
                }
            })
            .collect(),
    ))
}
