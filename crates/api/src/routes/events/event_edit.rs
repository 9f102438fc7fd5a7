use rocket::serde::json::Json;
use rocket::State;
use schemars::JsonSchema;
use serde::Deserialize;

use sportsync_auth::rocket::Identity;
use sportsync_database::{Database, Event, PartialEvent};
use sportsync_result::{create_error, Result};

/// # Changed fields
#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataEditEvent {
    /// Listing status
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

    /// Arbitrary organizer-supplied fields, merged over existing ones
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl From<DataEditEvent> for PartialEvent {
    fn from(data: DataEditEvent) -> PartialEvent {
        PartialEvent {
            creator_email: None,
            status: data.status,
            deadline: data.deadline,
            event_image: data.event_image,
            event_name: data.event_name,
            event_date: data.event_date,
            event_type: data.event_type,
            location: data.location,
            extra: data.extra,
        }
    }
}

/// # Edit an event
///
/// Merge the given fields into the event. Only the organizer who created
/// the event may edit it.
#[openapi(tag = "Events")]
#[put("/<id>", data = "<data>")]
pub async fn edit_event(
    db: &State<Database>,
    identity: Identity,
    id: String,
    data: Json<DataEditEvent>,
) -> Result<Json<Event>> {
    let event = db.fetch_event(&id).await?;
    if event.creator_email != identity.email() {
        return Err(create_error!(NotOwner));
    }

    db.update_event(&id, &data.into_inner().into()).await?;
    Ok(Json(db.fetch_event(&id).await?))
}
