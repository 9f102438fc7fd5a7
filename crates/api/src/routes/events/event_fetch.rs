use rocket::serde::json::Json;
use rocket::State;

use sportsync_database::{Database, Event};
use sportsync_result::Result;

/// # Fetch an event
///
/// Fetch a single event by its id.
#[openapi(tag = "Events")]
#[get("/<id>")]
pub async fn fetch_event(db: &State<Database>, id: String) -> Result<Json<Event>> {
    Ok(Json(db.fetch_event(&id).await?))
}
