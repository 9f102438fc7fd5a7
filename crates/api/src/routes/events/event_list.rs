use rocket::serde::json::Json;
use rocket::State;

use sportsync_database::{Database, Event};
use sportsync_result::Result;

/// # List public events
///
/// Fetch every event currently open for booking. No credential required.
#[openapi(tag = "Events")]
#[get("/")]
pub async fn list_events(db: &State<Database>) -> Result<Json<Vec<Event>>> {
    Ok(Json(db.fetch_available_events().await?))
}
