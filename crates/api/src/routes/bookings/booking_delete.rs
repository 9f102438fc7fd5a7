use rocket::State;

use sportsync_database::Database;
use sportsync_result::Result;

/// # Cancel a booking
///
/// Delete a booking by its id.
#[openapi(tag = "Bookings")]
#[delete("/<id>")]
pub async fn delete_booking(db: &State<Database>, id: String) -> Result<()> {
    db.delete_booking(&id).await
}
