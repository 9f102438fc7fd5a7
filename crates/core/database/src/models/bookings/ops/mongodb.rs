use mongodb::bson::doc;
use sportsync_result::Result;

use super::AbstractBookings;
use crate::{is_duplicate_key_error, Booking, MongoDb};

static COL: &str = "bookings";

#[async_trait]
impl AbstractBookings for MongoDb {
    async fn fetch_booking(&self, id: &str) -> Result<Booking> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownBooking))
    }

    async fn fetch_bookings_by_user(&self, email: &str) -> Result<Vec<Booking>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "bookedBy": email
            }
        )
    }

    async fn insert_booking(&self, booking: &Booking) -> Result<()> {
        // Uniqueness of (bookedBy, eventId) is enforced by the index
        // created in `migrate_database`.
        self.col::<Booking>(COL)
            .insert_one(booking)
            .await
            .map(|_| ())
            .map_err(|error| {
                if is_duplicate_key_error(&error) {
                    create_error!(AlreadyBooked)
                } else {
                    create_database_error!("insert_one", COL)
                }
            })
    }

    async fn delete_booking(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;

        if result.deleted_count == 0 {
            Err(create_error!(UnknownBooking))
        } else {
            Ok(())
        }
    }

    async fn delete_bookings_for_event(&self, event_id: &str) -> Result<u64> {
        query!(
            self,
            delete_many,
            COL,
            doc! {
                "eventId": event_id
            }
        )
        .map(|result| result.deleted_count)
    }
}
