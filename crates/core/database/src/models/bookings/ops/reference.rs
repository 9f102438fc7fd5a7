use sportsync_result::Result;

use super::AbstractBookings;
use crate::Booking;
use crate::ReferenceDb;

#[async_trait]
impl AbstractBookings for ReferenceDb {
    async fn fetch_booking(&self, id: &str) -> Result<Booking> {
        let bookings = self.bookings.lock().await;
        bookings
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownBooking))
    }

    async fn fetch_bookings_by_user(&self, email: &str) -> Result<Vec<Booking>> {
        let bookings = self.bookings.lock().await;
        Ok(bookings
            .values()
            .filter(|booking| booking.booked_by == email)
            .cloned()
            .collect())
    }

    async fn insert_booking(&self, booking: &Booking) -> Result<()> {
        // Check and insert happen under one lock, keeping the uniqueness
        // invariant atomic like the MongoDB index does.
        let mut bookings = self.bookings.lock().await;

        if bookings
            .values()
            .any(|b| b.booked_by == booking.booked_by && b.event_id == booking.event_id)
        {
            return Err(create_error!(AlreadyBooked));
        }

        if bookings.contains_key(&booking.id) {
            Err(create_database_error!("insert", "bookings"))
        } else {
            bookings.insert(booking.id.to_string(), booking.clone());
            Ok(())
        }
    }

    async fn delete_booking(&self, id: &str) -> Result<()> {
        let mut bookings = self.bookings.lock().await;
        if bookings.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownBooking))
        }
    }

    async fn delete_bookings_for_event(&self, event_id: &str) -> Result<u64> {
        let mut bookings = self.bookings.lock().await;
        let before = bookings.len();
        bookings.retain(|_, booking| booking.event_id != event_id);
        Ok((before - bookings.len()) as u64)
    }
}
