use crate::models::bookings::Booking;
use sportsync_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractBookings: Sync + Send {
    /// Fetch a booking by its id
    async fn fetch_booking(&self, id: &str) -> Result<Booking>;

    /// Fetch all bookings made by the given user
    async fn fetch_bookings_by_user(&self, email: &str) -> Result<Vec<Booking>>;

    /// Insert a new booking, rejecting duplicate (bookedBy, eventId) pairs
    async fn insert_booking(&self, booking: &Booking) -> Result<()>;

    /// Delete a booking from the database
    async fn delete_booking(&self, id: &str) -> Result<()>;

    /// Delete all bookings referencing the given event, returning the count
    async fn delete_bookings_for_event(&self, event_id: &str) -> Result<u64>;
}
