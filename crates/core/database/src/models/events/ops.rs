use crate::models::events::{Event, PartialEvent};
use sportsync_result::Result;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch events by id, skipping ids that no longer resolve
    async fn fetch_events<'a>(&self, ids: &'a [String]) -> Result<Vec<Event>>;

    /// Fetch all events created by the given organizer
    async fn fetch_events_by_creator(&self, email: &str) -> Result<Vec<Event>>;

    /// Fetch all publicly listed events
    async fn fetch_available_events(&self) -> Result<Vec<Event>>;

    /// Fetch publicly listed events by ascending deadline
    async fn fetch_featured_events(&self, limit: i64) -> Result<Vec<Event>>;

    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Merge the partial event into the matching event
    async fn update_event(&self, id: &str, partial: &PartialEvent) -> Result<()>;

    /// Delete an event from the database
    async fn delete_event(&self, id: &str) -> Result<()>;
}
