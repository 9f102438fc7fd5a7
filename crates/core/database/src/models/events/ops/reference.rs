use sportsync_result::Result;

use super::AbstractEvents;
use crate::ReferenceDb;
use crate::{Event, PartialEvent};

#[async_trait]
impl AbstractEvents for ReferenceDb {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    async fn fetch_events<'a>(&self, ids: &'a [String]) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(ids
            .iter()
            .filter_map(|id| events.get(id).cloned())
            .collect())
    }

    async fn fetch_events_by_creator(&self, email: &str) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(events
            .values()
            .filter(|event| event.creator_email == email)
            .cloned()
            .collect())
    }

    async fn fetch_available_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(events
            .values()
            .filter(|event| event.is_available())
            .cloned()
            .collect())
    }

    async fn fetch_featured_events(&self, limit: i64) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut featured: Vec<Event> = events
            .values()
            .filter(|event| event.is_available())
            .cloned()
            .collect();

        // Missing deadlines sort first, matching MongoDB's ascending order
        featured.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        featured.truncate(limit as usize);
        Ok(featured)
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "events"))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    async fn update_event(&self, id: &str, partial: &PartialEvent) -> Result<()> {
        let mut events = self.events.lock().await;
        if let Some(event) = events.get_mut(id) {
            event.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }
}
