/// Event status treated as publicly listed
pub static STATUS_AVAILABLE: &str = "available";

auto_derived!(
    /// Event posted by an organizer
    ///
    /// Only the fields the backend itself queries or denormalizes are
    /// typed; everything else the organizer submits is carried in `extra`.
    #[serde(rename_all = "camelCase")]
    pub struct Event {
        /// Event Id
        #[serde(rename = "_id")]
        pub id: String,

        /// Email of the organizer who created this event
        pub creator_email: String,

        /// Listing status, only "available" is meaningful to queries
        pub status: String,

        /// Booking deadline, used for the featured sort
        #[serde(skip_serializing_if = "Option::is_none")]
        pub deadline: Option<String>,

        /// Cover image URL
        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_image: Option<String>,

        /// Display name
        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_name: Option<String>,

        /// Date the event takes place
        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_date: Option<String>,

        /// Kind of sport
        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_type: Option<String>,

        /// Venue
        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        /// Creation timestamp
        pub created_at: String,

        /// Arbitrary organizer-supplied fields
        #[serde(flatten)]
        pub extra: serde_json::Map<String, serde_json::Value>,
    }

    /// Partial event for merge updates
    #[serde(rename_all = "camelCase")]
    #[derive(Default)]
    pub struct PartialEvent {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub creator_email: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub deadline: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_image: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_name: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_date: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub event_type: Option<String>,

        #[serde(skip_serializing_if = "Option::is_none")]
        pub location: Option<String>,

        /// Arbitrary organizer-supplied fields
        #[serde(flatten)]
        pub extra: serde_json::Map<String, serde_json::Value>,
    }
);

impl Event {
    /// Whether this event is publicly listed
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }

    /// Merge a partial event into this event
    pub fn apply_options(&mut self, partial: PartialEvent) {
        if let Some(creator_email) = partial.creator_email {
            self.creator_email = creator_email;
        }

        if let Some(status) = partial.status {
            self.status = status;
        }

        if let Some(deadline) = partial.deadline {
            self.deadline = Some(deadline);
        }

        if let Some(event_image) = partial.event_image {
            self.event_image = Some(event_image);
        }

        if let Some(event_name) = partial.event_name {
            self.event_name = Some(event_name);
        }

        if let Some(event_date) = partial.event_date {
            self.event_date = Some(event_date);
        }

        if let Some(event_type) = partial.event_type {
            self.event_type = Some(event_type);
        }

        if let Some(location) = partial.location {
            self.location = Some(location);
        }

        self.extra.extend(partial.extra);
    }
}

#[cfg(test)]
mod tests {
    use crate::{Event, PartialEvent, STATUS_AVAILABLE};

    fn event(id: &str, creator: &str, status: &str, deadline: &str) -> Event {
        Event {
            id: id.to_string(),
            creator_email: creator.to_string(),
            status: status.to_string(),
            deadline: Some(deadline.to_string()),
            event_image: None,
            event_name: Some(format!("Event {id}")),
            event_date: None,
            event_type: Some("football".to_string()),
            location: Some("City Arena".to_string()),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            extra: Default::default(),
        }
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let mut posted = event("event_1", "a@x.com", STATUS_AVAILABLE, "2025-06-01");
            posted
                .extra
                .insert("prize".to_string(), serde_json::json!("gold medal"));

            db.insert_event(&posted).await.unwrap();
            assert_eq!(db.fetch_event("event_1").await.unwrap(), posted);

            let partial = PartialEvent {
                event_name: Some("Renamed".to_string()),
                ..Default::default()
            };
            db.update_event("event_1", &partial).await.unwrap();
            posted.apply_options(partial);

            let fetched = db.fetch_event("event_1").await.unwrap();
            assert_eq!(fetched, posted);
            assert_eq!(fetched.event_name.as_deref(), Some("Renamed"));
            assert_eq!(fetched.extra["prize"], serde_json::json!("gold medal"));

            db.delete_event("event_1").await.unwrap();
            assert!(db.fetch_event("event_1").await.is_err());
        });
    }

    #[async_std::test]
    async fn update_unknown_event_fails() {
        database_test!(|db| async move {
            let partial = PartialEvent {
                status: Some("closed".to_string()),
                ..Default::default()
            };

            assert!(db.update_event("missing", &partial).await.is_err());
        });
    }

    #[async_std::test]
    async fn filters_by_creator_and_status() {
        database_test!(|db| async move {
            db.insert_event(&event("event_1", "a@x.com", STATUS_AVAILABLE, "2025-06-01"))
                .await
                .unwrap();
            db.insert_event(&event("event_2", "a@x.com", "draft", "2025-06-02"))
                .await
                .unwrap();
            db.insert_event(&event("event_3", "b@x.com", STATUS_AVAILABLE, "2025-06-03"))
                .await
                .unwrap();

            let mine = db.fetch_events_by_creator("a@x.com").await.unwrap();
            assert_eq!(mine.len(), 2);
            assert!(mine.iter().all(|event| event.creator_email == "a@x.com"));

            let public = db.fetch_available_events().await.unwrap();
            assert_eq!(public.len(), 2);
            assert!(public.iter().all(Event::is_available));
        });
    }

    #[async_std::test]
    async fn featured_is_sorted_and_limited() {
        database_test!(|db| async move {
            for day in 1..=8 {
                db.insert_event(&event(
                    &format!("event_{day}"),
                    "a@x.com",
                    STATUS_AVAILABLE,
                    &format!("2025-06-0{day}"),
                ))
                .await
                .unwrap();
            }

            db.insert_event(&event("draft", "a@x.com", "draft", "2025-01-01"))
                .await
                .unwrap();

            let featured = db.fetch_featured_events(6).await.unwrap();
            assert_eq!(featured.len(), 6);
            assert!(featured.iter().all(Event::is_available));
            assert!(featured
                .windows(2)
                .all(|pair| pair[0].deadline <= pair[1].deadline));
        });
    }
}
