use futures::StreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use sportsync_result::Result;

use super::AbstractEvents;
use crate::{Event, MongoDb, PartialEvent, STATUS_AVAILABLE};

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    async fn fetch_events<'a>(&self, ids: &'a [String]) -> Result<Vec<Event>> {
        Ok(self
            .col::<Event>(COL)
            .find(doc! {
                "_id": {
                    "$in": ids
                }
            })
            .await
            .map_err(|_| create_database_error!("find", COL))?
            .filter_map(|s| async {
                if cfg!(debug_assertions) {
                    Some(s.unwrap())
                } else {
                    s.ok()
                }
            })
            .collect()
            .await)
    }

    async fn fetch_events_by_creator(&self, email: &str) -> Result<Vec<Event>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "creatorEmail": email
            }
        )
    }

    async fn fetch_available_events(&self) -> Result<Vec<Event>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "status": STATUS_AVAILABLE
            }
        )
    }

    async fn fetch_featured_events(&self, limit: i64) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "status": STATUS_AVAILABLE
            },
            FindOptions::builder()
                .sort(doc! {
                    "deadline": 1_i32
                })
                .limit(limit)
                .build()
        )
    }

    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    async fn update_event(&self, id: &str, partial: &PartialEvent) -> Result<()> {
        let result = query!(self, update_one_by_id, COL, id, partial)?;

        if result.matched_count == 0 {
            Err(create_error!(UnknownEvent))
        } else {
            Ok(())
        }
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;

        if result.deleted_count == 0 {
            Err(create_error!(UnknownEvent))
        } else {
            Ok(())
        }
    }
}
