use rocket::serde::json::Json;
use rocket::State;

use sportsync_database::{Database, Event};
use sportsync_result::Result;

/// How many events the landing page carousel shows
const FEATURED_LIMIT: i64 = 6;

/// # List featured events
///
/// Fetch the available events with the soonest booking deadlines.
#[openapi(tag = "Events")]
#[get("/featured")]
pub async fn featured_events(db: &State<Database>) -> Result<Json<Vec<Event>>> {
    Ok(Json(db.fetch_featured_events(FEATURED_LIMIT).await?))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;
    use sportsync_database::{Event, STATUS_AVAILABLE};

    #[rocket::async_test]
    async fn sorted_by_deadline_and_capped() {
        let harness = TestHarness::new().await;

        for day in 1..=8 {
            harness
                .db
                .insert_event(&TestHarness::event(
                    "a@x.com",
                    STATUS_AVAILABLE,
                    &format!("2025-06-0{day}"),
                ))
                .await
                .unwrap();
        }

        let response = harness.get("/events/featured").dispatch().await;

        assert_eq!(response.status(), Status::Ok);

        let events: Vec<Event> = response.into_json().await.expect("`Vec<Event>`");
        assert_eq!(events.len(), 6);
        assert!(events
            .windows(2)
            .all(|pair| pair[0].deadline <= pair[1].deadline));
    }
}
