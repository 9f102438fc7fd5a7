/// # Liveness check
///
/// Plain-text confirmation that the server is up.
#[openapi(tag = "Core")]
#[get("/")]
pub fn root() -> &'static str {
    "sportsync server is running"
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn liveness() {
        let harness = TestHarness::new().await;

        let response = harness.get("/").dispatch().await;

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.into_string().await.as_deref(),
            Some("sportsync server is running")
        );
    }
}
