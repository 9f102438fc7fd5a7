#[macro_use]
extern crate rocket;

#[macro_use]
extern crate revolt_rocket_okapi;

#[macro_use]
extern crate log;

pub mod routes;
pub mod util;

use std::str::FromStr;

use rocket::{Build, Rocket};
use rocket_cors::AllowedOrigins;
use revolt_rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};

use sportsync_auth::IdentityVerifier;
use sportsync_database::DatabaseInfo;

/// Build the web server
pub async fn web() -> Rocket<Build> {
    let config = sportsync_config::config().await;

    // Connect to the database and apply migrations
    let db = DatabaseInfo::Auto
        .connect()
        .await
        .expect("Failed to connect to the database.");

    db.migrate_database()
        .await
        .expect("Failed to run database migrations.");

    // Identity provider credentials come from configuration
    let verifier =
        IdentityVerifier::from_config(&config).expect("Failed to create the identity verifier.");

    // Allow browser clients from any origin
    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: ["Get", "Post", "Put", "Delete", "Options", "Head"]
            .iter()
            .map(|s| FromStr::from_str(s).unwrap())
            .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    routes::mount(rocket::build())
        .mount(
            "/swagger/",
            make_swagger_ui(&SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .register("/", util::catchers::catchers())
        .manage(db)
        .manage(verifier)
        .attach(cors)
}

#[launch]
async fn rocket() -> _ {
    let _sentry = util::setup_logging().await;

    info!("Starting sportsync API server.");

    web().await
}
