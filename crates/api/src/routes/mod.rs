use rocket::{Build, Rocket};
use revolt_rocket_okapi::revolt_okapi::openapi3::OpenApi;
use revolt_rocket_okapi::settings::OpenApiSettings;

mod bookings;
mod events;
mod root;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/events" => events::routes(),
        "/event-bookings" => bookings::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use revolt_rocket_okapi::revolt_okapi::openapi3::*;

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "sportsync API".to_owned(),
            description: Some("Browse, post and book sporting events.".to_owned()),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            ..Default::default()
        },
        ..Default::default()
    }
}
