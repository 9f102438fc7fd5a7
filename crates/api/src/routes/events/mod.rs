use rocket::Route;
use revolt_rocket_okapi::revolt_okapi::openapi3::OpenApi;

mod event_create;
mod event_delete;
mod event_edit;
mod event_featured;
mod event_fetch;
mod event_list;
mod event_list_private;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        event_list_private::list_private_events,
        event_list::list_events,
        event_featured::featured_events,
        event_fetch::fetch_event,
        event_create::create_event,
        event_edit::edit_event,
        event_delete::delete_event,
    ]
}
