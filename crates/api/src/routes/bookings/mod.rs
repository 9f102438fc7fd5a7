use rocket::Route;
use revolt_rocket_okapi::revolt_okapi::openapi3::OpenApi;

mod booking_create;
mod booking_delete;
mod booking_list;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        booking_list::list_bookings,
        booking_create::create_booking,
        booking_delete::delete_booking,
    ]
}
