use rocket::Catcher;

use sportsync_result::{create_error, Result};

#[catch(401)]
fn unauthorized() -> Result<()> {
    Err(create_error!(NotAuthenticated))
}

#[catch(403)]
fn forbidden() -> Result<()> {
    Err(create_error!(NotOwner))
}

#[catch(404)]
fn not_found() -> Result<()> {
    Err(create_error!(NotFound))
}

#[catch(422)]
fn unprocessable_entity() -> Result<()> {
    Err(create_error!(UnprocessableEntity))
}

#[catch(500)]
fn internal_error() -> Result<()> {
    Err(create_error!(InternalError))
}

pub fn catchers() -> Vec<Catcher> {
    catchers![
        unauthorized,
        forbidden,
        not_found,
        unprocessable_entity,
        internal_error
    ]
}
