use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::{Error, ErrorType};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self.error_type {
            ErrorType::LabelMe => Status::InternalServerError,

            ErrorType::UnknownEvent => Status::NotFound,

            ErrorType::UnknownBooking => Status::NotFound,
            ErrorType::AlreadyBooked => Status::BadRequest,

            ErrorType::NotAuthenticated => Status::Unauthorized,
            ErrorType::NotOwner => Status::Forbidden,

            ErrorType::DatabaseError { .. } => Status::InternalServerError,
            ErrorType::InternalError => Status::InternalServerError,
            ErrorType::InvalidOperation => Status::BadRequest,
            ErrorType::NotFound => Status::NotFound,
            ErrorType::UnprocessableEntity => Status::UnprocessableEntity,
        };

        // Serialize the error data structure into JSON, flagging the
        // response as unsuccessful for API consumers.
        let mut body = serde_json::to_value(&self).unwrap();
        body.as_object_mut()
            .unwrap()
            .insert("success".to_string(), false.into());
        let string = body.to_string();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
