use actix_web::{error::PathError, HttpRequest, HttpResponse};
use log::warn;
use serde::Serialize;

use crate::error::AppError;

#[derive(Serialize)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn message(msg: impl Into<String>) -> HttpResponse {
    HttpResponse::Ok().json(MessageDto::new(msg))
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    warn!("rejected path {}: {}", req.path(), err);
    AppError::bad_request("id must be an integer").into()
}

pub fn response_from_error(err: &AppError) -> HttpResponse {
    use actix_web::ResponseError;

    HttpResponse::build(err.status_code()).json(MessageDto::new(err.msg()))
}
