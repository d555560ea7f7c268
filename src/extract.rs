use actix_web::{dev::Payload, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use log::warn;
use serde::Deserialize;

use crate::error::AppError;

/// `user_id` taken from the query string, validated before the handler runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UserId(pub i32);

#[derive(Deserialize)]
struct UserIdQuery {
    user_id: Option<String>,
}

impl FromRequest for UserId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = parse_user_id(req.query_string()).map_err(|err| {
            warn!("rejected {} {}: {}", req.method(), req.path(), err);
            err.into()
        });
        ready(result)
    }
}

fn parse_user_id(query: &str) -> Result<UserId, AppError> {
    let raw = web::Query::<UserIdQuery>::from_query(query)
        .map_err(|_| AppError::bad_request("invalid query string"))?
        .into_inner()
        .user_id
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::bad_request("user_id query parameter is required"))?;

    raw.parse::<i32>()
        .map(UserId)
        .map_err(|_| AppError::bad_request("user_id must be an integer"))
}
