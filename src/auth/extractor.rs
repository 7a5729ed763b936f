use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::auth::jwt;
use crate::state::SharedState;

/// Stamped as deleter when a request carries no usable token.
pub const SYSTEM_USER_ID: i32 = 1;

/// The caller, if a valid `Authorization: Bearer` token was sent.
///
/// Never rejects: a missing, malformed or expired token simply yields
/// `user_id: None`. Nothing is authorized on the strength of this value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActingUser {
    pub user_id: Option<i32>,
}

impl ActingUser {
    pub fn id_or_system(&self) -> i32 {
        self.user_id.unwrap_or(SYSTEM_USER_ID)
    }
}

impl FromRequestParts<SharedState> for ActingUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let anonymous = ActingUser { user_id: None };

        let Some(token) = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
        else {
            return Ok(anonymous);
        };

        match jwt::decode_token(token, &state.config.jwt.secret) {
            Ok(claims) => Ok(ActingUser {
                user_id: Some(claims.sub),
            }),
            Err(e) => {
                tracing::debug!("Ignoring bearer token: {e}");
                Ok(anonymous)
            }
        }
    }
}
