use sea_orm::DbErr;

use super::Error;

/// Strategy for handling errors in a retry context
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl Error {
    /// Determine error retry strategy based upon application Error type
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            Self::DbErr(db_err) => match db_err {
                // Connection errors - transient, should retry
                DbErr::ConnectionAcquire(_) => ErrorRetryStrategy::Retry,
                DbErr::Conn(_) => ErrorRetryStrategy::Retry,

                // Query, conversion, and record errors won't resolve with a retry
                _ => ErrorRetryStrategy::Fail,
            },

            // OAuth provider requests - retry on provider outages and network failures
            Self::ReqwestError(reqwest_error) => match reqwest_error.status() {
                Some(status) if status.is_server_error() => ErrorRetryStrategy::Retry,
                Some(_) => ErrorRetryStrategy::Fail,
                None => ErrorRetryStrategy::Retry,
            },

            // Session errors - transient, could be Redis connection issues
            Self::SessionError(_) => ErrorRetryStrategy::Retry,
            Self::SessionRedisError(_) => ErrorRetryStrategy::Retry,

            // Codes are single use, retrying an exchange can never succeed
            Self::OAuthTokenError(_) => ErrorRetryStrategy::Fail,

            Self::ConfigError(_)
            | Self::AuthError(_)
            | Self::TrackerError(_)
            | Self::ValidationError(_)
            | Self::ParseError(_)
            | Self::InternalError(_)
            | Self::SerdeJsonError(_)
            | Self::UrlParseError(_) => ErrorRetryStrategy::Fail,
        }
    }
}
