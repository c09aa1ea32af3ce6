use thiserror::Error;

/// Message shown in place of UV data when the UV side of a lookup fails.
pub const UV_UNAVAILABLE_MESSAGE: &str = "UV data currently not available.";

/// Message shown when the weather side of a lookup fails.
pub const WEATHER_FAILED_MESSAGE: &str = "Failed to fetch weather data. Please try again.";

/// Errors surfaced by the core.
///
/// Weather failures are fatal to a combined lookup; `UvUnavailable` is expected to be
/// absorbed by the caller, which keeps the weather result and shows an advisory instead.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A fetched payload is missing required structure.
    #[error("Malformed upstream data: {0}")]
    MalformedUpstreamData(String),

    /// UV credential missing, or the UV provider call failed.
    #[error("UV data unavailable: {0}")]
    UvUnavailable(String),

    /// Network-level failure talking to an upstream provider.
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),
}

impl CoreError {
    /// Text suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            CoreError::UvUnavailable(_) => UV_UNAVAILABLE_MESSAGE,
            CoreError::MalformedUpstreamData(_) | CoreError::UpstreamUnreachable(_) => {
                WEATHER_FAILED_MESSAGE
            }
        }
    }

    pub fn is_uv_unavailable(&self) -> bool {
        matches!(self, CoreError::UvUnavailable(_))
    }

    /// Re-tag any error coming out of the UV side as `UvUnavailable`.
    pub(crate) fn into_uv_unavailable(self) -> Self {
        match self {
            CoreError::UvUnavailable(msg) => CoreError::UvUnavailable(msg),
            CoreError::MalformedUpstreamData(msg) | CoreError::UpstreamUnreachable(msg) => {
                CoreError::UvUnavailable(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_for_weather_failures_is_generic() {
        let malformed = CoreError::MalformedUpstreamData("no daily".into());
        let unreachable = CoreError::UpstreamUnreachable("timeout".into());

        assert_eq!(malformed.user_message(), WEATHER_FAILED_MESSAGE);
        assert_eq!(unreachable.user_message(), WEATHER_FAILED_MESSAGE);
    }

    #[test]
    fn uv_errors_are_distinct_from_malformed_data() {
        let err = CoreError::UvUnavailable("OpenUV API key not configured".into());
        assert!(err.is_uv_unavailable());
        assert_eq!(err.user_message(), UV_UNAVAILABLE_MESSAGE);
        assert!(!CoreError::MalformedUpstreamData("x".into()).is_uv_unavailable());
    }

    #[test]
    fn into_uv_unavailable_keeps_the_detail() {
        let err = CoreError::UpstreamUnreachable("connection refused".into()).into_uv_unavailable();
        assert!(err.is_uv_unavailable());
        assert!(err.to_string().contains("connection refused"));
    }
}
