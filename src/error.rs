//! Filter Errors
//!
//! Every failure stops at the component boundary: it is logged and the
//! dropdowns degrade, nothing is shown to the user.

/// Common result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// The host admin scripts are not loaded on this page
    HostUnavailable(String),
    /// A select field with the given id is not on the page
    MissingField(String),
    /// The dependent field with the given id already has a synchronizer
    AlreadyAttached(String),
    /// The request never produced a response
    Network(String),
    /// The endpoint answered with a non-success status
    Status { status: u16, body: String },
    /// The response body was not a list of program records
    Decode(String),
    /// A DOM call threw
    Dom(String),
    Config(String),
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::HostUnavailable(path) => write!(f, "Host framework not loaded: {} is undefined", path),
            FilterError::MissingField(id) => write!(f, "Field not found: #{}", id),
            FilterError::AlreadyAttached(id) => write!(f, "Program filter already attached to #{}", id),
            FilterError::Network(msg) => write!(f, "Network error: {}", msg),
            FilterError::Status { status, body } => write!(f, "Request failed with status {}: {}", status, body),
            FilterError::Decode(msg) => write!(f, "Malformed response: {}", msg),
            FilterError::Dom(msg) => write!(f, "DOM error: {}", msg),
            FilterError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for FilterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_includes_body() {
        let err = FilterError::Status {
            status: 500,
            body: "Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed with status 500: Server Error");
    }
}
