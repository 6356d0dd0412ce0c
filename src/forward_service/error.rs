#[derive(Debug, thiserror::Error)]
pub enum ForwardServiceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request timed out")]
    Timeout,
}

#[cfg_attr(test, mockall::automock)]
pub trait ForwardServiceErrorChecker {
    fn is_timeout(&self) -> bool;
    fn is_connect(&self) -> bool;
    fn is_request(&self) -> bool;
    fn error_string(&self) -> String;
}
