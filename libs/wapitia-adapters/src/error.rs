/// A string that does not hold the expected value type.
#[derive(thiserror::Error, Debug)]
pub enum AdapterError {
    #[error("invalid instant '{value}': {source}")]
    Instant {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("invalid uuid '{value}': {source}")]
    Uuid {
        value: String,
        #[source]
        source: ::uuid::Error,
    },
}
