use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum StreamError {
    /// The producer went away without sending the end-of-input marker,
    /// which only happens when it panics.
    #[error("scanner thread panicked before end of input")]
    ProducerPanicked,
}

#[derive(ThisError, Debug)]
pub enum OptionsError {
    #[error("invalid scanner options: {0}")]
    Json(#[from] serde_json::Error),
}
