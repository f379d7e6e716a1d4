use thiserror::Error;

#[derive(Error, Debug)]
pub enum PressError {
    #[error("missing credential: GEMINI_API_KEY is not set")] MissingCredential,
    #[error("provider error: {0}")] Provider(String),
}
