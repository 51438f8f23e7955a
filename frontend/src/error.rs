use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read preference: {0}")]
    Read(String),
    #[error("failed to write preference: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("could not encode the request: {0}")]
    Serialize(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("the server rejected the request (status {0})")]
    Rejected(u16),
}

/// Reasons a lead flow refuses an operation. The state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("the form is not open")]
    NotOpen,
    #[error("a submission is already in progress")]
    Busy,
    #[error("this request has already been submitted")]
    AlreadySubmitted,
    #[error("please complete the remaining steps first")]
    NotOnFinalStep,
    #[error("please fill in your {0}")]
    MissingRequired(&'static str),
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmbedError {
    #[error("no document to attach to")]
    NoDocument,
    #[error("dom operation failed: {0}")]
    Dom(String),
}

impl From<wasm_bindgen::JsValue> for EmbedError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        EmbedError::Dom(format!("{:?}", value))
    }
}
