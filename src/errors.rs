use thiserror::Error;

/// Process exit status for any failed invocation.
pub const DEFAULT_ERROR_EXIT_CODE: i32 = 1;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("You must specify the type of resource to get.")]
    MissingResourceType,

    #[error("Unrecognized resource type: {0}.")]
    UnrecognizedResourceType(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid output format: {0}, currently supports formats such as yaml|json|wide.")]
    InvalidOutputFormat(String),

    #[error("Invalid selector syntax: {0}")]
    InvalidSelectorSyntax(String),

    #[error("Metadata store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Metadata store error: {0}")]
    StoreError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("You must specify only one resource.")]
    MultipleNamesWithAllType,

    #[error("Output error: {0}")]
    OutputError(String),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        DEFAULT_ERROR_EXIT_CODE
    }
}

/// Helper for mapping a malformed document error into a decode error
pub fn decode_error<E: ToString>(err: E) -> AppError {
    AppError::DecodeError(err.to_string())
}

/// Helper for mapping a writer or serializer failure into an output error
pub fn output_error<E: ToString>(err: E) -> AppError {
    AppError::OutputError(err.to_string())
}
