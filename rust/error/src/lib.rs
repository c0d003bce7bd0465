// Error codes follow the gRPC status code set, plus the 422 that the v1 REST
// API uses for request validation failures.
// https://grpc.github.io/grpc/core/md_doc_statuscodes.html
use std::error::Error;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ErrorCodes {
    // OK is returned on success, we use "Success" since Ok is a keyword in Rust.
    Success = 0,
    // CANCELLED indicates the operation was cancelled (typically by the caller).
    Cancelled = 1,
    // UNKNOWN indicates an unknown error.
    Unknown = 2,
    // INVALID_ARGUMENT indicates client specified an invalid argument.
    InvalidArgument = 3,
    // DEADLINE_EXCEEDED means operation expired before completion.
    DeadlineExceeded = 4,
    // NOT_FOUND means the collection or route was not found.
    NotFound = 5,
    // ALREADY_EXISTS means a collection we attempted to create already exists.
    AlreadyExists = 6,
    // PERMISSION_DENIED indicates the caller may not execute the operation.
    PermissionDenied = 7,
    // RESOURCE_EXHAUSTED indicates the server is rate limiting or out of capacity.
    ResourceExhausted = 8,
    // FAILED_PRECONDITION indicates the server is not in a state required for the operation.
    FailedPrecondition = 9,
    // INTERNAL errors are internal errors.
    Internal = 13,
    // UNAVAILABLE indicates the server could not be reached.
    Unavailable = 14,
    // UNAUTHENTICATED indicates the request does not have valid authentication credentials.
    Unauthenticated = 16,
    // UNPROCESSABLE_ENTITY indicates the payload failed server-side validation.
    UnprocessableEntity = 18,
}

impl ErrorCodes {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCodes::InvalidArgument => "InvalidArgumentError",
            ErrorCodes::NotFound => "NotFoundError",
            ErrorCodes::Internal => "InternalError",
            ErrorCodes::Unavailable => "UnavailableError",
            ErrorCodes::UnprocessableEntity => "ValidationError",
            _ => "ChromaError",
        }
    }
}

#[cfg(feature = "http")]
impl From<ErrorCodes> for http::StatusCode {
    fn from(error_code: ErrorCodes) -> Self {
        match error_code {
            ErrorCodes::Success => http::StatusCode::OK,
            ErrorCodes::Cancelled => http::StatusCode::BAD_REQUEST,
            ErrorCodes::Unknown => http::StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCodes::InvalidArgument => http::StatusCode::BAD_REQUEST,
            ErrorCodes::DeadlineExceeded => http::StatusCode::GATEWAY_TIMEOUT,
            ErrorCodes::NotFound => http::StatusCode::NOT_FOUND,
            ErrorCodes::AlreadyExists => http::StatusCode::CONFLICT,
            ErrorCodes::PermissionDenied => http::StatusCode::FORBIDDEN,
            ErrorCodes::ResourceExhausted => http::StatusCode::TOO_MANY_REQUESTS,
            ErrorCodes::FailedPrecondition => http::StatusCode::PRECONDITION_FAILED,
            ErrorCodes::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCodes::Unavailable => http::StatusCode::SERVICE_UNAVAILABLE,
            ErrorCodes::Unauthenticated => http::StatusCode::UNAUTHORIZED,
            ErrorCodes::UnprocessableEntity => http::StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

#[cfg(feature = "http")]
impl From<http::StatusCode> for ErrorCodes {
    fn from(value: http::StatusCode) -> Self {
        match value {
            status if status.is_success() => ErrorCodes::Success,
            http::StatusCode::BAD_REQUEST => ErrorCodes::InvalidArgument,
            http::StatusCode::UNAUTHORIZED => ErrorCodes::Unauthenticated,
            http::StatusCode::FORBIDDEN => ErrorCodes::PermissionDenied,
            http::StatusCode::NOT_FOUND => ErrorCodes::NotFound,
            http::StatusCode::CONFLICT => ErrorCodes::AlreadyExists,
            http::StatusCode::TOO_MANY_REQUESTS => ErrorCodes::ResourceExhausted,
            http::StatusCode::INTERNAL_SERVER_ERROR => ErrorCodes::Internal,
            http::StatusCode::SERVICE_UNAVAILABLE => ErrorCodes::Unavailable,
            http::StatusCode::GATEWAY_TIMEOUT => ErrorCodes::DeadlineExceeded,
            http::StatusCode::PRECONDITION_FAILED => ErrorCodes::FailedPrecondition,
            http::StatusCode::UNPROCESSABLE_ENTITY => ErrorCodes::UnprocessableEntity,
            _ => ErrorCodes::Unknown,
        }
    }
}

pub trait ChromaError: Error + Send {
    fn code(&self) -> ErrorCodes;
    fn boxed(self) -> Box<dyn ChromaError>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
    fn should_trace_error(&self) -> bool {
        true
    }
}

impl Error for Box<dyn ChromaError> {}

impl ChromaError for Box<dyn ChromaError> {
    fn code(&self) -> ErrorCodes {
        self.as_ref().code()
    }
}
