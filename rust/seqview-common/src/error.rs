use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn is_precondition_violation(&self) -> bool {
        match self.kind() {
            ErrorKind::PreconditionViolation { .. } => true,
        }
    }

    pub fn precondition(operation: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::PreconditionViolation {
                operation: operation.into(),
                message: message.into(),
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A caller programming error detected while constructing a view.
    #[error("precondition violated in {operation}: {message}")]
    PreconditionViolation { operation: String, message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
