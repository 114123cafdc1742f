use crate::compiler::Dialect;
use thiserror::Error;

/// Boxed so that `Result<String, Error>` stays one word wide no matter how
/// much context an error variant ends up carrying.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl<E> From<E> for Error
where
    ErrorKind: From<E>,
{
    fn from(value: E) -> Self {
        Error(Box::new(value.into()))
    }
}

/// The error taxonomy is minimal on purpose: rendering is a pure function of
/// the node graph, so there is no I/O and no parsing to fail. The only caller
/// bug we report is asking for a dialect nobody has implemented.
#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("unsupported dialect: {0:?}")]
    UnsupportedDialect(Dialect),
}

impl Error {
    pub fn into_inner(self) -> ErrorKind {
        *self.0
    }
}
