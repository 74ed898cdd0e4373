use std::fmt;
use std::error::Error;

///
/// Errors from the checked transformation operations
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TransformError {
    /// The transformation squashes everything onto a line or a point, so it cannot be reversed
    SingularMatrix
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TransformError::SingularMatrix  => write!(f, "transformation matrix is singular and cannot be inverted")
        }
    }
}

impl Error for TransformError { }
