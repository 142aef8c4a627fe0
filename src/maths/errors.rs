use crate::logger;
use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum VectorError
{
    /// A runtime element sequence did not match the vector's fixed size
    #[display("Expected {expected} elements, found {found}")]
    SizeMismatch { expected: usize, found: usize },
    #[display("Index {index} out of range for vector of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

impl logger::ProjectError for VectorError
{
    fn title(&self) -> String
    {
        String::from(match *self {
            VectorError::SizeMismatch { .. } => "Size",
            VectorError::IndexOutOfRange { .. } => "Index",
        })
    }
}

impl std::error::Error for VectorError {}
