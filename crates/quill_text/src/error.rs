/// Validation failures raised by [`crate::abbreviate`]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("upper value cannot be less than -1")]
    UpperBelowMinimum,

    #[error("upper value is less than lower value")]
    UpperBelowLower,
}

pub type Result<T> = std::result::Result<T, Error>;
