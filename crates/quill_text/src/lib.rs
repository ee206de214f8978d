mod abbreviate;
mod chars;
mod error;
mod initials;
mod swap_case;
mod wrap;

pub use abbreviate::abbreviate;
pub use error::{Error, Result};
pub use initials::initials;
pub use swap_case::swap_case;
pub use wrap::{WrapOptions, wrap};
