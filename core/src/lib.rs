mod color;
mod delta_e;

pub mod error;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use color::{Lab, Rgb};
pub use delta_e::{cie76, color_delta};
pub use error::{Error, Result};
