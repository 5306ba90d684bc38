pub use std::sync::Arc;
pub use std::time::Instant;

pub use anyhow::{anyhow, Context, Error};
pub use tracing::{debug, error, info, instrument, warn};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
