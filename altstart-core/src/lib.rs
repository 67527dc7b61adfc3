#[macro_use]
mod par;

pub mod config;
pub mod error;
pub mod io;
pub mod scan;
pub mod seq;

pub use config::{ExportConfig, ScanConfig};
pub use error::{AltStartError, AltStartResult};
pub use scan::{run, ScanReport};
