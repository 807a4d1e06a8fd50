//! Pieces shared by the lyrebird server clients: persisted server settings
//! and the observable connectivity flag.
#![deny(missing_docs)]

pub mod config;

mod settings;
pub use settings::*;

mod connectivity;
pub use connectivity::*;
