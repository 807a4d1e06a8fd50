//! A client for the Synology AudioStation web API.
//!
//! Unlike Subsonic, AudioStation issues a session ID (`sid`) on login that
//! every later call has to carry, so [`Client::login`] must succeed before
//! the catalog can be browsed.
#![deny(missing_docs)]

pub use lyrebird_shared;

mod client;
pub use client::*;

mod endpoint;
pub use endpoint::*;

mod request;

mod auth;

mod song;
pub use song::*;

mod album;
pub use album::*;

mod artist;
pub use artist::*;

mod playlist;
pub use playlist::*;

mod search;
pub use search::*;

mod misc;
pub use misc::*;
