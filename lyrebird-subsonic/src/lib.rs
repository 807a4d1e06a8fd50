//! A client for the Subsonic API, authenticating with a salted token on
//! every request.
#![deny(missing_docs)]

pub use lyrebird_shared;

mod client;
pub use client::*;

mod album;
pub use album::*;

mod artist;
pub use artist::*;

mod song;
pub use song::*;

mod playlist;
pub use playlist::*;

mod search;
pub use search::*;

mod misc;

mod request;
