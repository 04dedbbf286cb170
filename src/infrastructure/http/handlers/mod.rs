//! HTTP Handlers

mod api;
mod audio;
mod page;
mod ping;

pub use api::*;
pub use audio::*;
pub use page::*;
pub use ping::*;
