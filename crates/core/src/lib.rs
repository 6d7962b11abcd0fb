//! Card-reading logic: catalog, deck, reveal sessions and the request/response
//! service. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod error;
pub mod events;
pub mod image;
pub mod rng;
pub mod service;
pub mod session;
pub mod slug;
pub mod spread;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use image::*;
pub use rng::*;
pub use service::*;
pub use session::*;
pub use slug::*;
pub use spread::*;
