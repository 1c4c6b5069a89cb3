//! ASCII art for the gallows and the full-screen banners

mod sheet;
mod source;

pub use sheet::{ArtSheet, BANNER_HEIGHT, FRAME_HEIGHT};
pub use source::{ArtSource, Banner, GALLOWS_FILE};
