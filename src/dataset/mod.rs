//! Dataset preparation: raw records to indexed, genre-tagged scrobbles.

mod genre;
mod scrobble;

pub use genre::{GenreLegend, GenreLegendEntry, GenreResolver, GenreTable};
pub use scrobble::{Dataset, RawScrobble};
