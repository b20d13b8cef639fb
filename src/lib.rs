// docsim: TF-IDF document similarity
//
// This is the library root. `analysis` is the scoring pipeline itself; the
// other modules get text into it and results out of it.

pub mod analysis;
pub mod config;
pub mod output;
pub mod source;

#[cfg(feature = "web")]
pub mod web;
