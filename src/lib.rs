//! Country Explorer: look up a country by its two-letter code and browse
//! the result on a flip card in the terminal.

pub mod animation;
pub mod config;
pub mod country;
pub mod logging;
pub mod nav;
pub mod ui;
