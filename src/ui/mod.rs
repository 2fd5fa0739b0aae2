pub mod app;
pub mod card;
pub mod events;
pub mod flip;
pub mod footer;
pub mod header;
pub mod home;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod profile;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
