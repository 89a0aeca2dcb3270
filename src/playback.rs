//! Playback controller: transport state and the media resource contract.
//!
//! The controller owns `PlaybackState` and is the only component that talks
//! to the `MediaResource`. Resource status arrives asynchronously as
//! `ResourceEvent`s which the runtime feeds back through
//! `Controller::handle_event`.

mod catalog;
mod controller;
mod resource;
mod state;
mod time;

pub use catalog::*;
pub use controller::*;
pub use resource::*;
pub use state::*;
pub use time::*;
