//! Particle field simulation behind the countdown page background.

pub mod clock;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod engine;
pub mod error;
pub mod force;
pub mod layout;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod resolved;
pub mod time_events;

pub use clock::*;
pub use config::FieldParams;
pub use countdown::*;
pub use engine::*;
pub use error::*;
pub use layout::*;
pub use particle::*;
pub use pointer::*;
pub use render::*;
pub use resolved::*;
pub use time_events::*;
