//! The Skyward game: a bird falls under gravity, flaps upward on input,
//! and threads scrolling pipe gaps. Hitting a pipe or the ground ends
//! the run; the flap key restarts it.

pub mod logic;
pub mod types;

#[allow(unused_imports)]
pub use logic::*;
#[allow(unused_imports)]
pub use types::*;
