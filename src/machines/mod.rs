//! Ready-made machine definitions.

mod mod_three;

pub use mod_three::{mod_three, Remainder};
