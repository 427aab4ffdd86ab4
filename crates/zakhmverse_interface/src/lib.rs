//! Interface traits for the ZakhmVerse poem generation library.

mod driver;

pub use driver::PoemDriver;
