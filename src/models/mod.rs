pub mod application;
pub mod lookup;

pub use application::*;
pub use lookup::*;
