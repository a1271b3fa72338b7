pub mod annotations;

pub use annotations::*;
