pub mod extract;
pub mod parsing;
pub mod quoting;
