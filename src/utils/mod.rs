pub mod convert;
pub mod coordinate;
pub mod utils;
