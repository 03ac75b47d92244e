pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::money;
pub use table::Table;
