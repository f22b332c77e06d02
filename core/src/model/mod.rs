pub mod choice;
pub mod grid;
pub mod record;
pub mod stats;
pub mod week;
