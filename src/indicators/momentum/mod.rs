pub mod rsi;

pub use rsi::{relative_strength_index, relative_strength_index_default};
