pub mod frequency;
pub mod endline;
pub mod quote;
pub mod delimiter;
pub mod header;

pub use frequency::{FrequencyCounter, FrequencyVector};
pub use endline::EndlineDetector;
pub use quote::QuoteDetector;
pub use delimiter::DelimiterDetector;
pub use header::{ColumnType, ColumnTypeProfile, HeaderDetector};
