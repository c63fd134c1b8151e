pub mod types;

pub use types::KanjiRecord;
