pub mod error;
pub mod select;
pub mod store;

pub use error::SelectError;
pub use select::resolve;
pub use store::RecordStore;

#[cfg(test)]
mod tests;
