pub mod template;
pub mod worksheet;

pub use worksheet::WorksheetGenerator;
