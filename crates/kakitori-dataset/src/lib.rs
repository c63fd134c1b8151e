pub mod loader;
pub mod rater;

pub use loader::{LoadError, load_dataset, load_kanken_list};
pub use rater::KankenRater;
