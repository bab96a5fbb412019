pub mod catalog;
pub mod index;
pub mod similarity;
pub mod vectorizer;

pub use catalog::load_catalog;
pub use index::MovieIndex;
