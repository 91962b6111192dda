pub mod error;
pub mod movie_collection;
pub mod movie_iterator;
