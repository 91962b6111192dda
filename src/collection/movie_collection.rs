use indexmap::IndexMap;

use crate::{
    collection::{error::CollectionError, movie_iterator::MovieIterator},
    model::movie::Movie,
};

/// Title-keyed movie catalog that remembers insertion order.
#[derive(Debug, Default)]
pub struct MovieCollection {
    movies: IndexMap<String, Movie>,
}

impl MovieCollection {
    pub fn new() -> Self {
        MovieCollection::default()
    }

    pub fn add(&mut self, movie: Movie) -> Result<(), CollectionError> {
        if self.movies.contains_key(&movie.title) {
            log::warn!("Refusing to add duplicate movie {}", movie.title);
            return Err(CollectionError::DuplicateTitle(movie.title));
        }

        log::debug!("Adding movie {:?}", movie);
        self.movies.insert(movie.title.clone(), movie);
        Ok(())
    }

    /// Removes the movie stored under `title` and hands it back to the caller.
    pub fn remove(&mut self, title: &str) -> Result<Movie, CollectionError> {
        // shift_remove keeps the remaining movies in insertion order.
        match self.movies.shift_remove(title) {
            Some(movie) => {
                log::debug!("Removed movie {}", title);
                Ok(movie)
            }
            None => {
                log::warn!("Cannot remove movie {}: not in the collection", title);
                Err(CollectionError::NotFound(title.to_string()))
            }
        }
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Movie> {
        self.movies.get(title)
    }

    pub fn find_by_year(&self, year: i32) -> Vec<&Movie> {
        self.movies
            .values()
            .filter(|movie| movie.year == year)
            .collect()
    }

    pub fn find_by_genre(&self, genre: &str) -> Vec<&Movie> {
        self.movies
            .values()
            .filter(|movie| movie.genre == genre)
            .collect()
    }

    /// Starts a traversal over a snapshot of the current movies.
    ///
    /// Movies added or removed after this call are not seen by the returned
    /// iterator. Call again to traverse a second time.
    pub fn traverse(&self) -> MovieIterator {
        MovieIterator::new(self.movies.values().cloned().collect())
    }

    pub fn contains(&self, title: &str) -> bool {
        self.movies.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl IntoIterator for &MovieCollection {
    type Item = Movie;
    type IntoIter = MovieIterator;

    fn into_iter(self) -> MovieIterator {
        self.traverse()
    }
}
