use std::{iter::FusedIterator, vec};

use crate::model::movie::Movie;

/// One-shot cursor over the movies a collection held when traversal began.
#[derive(Debug)]
pub struct MovieIterator {
    movies: vec::IntoIter<Movie>,
    position: usize,
    len: usize,
}

impl MovieIterator {
    pub fn new(movies: Vec<Movie>) -> Self {
        let len = movies.len();
        MovieIterator {
            movies: movies.into_iter(),
            position: 0,
            len,
        }
    }
}

impl Iterator for MovieIterator {
    type Item = Movie;

    fn next(&mut self) -> Option<Movie> {
        if self.position >= self.len {
            return None;
        }

        let movie = self.movies.next()?;
        self.position += 1;
        Some(movie)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MovieIterator {}

impl FusedIterator for MovieIterator {}
