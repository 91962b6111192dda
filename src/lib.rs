use std::io::Write;

use thiserror::Error;

pub mod collection;
pub use collection::{
    error::CollectionError, movie_collection::MovieCollection, movie_iterator::MovieIterator,
};

pub mod model;
pub use model::movie::Movie;

pub mod exporters;
use exporters::csv_writer::{CsvWriter, ExportError};

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Walks through the catalog API on a small Nolan collection, printing each step to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), RunError> {
    let inception = Movie::new("Inception", 2010, "Sci-Fi", "Christopher Nolan");
    let dark_knight = Movie::new("The Dark Knight", 2008, "Action", "Christopher Nolan");

    let mut collection = MovieCollection::new();
    collection.add(inception)?;
    collection.add(dark_knight)?;
    log::info!("Catalog holds {} movies", collection.len());

    writeln!(out, "All movies in the collection:")?;
    for movie in &collection {
        writeln!(out, "- {}", movie)?;
    }

    writeln!(out, "\nMovies from 2010:")?;
    for movie in collection.find_by_year(2010) {
        writeln!(out, "- {}", movie.title)?;
    }

    collection.remove("Inception")?;
    writeln!(out, "\nAfter removing 'Inception':")?;
    for movie in &collection {
        writeln!(out, "- {}", movie.title)?;
    }

    writeln!(out)?;
    CsvWriter::write_movies(collection.traverse(), &mut *out)?;

    log::info!("Finished walking through the movie catalog");
    Ok(())
}
