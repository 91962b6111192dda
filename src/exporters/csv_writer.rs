use std::io;

use csv::Writer;
use thiserror::Error;

use crate::model::movie::Movie;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Error when writing CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("Error when flushing CSV output: {0}")]
    Io(#[from] io::Error),
}

pub struct CsvWriter {}

impl CsvWriter {
    /// Writes a header row followed by one row per movie, in iteration order.
    pub fn write_movies<W, I>(movies: I, sink: W) -> Result<(), ExportError>
    where
        W: io::Write,
        I: IntoIterator<Item = Movie>,
    {
        let mut wrt = Writer::from_writer(sink);
        wrt.write_record(Movie::csv_titles())?;

        for movie in movies {
            if let Err(e) = wrt.write_record(movie.to_csvable_array()) {
                log::error!("Error when adding entry to CSV output. Entry: {:?}", movie);
                return Err(e.into());
            }
        }

        wrt.flush()?;
        Ok(())
    }
}
