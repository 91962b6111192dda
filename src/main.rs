use std::{io, process};

mod logging;

fn main() {
    logging::setup_logging();

    let stdout = io::stdout();
    if let Err(e) = movie_catalog::run(&mut stdout.lock()) {
        log::error!("{}", e);
        process::exit(1);
    }
}
