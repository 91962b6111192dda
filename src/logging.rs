use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Info by default, overridable through `RUST_LOG`. Logs go to stderr; stdout carries the listing.
pub fn setup_logging() {
    let mut builder = Builder::new();

    builder
        .filter_level(LevelFilter::Info)
        .target(Target::Stderr)
        .format_timestamp(None);

    builder.parse_env(Env::default());

    builder.init();
}
