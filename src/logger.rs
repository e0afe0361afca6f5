/// Initializes env_logger; `verbose` raises the level from info to debug.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .format_timestamp(None)
        .init();
}
