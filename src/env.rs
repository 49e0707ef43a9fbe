use log::LevelFilter;

pub struct Env {}

impl Env {
    pub const SYS_NAME: &'static str = "pairsum";
    pub const LOG_ENV_VAR: &'static str = "RUST_LOG";
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Level forced on top of `RUST_LOG`, if any.
    pub fn log_level_override(verbose: bool) -> Option<LevelFilter> {
        if verbose {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
