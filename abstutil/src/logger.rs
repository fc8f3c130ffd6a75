/// Intercept messages using the `log` crate and print them to STDERR. Defaults to `info`, but
/// `RUST_LOG` overrides that, like `RUST_LOG=route_editor=debug`.
pub fn setup() {
    use env_logger::{Builder, Env};
    // Tests and tools sometimes call this more than once
    if let Err(err) = Builder::from_env(Env::default().default_filter_or("info")).try_init() {
        log::debug!("Logging already set up: {}", err);
    }
}
