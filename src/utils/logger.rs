use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// The `mundialnet` binary logs under its own target, separate from the library crate.
pub const CLI_VERBOSE_DIRECTIVES: &str = "mundialnet=debug,mundialnet_site=debug,info";
pub const CLI_QUIET_DIRECTIVES: &str = "mundialnet=warn,mundialnet_site=warn";
pub const JSON_DIRECTIVES: &str = "mundialnet=info,mundialnet_site=info";

pub fn cli_directives(verbose: bool) -> &'static str {
    if verbose {
        CLI_VERBOSE_DIRECTIVES
    } else {
        CLI_QUIET_DIRECTIVES
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(JSON_DIRECTIVES));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // one JSON object per line for log shippers
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;
    use tracing_subscriber::Registry;

    fn with_filter(directives: &str, check: impl FnOnce() -> bool) -> bool {
        let subscriber = Registry::default().with(EnvFilter::new(directives));
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn test_directives_parse() {
        for directives in [CLI_VERBOSE_DIRECTIVES, CLI_QUIET_DIRECTIVES, JSON_DIRECTIVES] {
            assert!(EnvFilter::try_new(directives).is_ok(), "{}", directives);
        }
    }

    #[test]
    fn test_binary_target_is_covered() {
        // -v shows the CLI's own debug lines as well as the library's
        assert!(with_filter(cli_directives(true), || {
            tracing::enabled!(target: "mundialnet", Level::DEBUG)
        }));
        assert!(with_filter(cli_directives(true), || {
            tracing::enabled!(target: "mundialnet_site", Level::DEBUG)
        }));

        // quiet and json modes still surface the CLI's error report
        assert!(with_filter(cli_directives(false), || {
            tracing::enabled!(target: "mundialnet", Level::ERROR)
        }));
        assert!(!with_filter(cli_directives(false), || {
            tracing::enabled!(target: "mundialnet", Level::DEBUG)
        }));
        assert!(with_filter(JSON_DIRECTIVES, || {
            tracing::enabled!(target: "mundialnet", Level::ERROR)
        }));
    }
}
