//! Boot — logging init and config resolution.

use tracing::{info, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::CrmLogConfig;
use crate::error::Result;

/// Initialise the tracing / logging subsystem.
///
/// Logs go to stderr so stdout carries only rendered entries.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crmlog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load config (file, then env), apply CLI arguments, and validate.
pub fn boot() -> Result<CrmLogConfig> {
    info!("Starting crmlog v{}", env!("CARGO_PKG_VERSION"));

    let mut config = CrmLogConfig::load()?;
    apply_cli_args(&mut config, std::env::args().skip(1));

    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!(
        "Resolved configuration: input={}, output={}, entry={:?}",
        config.input_path.as_deref().unwrap_or_default(),
        config.output,
        config.entry
    );
    Ok(config)
}

/// The first positional argument, when present, is the input path.
pub fn apply_cli_args<I>(config: &mut CrmLogConfig, mut args: I)
where
    I: Iterator<Item = String>,
{
    if let Some(path) = args.next() {
        config.input_path = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_arg_overrides_input() {
        let mut config = CrmLogConfig {
            input_path: Some("from-config.log".to_string()),
            ..CrmLogConfig::default()
        };
        apply_cli_args(&mut config, vec!["from-cli.log".to_string()].into_iter());
        assert_eq!(config.input_path.as_deref(), Some("from-cli.log"));
    }

    #[test]
    fn test_no_cli_arg_keeps_input() {
        let mut config = CrmLogConfig {
            input_path: Some("from-config.log".to_string()),
            ..CrmLogConfig::default()
        };
        apply_cli_args(&mut config, std::iter::empty());
        assert_eq!(config.input_path.as_deref(), Some("from-config.log"));
    }
}
