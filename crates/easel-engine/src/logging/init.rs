use std::sync::Once;

/// Modules whose info-level output is mostly adapter/shader chatter.
const NOISY_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "easel_engine=debug,wgpu_core=warn"). When unset, `default_level` applies
/// and wgpu/naga are capped at warn.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored, as is a logger
/// installed by someone else first. Output goes to stderr so stdout stays
/// reserved for the program's own report lines.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        if build_logger(&config).try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

/// Builds the logger from `config` alone; the process environment is never
/// consulted.
fn build_logger(config: &LoggingConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.target(env_logger::Target::Stderr);

    match &config.env_filter {
        Some(filter) => {
            builder.parse_filters(filter);
        }
        None => {
            builder.filter_level(config.default_level);
            for module in NOISY_MODULES {
                builder.filter_module(module, log::LevelFilter::Warn);
            }
        }
    }

    builder.write_style(config.write_style);
    builder
}
