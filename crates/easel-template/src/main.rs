mod scene;

use std::process::ExitCode;

use easel_engine::logging::{init_logging, LoggingConfig};
use easel_engine::session::{self, SessionConfig, WindowConfig};
use easel_engine::window::WinitBackend;

use crate::scene::TemplateScene;

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());
    log::info!("easel-template {}", env!("CARGO_PKG_VERSION"));

    let config = SessionConfig {
        window: WindowConfig {
            title: "Easel Template".to_string(),
            ..WindowConfig::default()
        },
        ..SessionConfig::default()
    };

    let mut scene = TemplateScene::new();
    let mut stdout = std::io::stdout().lock();

    match session::run(WinitBackend::new(), &config, &mut scene, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
