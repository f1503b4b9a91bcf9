// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use photo_upload::app::{self, Flags};
use photo_upload::config;
use photo_upload::infrastructure::HttpTransport;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    config::paths::init_cli_override(config_dir);
    let (config, config_warning) = config::load();
    if let Some(key) = &config_warning {
        log::warn!("using default settings ({key})");
    }

    let transport = HttpTransport::new(&config.upload)?;
    log::info!("submissions go to {}", transport.endpoint());

    app::run(Flags {
        config,
        config_warning,
        transport: Arc::new(transport),
        file_path,
    })?;
    Ok(())
}
