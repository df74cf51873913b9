use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use maconv_core::config::Settings;

pub fn get_configuration_with_paths(
    current_dir_path: Option<PathBuf>,
    system_config_dir_path: Option<PathBuf>,
) -> Result<Settings, config::ConfigError> {
    let config_directory = current_dir_path.unwrap_or_else(|| {
        std::env::current_dir()
            .map(|p| p.join("config"))
            .unwrap_or_else(|_| PathBuf::from("config"))
    });

    let system_config_dir = if let Some(path) = system_config_dir_path {
        path
    } else {
        ProjectDirs::from("com", "maconv", "maconv")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("config"))
    };

    let settings = Config::builder()
        // Defaults reproduce the original converter's fixed paths.
        .set_default("convert.input_dir", "to-convert")?
        .set_default("convert.output_dir", "converted")?
        .set_default("convert.mode", "extended")?
        .set_default("convert.manifest_path", "manifest.json")?
        .set_default("convert.write_manifest", true)?
        .set_default("log_level", "info")?
        .add_source(File::from(system_config_dir.join("config.toml")).required(false))
        .add_source(File::from(config_directory.join("config.toml")).required(false))
        .add_source(Environment::with_prefix("MACONV").separator("__"))
        .build()?;

    settings.try_deserialize::<Settings>()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    get_configuration_with_paths(None, None)
}
