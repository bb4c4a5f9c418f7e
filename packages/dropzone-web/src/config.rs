use dropzone_core::UploadConfig;
use tracing::{warn, Level};

const EMBEDDED: &str = include_str!("../Dropzone.toml");

/// The configuration baked into the binary from `Dropzone.toml`.
///
/// A broken file is reported and replaced by the defaults so the picker still works.
pub fn embedded() -> UploadConfig {
    UploadConfig::from_toml_str(EMBEDDED).unwrap_or_else(|err| {
        warn!("{err}, falling back to defaults");
        UploadConfig::default()
    })
}

/// The level the logger is initialized with. Unknown names mean `INFO`.
pub fn log_level(config: &UploadConfig) -> Level {
    config.log_level.parse().unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_file_parses() {
        UploadConfig::from_toml_str(EMBEDDED).unwrap();
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        let mut cfg = UploadConfig::default();
        cfg.log_level = "chatty".to_string();
        assert_eq!(log_level(&cfg), Level::INFO);

        cfg.log_level = "debug".to_string();
        assert_eq!(log_level(&cfg), Level::DEBUG);
    }
}
