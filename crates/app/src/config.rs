use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_SOUNDS_DIR: &str = "assets/sounds";

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue { flag: &'static str },
    EmptyValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ConfigError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
            ConfigError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings for the desktop app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Question bank JSON; the embedded bank is used when unset.
    pub questions_path: Option<PathBuf>,
    /// Category catalog JSON; the embedded catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub sounds_dir: PathBuf,
    pub mute: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Parsed {
    Run(AppConfig),
    Help,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path>] [--catalog <path>]");
    eprintln!("                      [--export-dir <dir>] [--sounds-dir <dir>] [--mute]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  questions and catalog: built into the binary");
    eprintln!("  --export-dir  the current directory");
    eprintln!("  --sounds-dir  {DEFAULT_SOUNDS_DIR}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_PATH, QUIZ_CATALOG_PATH, QUIZ_EXPORT_DIR, QUIZ_SOUNDS_DIR");
    eprintln!("  RUST_LOG (log filter)");
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ConfigError> {
    let value = args.next().ok_or(ConfigError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyValue { flag });
    }
    Ok(PathBuf::from(value))
}

impl AppConfig {
    /// Parse from the process arguments and environment.
    pub fn from_env() -> Result<Parsed, ConfigError> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Flags override environment variables, which override defaults.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ConfigError> {
        let env_path = |key: &str| {
            env(key)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
        };

        let mut config = AppConfig {
            questions_path: env_path("QUIZ_QUESTIONS_PATH"),
            catalog_path: env_path("QUIZ_CATALOG_PATH"),
            export_dir: env_path("QUIZ_EXPORT_DIR").unwrap_or_else(|| PathBuf::from(".")),
            sounds_dir: env_path("QUIZ_SOUNDS_DIR")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SOUNDS_DIR)),
            mute: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    config.questions_path = Some(require_value(&mut args, "--questions")?);
                }
                "--catalog" => config.catalog_path = Some(require_value(&mut args, "--catalog")?),
                "--export-dir" => config.export_dir = require_value(&mut args, "--export-dir")?,
                "--sounds-dir" => config.sounds_dir = require_value(&mut args, "--sounds-dir")?,
                "--mute" => config.mute = true,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ConfigError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(config))
    }
}
