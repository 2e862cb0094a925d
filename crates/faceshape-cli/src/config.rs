use clap::ValueEnum;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// CLI configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Output format (default: text).
    pub output: OutputFormat,
    /// Maximum number of files classified at once.
    pub workers: usize,
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Config {
    /// Load configuration from `FACESHAPE_*` environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let output = match get("FACESHAPE_OUTPUT").as_deref().map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Self {
            output,
            workers: env_usize(&get, "FACESHAPE_WORKERS", default_workers()).max(1),
            pretty: get("FACESHAPE_PRETTY").map(|v| v != "0").unwrap_or(true),
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn env_usize(get: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    get(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
