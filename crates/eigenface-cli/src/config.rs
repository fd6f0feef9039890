/// Default classification parameters, loaded from `EIGENFACE_*`
/// environment variables. CLI flags override these per invocation.
pub struct Config {
    /// Eigenfaces retained when -k is not given (capped at the corpus
    /// size at train time).
    pub eigenface_count: usize,
    /// Rejection threshold when --max-distance is not given.
    pub max_distance: f64,
    /// Training image extension when --extension is not given.
    pub extension: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            eigenface_count: env_usize("EIGENFACE_COUNT", 3),
            max_distance: env_f64("EIGENFACE_MAX_DISTANCE", 50.0),
            extension: std::env::var("EIGENFACE_EXTENSION").unwrap_or_else(|_| "png".to_string()),
        }
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
