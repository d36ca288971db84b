//! Configuration loading and resolution.
//!
//! Each setting resolves as: explicit flag, then environment variable, then a
//! file in the working directory, then a file under the home directory.

use std::path::PathBuf;
use std::time::Duration;

use crate::types::{ServiceError, ServiceResult};

pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_ONTOLOGY_URL: &str = "https://www.ebi.ac.uk/QuickGO/services/ontology/go";
pub const DEFAULT_LOOKUP_TIMEOUT_MS: u64 = 5000;

const HOME_DIR: &str = ".protein-function";
const MODEL_FILENAME: &str = "model.onnx";
const LABELS_FILENAME: &str = "labels.json";

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ConfigArgs {
    pub addr: Option<String>,
    pub model: Option<String>,
    pub labels: Option<String>,
    pub ontology_url: Option<String>,
    pub lookup_timeout_ms: Option<u64>,
}

/// Fully resolved server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: String,
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    pub ontology_url: String,
    pub lookup_timeout: Duration,
}

impl ServerConfig {
    /// Resolve settings from CLI values and the process environment.
    pub fn resolve(args: ConfigArgs) -> ServiceResult<Self> {
        let env = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        let lookup_timeout_ms = match args.lookup_timeout_ms {
            Some(ms) => ms,
            None => match env("PROTFN_LOOKUP_TIMEOUT_MS") {
                Some(raw) => raw.parse().map_err(|_| {
                    ServiceError::Config(format!("PROTFN_LOOKUP_TIMEOUT_MS is not a number: {raw}"))
                })?,
                None => DEFAULT_LOOKUP_TIMEOUT_MS,
            },
        };

        Ok(Self {
            addr: args
                .addr
                .or_else(|| env("PROTFN_ADDR"))
                .unwrap_or_else(|| DEFAULT_ADDR.to_string()),
            model_path: resolve_artifact_path(args.model, env("PROTFN_MODEL"), MODEL_FILENAME),
            labels_path: resolve_artifact_path(args.labels, env("PROTFN_LABELS"), LABELS_FILENAME),
            ontology_url: args
                .ontology_url
                .or_else(|| env("PROTFN_ONTOLOGY_URL"))
                .unwrap_or_else(|| DEFAULT_ONTOLOGY_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            lookup_timeout: Duration::from_millis(lookup_timeout_ms),
        })
    }
}

/// Resolve a model or label artifact path.
fn resolve_artifact_path(
    explicit: Option<String>,
    from_env: Option<String>,
    file_name: &str,
) -> PathBuf {
    if let Some(path) = explicit.or(from_env) {
        return PathBuf::from(path);
    }

    let cwd_path = PathBuf::from(file_name);
    if cwd_path.exists() {
        return cwd_path;
    }

    resolve_home_dir().join(HOME_DIR).join(file_name)
}

fn resolve_home_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
}
