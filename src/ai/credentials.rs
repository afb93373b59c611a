//! Credential resolution for the completion client.
//!
//! The search chain lives in one place so callers can resolve a key
//! explicitly and inject it into [`CompletionClient::new`], or skip this
//! module entirely in tests.
//!
//! [`CompletionClient::new`]: crate::ai::client::CompletionClient::new

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::ai::client::CompletionError;

const API_KEY_VAR: &str = "OPENAI_API_KEY";
const API_KEY_PREFIX: &str = "OPENAI_API_KEY=";
const ENV_FILE: &str = ".env";

/// Resolve the OpenAI API key from the environment, falling back to a
/// bounded scan of dotenv files.
///
/// # Errors
///
/// Returns [`CompletionError::MissingCredential`] when neither the
/// environment variable nor any candidate file provides a key.
pub fn resolve_api_key() -> Result<String, CompletionError> {
    if let Ok(key) = env::var(API_KEY_VAR)
        && !key.trim().is_empty()
    {
        return Ok(key);
    }

    resolve_api_key_from_files(&candidate_env_paths()).ok_or(CompletionError::MissingCredential)
}

/// Candidate dotenv locations: the working directory, its parents two
/// levels up, and up to five ancestors of the working directory.
#[must_use]
pub fn candidate_env_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(ENV_FILE),
        Path::new("..").join(ENV_FILE),
        Path::new("../..").join(ENV_FILE),
    ];

    if let Ok(cwd) = env::current_dir() {
        let mut dir = cwd;
        for _ in 0..5 {
            paths.push(dir.join(ENV_FILE));
            if !dir.pop() {
                break;
            }
        }
    }

    paths
}

/// First key found across `paths`, in order.
#[must_use]
pub fn resolve_api_key_from_files(paths: &[PathBuf]) -> Option<String> {
    paths.iter().find_map(|path| read_api_key_from_file(path))
}

/// Read `OPENAI_API_KEY=value` from a dotenv-style file.
///
/// Blank lines and `#` comments are skipped; surrounding single or double
/// quotes are stripped from the value. An unreadable file yields `None`.
#[must_use]
pub fn read_api_key_from_file(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;

    for line in BufReader::new(file).lines() {
        let line = line.ok()?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(raw) = line.strip_prefix(API_KEY_PREFIX) {
            let value = raw.trim().trim_matches(|c| c == '"' || c == '\'');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }

    None
}
