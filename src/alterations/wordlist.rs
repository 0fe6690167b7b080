//! Seed vocabulary for the word caches

use regex::Regex;
use std::path::Path;

use crate::error::{AlterationError, Result};

/// Words commonly found at either end of hostnames
pub const DEFAULT_WORDS: &[&str] = &[
    // Environments
    "dev", "development", "test", "testing", "qa", "uat", "stage", "staging",
    "prod", "production", "preprod", "sandbox", "demo", "beta", "alpha", "int",
    "internal", "external", "old", "new", "legacy", "backup", "bak", "tmp",

    // Services
    "api", "app", "apps", "admin", "auth", "sso", "login", "portal", "web",
    "www", "mail", "smtp", "imap", "pop", "mx", "ns", "dns", "vpn", "gw",
    "gateway", "proxy", "cdn", "static", "assets", "img", "media", "files",
    "docs", "wiki", "blog", "shop", "store", "status", "support", "help",

    // Infrastructure
    "db", "sql", "mysql", "redis", "cache", "queue", "kafka", "search",
    "es", "elastic", "ldap", "ftp", "sftp", "git", "gitlab", "jenkins", "ci",
    "cd", "build", "deploy", "k8s", "kube", "docker", "registry", "node",
    "edge", "lb", "origin", "monitor", "metrics", "grafana", "logs", "ops",

    // Regions
    "us", "eu", "asia", "east", "west", "north", "south", "central", "uk",
    "de", "fr", "jp", "au", "ca", "global", "local",

    // Sequence markers
    "1", "2", "3", "01", "02", "03", "v1", "v2", "a", "b", "primary",
    "secondary", "master", "slave", "main", "mirror",
];

/// The built-in vocabulary as owned strings
pub fn default_wordlist() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Load a vocabulary file: one word per line, `#` starts a comment.
///
/// Words are lowercased; anything outside letters, digits and hyphens is
/// skipped with a warning.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AlterationError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let ldh = Regex::new(r"^[a-z0-9-]+$").map_err(|e| AlterationError::internal(e.to_string()))?;

    let mut words = Vec::new();
    let mut skipped = 0usize;
    for line in content.lines() {
        let word = line.split('#').next().unwrap_or_default().trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        if ldh.is_match(&word) {
            words.push(word);
        } else {
            skipped += 1;
        }
    }

    if skipped > 0 {
        tracing::warn!(
            path = %path.display(),
            skipped = %skipped,
            "Skipped wordlist entries with non-LDH characters"
        );
    }
    tracing::debug!(path = %path.display(), words = %words.len(), "Loaded wordlist");

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_words_are_ldh() {
        let words = default_wordlist();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        assert!(words
            .iter()
            .all(|w| w.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')));
    }

    #[test]
    fn test_load_wordlist() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# alteration words").unwrap();
        writeln!(file, "API").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  staging  # trailing comment").unwrap();
        writeln!(file, "us-east").unwrap();
        writeln!(file, "bad_word").unwrap();
        writeln!(file, "caf\u{e9}").unwrap();

        let words = load_wordlist(file.path()).unwrap();
        assert_eq!(words, vec!["api", "staging", "us-east"]);
    }

    #[test]
    fn test_load_missing_wordlist() {
        let err = load_wordlist(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, AlterationError::Io { path: Some(_), .. }));
    }
}
