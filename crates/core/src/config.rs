use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default location of the deployment env file.
pub const ENV_FILE: &str = "/app/.env";

/// Reads `KEY=VALUE` lines from `path`. Comment lines and lines without `=`
/// are skipped; values keep any further `=` characters. A missing or
/// unreadable file yields an empty map and the run proceeds.
///
/// The loaded values are informational only; the request target stays the
/// hardcoded local URL.
pub fn load_env_file(path: &Path) -> HashMap<String, String> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            println!("env file {} not loaded: {e}", path.display());
            tracing::debug!("env file {} not loaded: {e}", path.display());
            return HashMap::new();
        }
    };

    let mut vars = HashMap::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    vars
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parses_key_value_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "# deployment settings").unwrap();
        writeln!(file, "MONGO_URL=mongodb://localhost:27017/arenda").unwrap();
        writeln!(file, "NEXT_PUBLIC_BASE_URL=http://localhost:3000").unwrap();
        writeln!(file, "not a pair").unwrap();

        let vars = load_env_file(file.path());
        assert_eq!(vars.len(), 2);
        assert_eq!(
            vars.get("MONGO_URL").map(String::as_str),
            Some("mongodb://localhost:27017/arenda")
        );
    }

    #[test]
    fn test_value_keeps_extra_equals_signs() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "QUERY=a=b=c").unwrap();

        let vars = load_env_file(file.path());
        assert_eq!(vars.get("QUERY").map(String::as_str), Some("a=b=c"));
    }

    #[test]
    fn test_missing_file_yields_empty_map() {
        let vars = load_env_file(Path::new("/nonexistent/.env"));
        assert!(vars.is_empty());
    }
}
