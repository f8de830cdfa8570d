use std::path::{Path, PathBuf};

/// Code used whenever the server log cannot be scraped.
pub const FALLBACK_CODE: &str = "123456";

/// Log the mock SMS sender of the server under test writes to.
pub const SERVER_LOG: &str = "/var/log/supervisor/nextjs.out.log";

const TAIL_LINES: usize = 10;

/// Source of one-time SMS verification codes for a phone number. Infallible:
/// implementations fall back to a fixed code rather than fail the flow.
pub trait CodeSource {
    fn code_for(&self, phone: &str) -> String;
}

/// Recovers the mock code the server prints to its own log.
///
/// Best effort and racy by nature: only the last [`TAIL_LINES`] lines are
/// considered, and any miss (missing file, absent marker, empty token) yields
/// [`FALLBACK_CODE`].
#[derive(Debug)]
pub struct LogScrapeSource {
    log_path: PathBuf,
}

impl LogScrapeSource {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }
}

impl Default for LogScrapeSource {
    fn default() -> Self {
        Self::new(SERVER_LOG)
    }
}

impl CodeSource for LogScrapeSource {
    fn code_for(&self, phone: &str) -> String {
        match scrape_code(&self.log_path, phone) {
            Some(code) => code,
            None => {
                tracing::debug!(
                    "no SMS code for {phone} in {}, using fallback",
                    self.log_path.display()
                );
                FALLBACK_CODE.to_string()
            }
        }
    }
}

fn scrape_code(log_path: &Path, phone: &str) -> Option<String> {
    let contents = std::fs::read_to_string(log_path).ok()?;
    let marker = format!("SMS код для {phone}:");
    let lines: Vec<&str> = contents.lines().collect();
    let tail = &lines[lines.len().saturating_sub(TAIL_LINES)..];

    for line in tail.iter().rev() {
        if line.contains(&marker) {
            // The code is the token after the last colon on the line.
            let code = line.rsplit(':').next()?.trim();
            if code.is_empty() {
                return None;
            }
            return Some(code.to_string());
        }
    }
    None
}

/// Fixed code for deterministic runs; the test backdoor.
#[derive(Debug)]
pub struct StaticCodeSource(pub String);

impl CodeSource for StaticCodeSource {
    fn code_for(&self, _phone: &str) -> String {
        self.0.clone()
    }
}
