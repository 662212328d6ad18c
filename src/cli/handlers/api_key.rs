//! Generate-api-key command handler

use std::io::Write;

use crate::error::AppResult;
use crate::utils::api_key::generate_api_keys;

/// Prints freshly generated SSO API keys, one per line.
pub struct ApiKeyCommandHandler {
    length: usize,
    count: usize,
}

impl ApiKeyCommandHandler {
    pub fn new(length: usize, count: usize) -> Self {
        Self { length, count }
    }

    pub fn execute(&self) -> AppResult<()> {
        let stdout = std::io::stdout();
        self.write_keys(&mut stdout.lock())
    }

    fn write_keys<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for key in generate_api_keys(self.length, self.count) {
            writeln!(out, "{}", key).map_err(anyhow::Error::from)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_one_key_per_line() {
        let mut out = Vec::new();
        ApiKeyCommandHandler::new(24, 3).write_keys(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let keys: Vec<&str> = text.lines().collect();
        assert_eq!(keys.len(), 3);
        for key in keys {
            assert_eq!(key.len(), 24);
            assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
