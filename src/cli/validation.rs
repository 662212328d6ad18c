//! CLI argument validation functions
//!
//! Value parsers for arguments whose rules go beyond what clap checks.

use std::fs;
use std::path::PathBuf;

use crate::utils::api_key::{MAX_API_KEY_COUNT, MIN_API_KEY_LENGTH};

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a file path exists, is a file and can be opened
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate host address format (basic validation)
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(' ') {
        return Err("Host address cannot contain spaces".to_string());
    }

    if host == "localhost" || host == "0.0.0.0" || host.starts_with("127.") {
        return Ok(host.to_string());
    }

    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        let parts: Vec<&str> = host.split('.').collect();
        if parts.len() == 4 {
            if parts.iter().any(|part| part.parse::<u8>().is_err()) {
                return Err(format!("Invalid IPv4 address format: '{}'", host_str));
            }
            return Ok(host.to_string());
        }
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    Ok(host.to_string())
}

/// Validate the length of generated API keys
pub fn validate_api_key_length(length_str: &str) -> Result<usize, String> {
    let length: usize = length_str.parse().map_err(|_| {
        format!(
            "Key length must be a positive number, got: '{}'",
            length_str
        )
    })?;

    if length < MIN_API_KEY_LENGTH {
        return Err(format!(
            "Key length must be at least {} characters",
            MIN_API_KEY_LENGTH
        ));
    }

    Ok(length)
}

/// Validate how many API keys to generate
pub fn validate_api_key_count(count_str: &str) -> Result<usize, String> {
    let count: usize = count_str
        .parse()
        .map_err(|_| format!("Key count must be a positive number, got: '{}'", count_str))?;

    if count == 0 || count > MAX_API_KEY_COUNT {
        return Err(format!(
            "Key count must be between 1 and {}",
            MAX_API_KEY_COUNT
        ));
    }

    Ok(count)
}
