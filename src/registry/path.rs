/// Splits a dotted path into its segments.
///
/// Rejects empty paths and empty segments (`"a..b"`, leading/trailing dots)
/// so traversal code never sees a blank property name.
pub fn segments(path: &str) -> Result<Vec<&str>, String> {
    if path.is_empty() {
        return Err("empty path".to_string());
    }
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(format!("malformed path: {}", path));
    }
    Ok(parts)
}
