use crate::utils::error::Result;
use std::io::Write;

pub const DEFAULT_NAME: &str = "World";

/// Formats the greeting line. A missing or empty name falls back to
/// [`DEFAULT_NAME`].
pub fn greeting(name: Option<&str>) -> String {
    let name = match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_NAME,
    };
    format!("Hello, {}!", name)
}

/// Writes one greeting line to `out`.
pub fn greet<W: Write>(out: &mut W, name: Option<&str>) -> Result<()> {
    writeln!(out, "{}", greeting(name))?;
    Ok(())
}
