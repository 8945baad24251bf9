//! Display formatting for view models.

pub mod decimal;
pub mod num;

/// Shorten a long address to `head...tail` (e.g. `EQB3...TiUt`).
///
/// Addresses no longer than `head + tail` characters are returned unchanged.
pub fn shorten_address(address: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= head + tail {
        return address.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{start}...{end}")
}
