//! Text of the forwarded message
//!
//! Discord caps message content at 2000 characters; the attribution prefix
//! can push a maximal original over that limit, so the combined text is
//! truncated. Lengths are counted in characters, not bytes, to handle
//! multibyte content.

use tracing::warn;

/// Discord's message content limit
const MAX_LEN: usize = 2000;

/// Build the content of a forwarded message
///
/// Prefixes the original text with the author's display name, then truncates
/// to Discord's 2000 character limit (1997 chars + "..." when over).
pub fn forward_content(display_name: &str, content: &str) -> String {
    let combined = format!("**{}** said: {}", display_name, content);

    let char_count = combined.chars().count();
    if char_count <= MAX_LEN {
        return combined;
    }

    let truncated: String = combined.chars().take(MAX_LEN - 3).collect();
    let result = format!("{}...", truncated);

    warn!(
        original_len = char_count,
        truncated_len = result.chars().count(),
        "Forwarded content exceeds 2000 chars, truncated"
    );

    result
}
