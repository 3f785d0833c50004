//! Asset filename generation for the upload endpoint.
//!
//! Client-supplied filenames are never trusted for storage: the server
//! generates a collision-resistant name and keeps only the original
//! extension.

use rand::distr::Alphanumeric;
use rand::Rng;

/// Length of the random token embedded in generated filenames.
const TOKEN_LEN: usize = 12;

/// Generate a storage filename for an uploaded asset.
///
/// Format: `<unix-millis>-<random alphanumeric token>.<ext>`, where `ext`
/// is the lowercased extension of the original filename (`bin` when the
/// original name has none).
pub fn unique_asset_filename(original: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let token: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_LEN)
        .map(char::from)
        .collect();
    let ext = extension_of(original);
    format!("{millis}-{token}.{ext}")
}

/// Extract a sane lowercase extension from a client-supplied filename.
fn extension_of(original: &str) -> String {
    original
        .rsplit('.')
        .next()
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= 10
                && *ext != original
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| "bin".to_string())
}
