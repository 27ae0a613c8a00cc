use sha2::{Digest, Sha256};

/// Stable display color for a user: the first three digest bytes of the
/// user id become the rgb channels. The same user always gets the same
/// color, across processes and reloads.
pub fn user_color(user_id: &str) -> String {
    let digest = Sha256::digest(user_id.as_bytes());
    format!("rgba({}, {}, {}, 0.5)", digest[0], digest[1], digest[2])
}
