//! ID prefixes and random token generation.
//!
//! Entity ids are `<prefix>-<12 hex chars>`. Share tokens are 9 lowercase
//! base-36 characters and only exist to build a shareable URL.

use chrono::Utc;

pub const PREFIX_CHECKLIST: &str = "chk";
pub const PREFIX_ITEM: &str = "itm";
pub const PREFIX_MARKER: &str = "mrk";
pub const PREFIX_PLACE: &str = "plc";
pub const PREFIX_CONTACT: &str = "ctc";
pub const PREFIX_MESSAGE: &str = "msg";
pub const PREFIX_LOCATION: &str = "loc";
pub const PREFIX_DOCUMENT: &str = "doc";
pub const PREFIX_ITINERARY: &str = "itn";
pub const PREFIX_NOTIFICATION: &str = "ntf";
pub const PREFIX_SESSION: &str = "ses";

/// Length of a share token.
pub const SHARE_TOKEN_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a new prefixed id, e.g. `chk-3f9a0c12b4de`.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let bytes: [u8; 6] = random_bytes();
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{hex}")
}

/// Generate a checklist share token.
#[must_use]
pub fn share_token() -> String {
    let bytes: [u8; SHARE_TOKEN_LEN] = random_bytes();
    bytes
        .iter()
        .map(|b| char::from(BASE36[usize::from(*b) % BASE36.len()]))
        .collect()
}

fn random_bytes<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    if getrandom::fill(&mut buf).is_err() {
        // No OS entropy: fall back to clock bits. Tokens only need to be
        // unique within one store, not unpredictable.
        let nanos = Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .to_le_bytes();
        for (index, byte) in buf.iter_mut().enumerate() {
            *byte = nanos[index % nanos.len()].rotate_left(u32::try_from(index % 8).unwrap_or(0));
        }
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_id_has_prefix_and_hex_suffix() {
        let id = generate_id(PREFIX_CHECKLIST);
        assert!(id.starts_with("chk-"));
        let suffix = &id[4..];
        assert_eq!(suffix.len(), 12);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn ids_do_not_collide_in_a_burst() {
        let ids: HashSet<String> = (0..1000).map(|_| generate_id(PREFIX_ITEM)).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn share_token_is_lowercase_base36() {
        let token = share_token();
        assert_eq!(token.len(), SHARE_TOKEN_LEN);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }
}
