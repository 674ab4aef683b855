//! Instagram webhook signature verification.
//!
//! Meta signs webhook deliveries with HMAC-SHA256 over the raw request
//! body and sends the digest in the `X-Hub-Signature-256` header as
//! `sha256=<hex digest>`.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

type HmacSha256 = Hmac<Sha256>;

/// Verify an `X-Hub-Signature-256` header value against the raw request body.
///
/// The digest must be computed over the exact bytes as received: parsing
/// and re-serializing the JSON can reorder keys or change whitespace and
/// break the comparison.
///
/// Returns `true` only when the header matches `sha256=<hex>` of the
/// payload. A missing header, empty secret, or mismatch returns `false`.
pub fn verify_webhook_signature(
    app_secret: &str,
    payload: &[u8],
    signature_header: Option<&str>,
) -> bool {
    let header = match signature_header {
        Some(h) => h,
        None => {
            warn!("webhook_signature_missing");
            return false;
        }
    };

    if app_secret.is_empty() {
        warn!("webhook_signature_no_secret");
        return false;
    }

    let mut mac = match HmacSha256::new_from_slice(app_secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => {
            warn!("webhook_signature_invalid_key");
            return false;
        }
    };

    mac.update(payload);

    let expected = format!("sha256={}", hex::encode(mac.finalize().into_bytes()));

    // Constant-time comparison to prevent timing attacks
    let valid = constant_time_compare(&expected, header);

    if !valid {
        warn!(
            header_length = header.len(),
            has_sha256_prefix = header.starts_with("sha256="),
            "webhook_signature_mismatch"
        );
    }

    valid
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
