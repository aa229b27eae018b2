//! Signed-order verification.
//!
//! A completed payment arrives with an `order_id`, a `payment_id`, and a
//! signature computed by the gateway as
//! `HMAC-SHA256(secret, "<order_id>|<payment_id>")`, hex-encoded.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verify a gateway payment signature.
///
/// The comparison is constant-time. Malformed hex and wrong-length
/// signatures verify as `false`; this never errors.
pub fn verify_order_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    let Ok(provided) = hex::decode(signature) else {
        return false;
    };
    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    mac.verify_slice(&provided).is_ok()
}

/// Sign an order/payment pair the way the gateway does.
///
/// Counterpart of [`verify_order_signature`], used by gateway stand-ins
/// and tests.
pub fn sign_order(order_id: &str, payment_id: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "gateway-test-secret";

    #[test]
    fn signed_pair_verifies() {
        let signature = sign_order("order_1", "pay_1", SECRET);
        assert!(verify_order_signature("order_1", "pay_1", &signature, SECRET));
    }

    #[test]
    fn mismatched_ids_reject() {
        let signature = sign_order("order_1", "pay_1", SECRET);
        assert!(!verify_order_signature("order_2", "pay_1", &signature, SECRET));
        assert!(!verify_order_signature("order_1", "pay_2", &signature, SECRET));
    }

    #[test]
    fn wrong_secret_rejects() {
        let signature = sign_order("order_1", "pay_1", "another secret");
        assert!(!verify_order_signature("order_1", "pay_1", &signature, SECRET));
    }

    #[test]
    fn malformed_signature_rejects() {
        assert!(!verify_order_signature("order_1", "pay_1", "", SECRET));
        assert!(!verify_order_signature("order_1", "pay_1", "zz-not-hex", SECRET));
        assert!(!verify_order_signature("order_1", "pay_1", "deadbeef", SECRET));
    }

    #[test]
    fn separator_prevents_id_splicing() {
        // "ab" + "|" + "c" must not collide with "a" + "|" + "bc".
        let signature = sign_order("ab", "c", SECRET);
        assert!(!verify_order_signature("a", "bc", &signature, SECRET));
    }
}
