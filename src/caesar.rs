//! Caesar cipher: fixed-offset substitution over the alphabet window.
//!
//! Every character of the message is shifted by the same integer key and
//! wrapped back into the window. Decryption applies the inverse shift.

use crate::alphabet::{self, wrap_into_window};
use crate::error::CipherError;

/// Encrypts a string with the Caesar cipher.
///
/// Each character is shifted `key` positions forward and wrapped modulo
/// the window size, so a shift past the top of the window lands back at
/// the bottom. Negative keys shift backwards.
///
/// # Parameters
/// - `plain_text`: Message to encrypt; every character must lie within
///   the alphabet window.
/// - `key`: Offset applied to each character.
///
/// # Returns
/// The ciphertext, same length as `plain_text` and entirely within the
/// alphabet window.
///
/// # Errors
/// Returns [`CipherError::TextOutOfBounds`] if any character of
/// `plain_text` falls outside the alphabet window.
///
/// # Examples
///
/// ```
/// use bellaso::caesar_encrypt;
///
/// assert_eq!(caesar_encrypt("HELLO", 3).unwrap(), "KHOOR");
/// ```
///
/// ```
/// use bellaso::caesar_encrypt;
///
/// // Lowercase letters are outside the supported window.
/// assert!(caesar_encrypt("hello", 3).is_err());
/// ```
pub fn caesar_encrypt(plain_text: &str, key: i32) -> Result<String, CipherError> {
    if !alphabet::is_in_bounds(plain_text) {
        return Err(CipherError::TextOutOfBounds);
    }
    Ok(plain_text
        .chars()
        .map(|c| wrap_into_window(c as i64 + key as i64))
        .collect())
}

/// Decrypts a string encrypted with [`caesar_encrypt`] under the same key.
///
/// No bounds validation is performed on the input: every character is
/// treated as a plain code point, shifted `key` positions backward, and
/// wrapped into the alphabet window.
///
/// # Parameters
/// - `cipher_text`: Message to decrypt.
/// - `key`: Offset that was used to encrypt.
///
/// # Returns
/// The plaintext, same length as `cipher_text`.
///
/// # Examples
///
/// ```
/// use bellaso::caesar_decrypt;
///
/// assert_eq!(caesar_decrypt("KHOOR", 3), "HELLO");
/// ```
pub fn caesar_decrypt(cipher_text: &str, key: i32) -> String {
    cipher_text
        .chars()
        .map(|c| wrap_into_window(c as i64 - key as i64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(caesar_encrypt("HELLO", 3).unwrap(), "KHOOR");
    }

    #[test]
    fn test_decrypt_known_vector() {
        assert_eq!(caesar_decrypt("KHOOR", 3), "HELLO");
    }

    #[test]
    fn test_encrypt_wraps_at_upper_edge() {
        // '_' is the top of the window; one step forward wraps to ' '
        assert_eq!(caesar_encrypt("_", 1).unwrap(), " ");
    }

    #[test]
    fn test_decrypt_wraps_at_lower_edge() {
        assert_eq!(caesar_decrypt(" ", 1), "_");
    }

    #[test]
    fn test_zero_key_is_identity() {
        assert_eq!(caesar_encrypt("ABC XYZ_123", 0).unwrap(), "ABC XYZ_123");
        assert_eq!(caesar_decrypt("ABC XYZ_123", 0), "ABC XYZ_123");
    }

    #[test]
    fn test_key_multiple_of_window_is_identity() {
        assert_eq!(caesar_encrypt("HELLO", 64).unwrap(), "HELLO");
        assert_eq!(caesar_encrypt("HELLO", -64).unwrap(), "HELLO");
        assert_eq!(caesar_encrypt("HELLO", 640).unwrap(), "HELLO");
    }

    #[test]
    fn test_negative_key_inverts_positive() {
        assert_eq!(caesar_encrypt("HELLO", -3).unwrap(), caesar_decrypt("HELLO", 3));
    }

    #[test]
    fn test_roundtrip_multiple_keys() {
        let message = "THE QUICK BROWN FOX 0123456789 _";
        for key in [-1000, -64, -1, 0, 1, 3, 63, 64, 65, 999, 1000] {
            let encrypted = caesar_encrypt(message, key).unwrap();
            assert_eq!(
                caesar_decrypt(&encrypted, key),
                message,
                "roundtrip failed for key={}",
                key
            );
        }
    }

    #[test]
    fn test_encrypt_rejects_out_of_bounds() {
        assert_eq!(
            caesar_encrypt("hello", 3),
            Err(CipherError::TextOutOfBounds)
        );
        assert_eq!(
            caesar_encrypt("OK\nOK", 3),
            Err(CipherError::TextOutOfBounds)
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(caesar_encrypt("", 17).unwrap(), "");
        assert_eq!(caesar_decrypt("", 17), "");
    }

    #[test]
    fn test_length_preserved() {
        let message = "LENGTH CHECK 42";
        let encrypted = caesar_encrypt(message, 29).unwrap();
        assert_eq!(encrypted.len(), message.len());
        assert_eq!(caesar_decrypt(&encrypted, 29).len(), message.len());
    }

    #[test]
    fn test_decrypt_accepts_out_of_window_input() {
        // Decrypt performs no bounds validation; out-of-window characters
        // are wrapped arithmetically. 'h' (0x68) - 3 = 0x65, wraps to 0x25.
        assert_eq!(caesar_decrypt("h", 3), "%");
    }
}
