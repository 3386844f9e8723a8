//! Bellaso cipher: polyalphabetic keyword-offset substitution.
//!
//! Each character of the message is shifted by the code point of the
//! corresponding keyword character and wrapped into the alphabet window.
//! A keyword shorter than the message is stretched by repeating its own
//! characters until it covers the full message length.

use crate::alphabet::{self, wrap_into_window};
use crate::error::CipherError;

/// Extends `keyword` until it is at least `target_len` characters long by
/// appending its own characters one at a time, reading from the growing
/// sequence. For any non-empty keyword this reproduces plain cyclic
/// repetition of the original keyword, since positions past the original
/// length were themselves copied from earlier positions.
///
/// # Panics
/// Panics if `keyword` is empty and `target_len > 0`.
fn stretch_keyword(keyword: &str, target_len: usize) -> Vec<char> {
    let mut key: Vec<char> = keyword.chars().collect();
    assert!(
        !key.is_empty() || target_len == 0,
        "keyword must not be empty"
    );
    let mut i = 0;
    while key.len() < target_len {
        key.push(key[i]);
        i += 1;
    }
    key
}

/// Encrypts a string with the Bellaso cipher.
///
/// The keyword is stretched to the message length, then each message
/// character is shifted forward by the code point of the keyword character
/// at the same position and wrapped into the alphabet window.
///
/// # Parameters
/// - `plain_text`: Message to encrypt; every character must lie within
///   the alphabet window.
/// - `keyword`: Per-position offsets, repeated as needed.
///
/// # Returns
/// The ciphertext, same length as `plain_text` and entirely within the
/// alphabet window.
///
/// # Errors
/// Returns [`CipherError::TextOutOfBounds`] if any character of
/// `plain_text` falls outside the alphabet window.
///
/// # Panics
/// Panics if `keyword` is empty and `plain_text` is not.
///
/// # Examples
///
/// ```
/// use bellaso::bellaso_encrypt;
///
/// assert_eq!(bellaso_encrypt("HI", "KEY").unwrap(), "SN");
/// ```
///
/// ```
/// use bellaso::bellaso_encrypt;
///
/// assert!(bellaso_encrypt("hi", "KEY").is_err());
/// ```
pub fn bellaso_encrypt(plain_text: &str, keyword: &str) -> Result<String, CipherError> {
    if !alphabet::is_in_bounds(plain_text) {
        return Err(CipherError::TextOutOfBounds);
    }
    let message: Vec<char> = plain_text.chars().collect();
    let key = stretch_keyword(keyword, message.len());
    Ok(message
        .iter()
        .zip(&key)
        .map(|(&c, &k)| wrap_into_window(c as i64 + k as i64))
        .collect())
}

/// Decrypts a string encrypted with [`bellaso_encrypt`] under the same
/// keyword.
///
/// The keyword is stretched with the same algorithm as encryption and its
/// stretched length defines the offset cycle. No bounds validation is
/// performed on the input: every character is treated as a plain code
/// point, shifted backward, and wrapped into the alphabet window.
///
/// # Parameters
/// - `cipher_text`: Message to decrypt.
/// - `keyword`: The keyword that was used to encrypt.
///
/// # Returns
/// The plaintext, same length as `cipher_text`.
///
/// # Panics
/// Panics if `keyword` is empty and `cipher_text` is not.
///
/// # Examples
///
/// ```
/// use bellaso::bellaso_decrypt;
///
/// assert_eq!(bellaso_decrypt("SN", "KEY"), "HI");
/// ```
pub fn bellaso_decrypt(cipher_text: &str, keyword: &str) -> String {
    let message: Vec<char> = cipher_text.chars().collect();
    let key = stretch_keyword(keyword, message.len());
    message
        .iter()
        .enumerate()
        .map(|(i, &c)| wrap_into_window(c as i64 - key[i % key.len()] as i64))
        .collect()
}
