//! Classical substitution ciphers over a restricted ASCII alphabet.
//!
//! Implements two historical text ciphers operating on the 64-symbol
//! window from space (0x20) through underscore (0x5F):
//!
//! ```text
//! alphabet  (window constants, bounds check, wrap-around adjustment)
//!     ↑ shared by
//! caesar    (fixed offset: every character shifted by the same key)
//! bellaso   (polyalphabetic: per-position offsets from a repeating keyword)
//! ```
//!
//! Encryption validates its input against the alphabet window and fails
//! with a typed error on out-of-window characters. Decryption never
//! fails: any input character is treated as a plain code point and
//! wrapped back into the window arithmetically. Every transform preserves
//! length, mapping characters one to one.
//!
//! These are educational/historical ciphers and provide no real secrecy.
//!
//! # Examples
//!
//! Caesar, one shared offset:
//!
//! ```
//! use bellaso::{caesar_decrypt, caesar_encrypt};
//!
//! let encrypted = caesar_encrypt("HELLO", 3).unwrap();
//! assert_eq!(encrypted, "KHOOR");
//! assert_eq!(caesar_decrypt(&encrypted, 3), "HELLO");
//! ```
//!
//! Bellaso, a repeating keyword of offsets:
//!
//! ```
//! use bellaso::{bellaso_decrypt, bellaso_encrypt};
//!
//! let encrypted = bellaso_encrypt("ATTACK AT DAWN", "LEMON").unwrap();
//! assert_eq!(bellaso_decrypt(&encrypted, "LEMON"), "ATTACK AT DAWN");
//! ```

#![deny(clippy::all)]

pub mod error;

mod alphabet;
mod bellaso;
mod caesar;

pub use alphabet::{LOWER_RANGE, RANGE, UPPER_RANGE, is_in_bounds};
pub use bellaso::{bellaso_decrypt, bellaso_encrypt};
pub use caesar::{caesar_decrypt, caesar_encrypt};
