// SPDX-License-Identifier: Apache-2.0

//! Weak hashing and ad-hoc XOR "encryption" (CWE-327, CWE-321, CWE-916).
//!
//! WARNING: the `_weak`, `xor_*`, and `predictable_key` functions are
//! intentionally broken. They exist to be flagged by the scanner and
//! demonstrated in training sessions. DO NOT use them to protect anything.
//! Each one is paired with the vetted alternative below it.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{XChaCha20Poly1305, XNonce};
use md5::{Digest, Md5};
use rand::RngCore;
use rand::rngs::OsRng;

use argon2::Argon2;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::error::PitfallError;

/// Symmetric key length for the safe cipher.
pub const KEY_LEN: usize = 32;

/// XChaCha20-Poly1305 nonce length, prepended to every sealed blob.
const NONCE_LEN: usize = 24;

// ---------------------------------------------------------------------------
// Weak side
// ---------------------------------------------------------------------------

/// Hashes a password with MD5.
///
/// MD5 is fast by design and has known collision attacks, which makes it
/// unsuitable for password storage: an attacker with the digest can brute
/// force candidates at billions of guesses per second.
#[must_use]
pub fn hash_password_weak(password: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// "Encrypts" data by XOR-ing it against a repeating key, base64-encoded.
///
/// Matches the classic teaching example byte for byte: ciphertext is the
/// plaintext XOR the key repeated to length, then base64. Known plaintext
/// recovers the key directly; key reuse leaks plaintext XOR plaintext.
#[must_use]
pub fn xor_encrypt(data: &[u8], key: &[u8]) -> String {
    STANDARD.encode(xor_with_key(data, key))
}

/// Reverses [`xor_encrypt`], demonstrating that the scheme has no secrecy
/// margin: decryption is the same operation as encryption.
pub fn xor_decrypt(blob: &str, key: &[u8]) -> Result<Vec<u8>, PitfallError> {
    let bytes = STANDARD.decode(blob).map_err(|e| PitfallError::Crypto {
        message: format!("Invalid base64 ciphertext: {e}"),
    })?;
    Ok(xor_with_key(&bytes, key))
}

fn xor_with_key(data: &[u8], key: &[u8]) -> Vec<u8> {
    assert!(!key.is_empty(), "XOR key must not be empty");
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % key.len()])
        .collect()
}

/// Returns the hardcoded key the original example shipped with.
///
/// Every deployment of the "encryption" above shares this key, so one
/// recovered key breaks all of them.
#[must_use]
pub fn predictable_key() -> &'static str {
    "fixed_key_12345"
}

// ---------------------------------------------------------------------------
// Safe side
// ---------------------------------------------------------------------------

/// Hashes a password with Argon2id and a random salt.
///
/// Returns the PHC string (`$argon2id$...`), which embeds the salt and cost
/// parameters needed by [`verify_password`].
pub fn hash_password_safe(password: &str) -> Result<String, PitfallError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verifies a password against a PHC string produced by [`hash_password_safe`].
pub fn verify_password(password: &str, phc: &str) -> Result<bool, PitfallError> {
    let parsed = PasswordHash::new(phc)?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Generates a random 256-bit key from the OS CSPRNG.
#[must_use]
pub fn generate_key() -> [u8; KEY_LEN] {
    let mut key = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut key);
    key
}

/// Encrypts with XChaCha20-Poly1305.
///
/// Blob layout: 24-byte random nonce, then ciphertext with the
/// authentication tag. A fresh nonce per call makes key reuse safe.
pub fn encrypt_safe(key: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>, PitfallError> {
    let cipher = XChaCha20Poly1305::new(key.into());

    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher.encrypt(XNonce::from_slice(&nonce), plaintext)?;

    let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);
    Ok(blob)
}

/// Decrypts a blob produced by [`encrypt_safe`].
///
/// Fails on a wrong key or any modification of nonce or ciphertext; the
/// authentication tag covers both.
pub fn decrypt_safe(key: &[u8; KEY_LEN], blob: &[u8]) -> Result<Vec<u8>, PitfallError> {
    if blob.len() < NONCE_LEN {
        return Err(PitfallError::Crypto {
            message: format!("Sealed blob too short: {} bytes", blob.len()),
        });
    }

    let (nonce, ciphertext) = blob.split_at(NONCE_LEN);
    let cipher = XChaCha20Poly1305::new(key.into());
    let plaintext = cipher.decrypt(XNonce::from_slice(nonce), ciphertext)?;
    Ok(plaintext)
}
