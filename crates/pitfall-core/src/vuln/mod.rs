// SPDX-License-Identifier: Apache-2.0

//! Deliberately vulnerable demonstration modules.
//!
//! Each submodule is one isolated anti-pattern paired with its correction.
//! The modules share no state and do not depend on each other; the unsafe
//! halves exist to be flagged by [`crate::scan`] and walked through in
//! training sessions, never to be reused.

pub mod command_injection;
pub mod path_traversal;
pub mod sql_injection;
pub mod weak_crypto;

pub use command_injection::{ShellCommand, ping_command_safe, ping_command_vulnerable};
pub use path_traversal::{read_data_file_safe, read_data_file_vulnerable};
pub use sql_injection::{UserRecord, demo_database, lookup_user_safe, lookup_user_vulnerable};
pub use weak_crypto::{
    decrypt_safe, encrypt_safe, generate_key, hash_password_safe, hash_password_weak,
    predictable_key, verify_password, xor_decrypt, xor_encrypt,
};
