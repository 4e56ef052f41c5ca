// SPDX-License-Identifier: Apache-2.0

//! Test fixture with intentional vulnerabilities across pattern categories.
//!
//! WARNING: This file contains intentionally vulnerable code for testing
//! purposes. DO NOT use these patterns in production code.

#![allow(dead_code)]

/// SQL injection via format interpolation (CWE-89).
fn find_account(table: &str, name: &str) {
    let query = format!("SELECT * FROM {table} WHERE name = '{name}'");
    execute(query);
}

/// Weak hashing (CWE-327).
fn digest_credentials(password: &str) {
    let weak = md5(password);
    let also_weak = sha1(password);
    store(weak, also_weak);
}

/// Shell interpolation (CWE-78).
fn list_logs(pattern: &str) {
    let output = std::process::Command::new("sh")
        .arg("-c")
        .arg(format!("ls /var/log/{pattern}"))
        .output();
    drop(output);
}

/// Path traversal (CWE-22).
fn read_template() -> String {
    load("../../etc/passwd")
}

fn execute(_query: String) {}
fn store(_a: String, _b: String) {}
fn md5(_data: &str) -> String {
    String::new()
}
fn sha1(_data: &str) -> String {
    String::new()
}
fn load(_path: &str) -> String {
    String::new()
}
