// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 Pitfall Contributors

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let scanner = pitfall_core::scan::Scanner::new();
        let _ = scanner.scan_file(s, "fuzz_input.rs");
        let _ = scanner.scan_diff(s);
    }
});
