// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn paint_wraps_text_in_ansi_256_codes() {
    assert_eq!(paint(codes::HEADER, "job", true), "\x1b[38;5;74mjob\x1b[0m");
}

#[test]
fn paint_disabled_returns_plain_text() {
    assert_eq!(paint(codes::MUTED, "-", false), "-");
}
