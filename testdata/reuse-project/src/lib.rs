/*
 * SPDX-FileCopyrightText: 2023 Bob <bob@example.com>
 * SPDX-License-Identifier: Apache-2.0 OR MIT
 * SPDX-FileContributor: Carol
 * SPDX-FileComment: <text>
 * Shared helpers for the widget.
 * </text>
 */

pub fn add(a: u32, b: u32) -> u32 {
    a + b
}
