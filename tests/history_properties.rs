// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use proptest::prelude::*;

use tstool_session::history::store::{format_history, parse_history, push_entry};

fn entry() -> impl Strategy<Value = String> {
    prop_oneof![
        "/[a-z]{1,6}\\.tstool",
        Just(String::new()),
        Just("   ".to_string()),
        "#[a-z ]{0,8}",
    ]
}

proptest! {
    #[test]
    fn pushed_path_is_first_and_unique(
        history in prop::collection::vec(entry(), 0..40),
        path in "/[a-z]{1,6}\\.tstool",
        max in 1usize..30,
    ) {
        let updated = push_entry(history, &path, max);
        prop_assert_eq!(&updated[0], &path);
        prop_assert_eq!(updated.iter().filter(|e| **e == path).count(), 1);
    }

    #[test]
    fn pushed_history_respects_max(
        history in prop::collection::vec(entry(), 0..200),
        path in "/[a-z]{1,6}\\.tstool",
        max in 1usize..120,
    ) {
        let updated = push_entry(history, &path, max);
        prop_assert!(updated.len() <= max);
    }

    #[test]
    fn pushed_history_has_no_comments_or_blanks(
        history in prop::collection::vec(entry(), 0..40),
        path in "/[a-z]{1,6}\\.tstool",
    ) {
        let updated = push_entry(history, &path, 100);
        for e in &updated {
            prop_assert!(!e.starts_with('#'));
            prop_assert!(!e.trim().is_empty());
        }
    }

    #[test]
    fn parsed_history_has_no_comments_or_blanks(lines in prop::collection::vec(entry(), 0..40)) {
        let content = lines.join("\n");
        for e in parse_history(&content) {
            prop_assert!(!e.starts_with('#'));
            prop_assert!(!e.trim().is_empty());
        }
    }

    #[test]
    fn written_history_reads_back(
        entries in prop::collection::vec("/[a-z]{1,6}\\.tstool", 0..20),
    ) {
        prop_assert_eq!(parse_history(&format_history(&entries)), entries);
    }
}
