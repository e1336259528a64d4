//! Property tests over generated input.

use bbmd_babel::{convert, has_markup};
use proptest::prelude::*;

proptest! {
    #[test]
    fn plain_text_only_gets_trimmed(text in "[^\\[\\]]*") {
        prop_assert_eq!(convert(&text), text.trim());
    }

    #[test]
    fn plain_text_has_no_markup(text in "[^\\[\\]]*") {
        prop_assert!(!has_markup(&text));
    }

    #[test]
    fn bold_wraps_any_plain_body(body in "[a-zA-Z0-9 .,!?]{0,40}") {
        prop_assert_eq!(convert(&format!("[b]{body}[/b]")), format!("**{body}**"));
    }
}
