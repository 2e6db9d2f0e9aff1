//! Property-based tests for action classification.

use treadmill_classifier::{ActionClassifier, ActionPattern};

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn contains_pattern_matches_any_embedding(
            prefix in "[a-zA-Z/]{0,8}",
            word in "[a-zA-Z]{1,8}",
            suffix in "[a-zA-Z/]{0,8}"
        ) {
            let classifier = ActionClassifier::new([format!("*{word}*")]);
            let name = format!("{prefix}{}{suffix}", word.to_uppercase());
            prop_assert!(classifier.classify(&name));
        }

        #[test]
        fn exact_pattern_matches_only_itself(word in "[a-z]{1,8}", extra in "[a-z]{1,4}") {
            let classifier = ActionClassifier::new([word.clone()]);
            prop_assert!(classifier.classify(&word));
            let longer = format!("{word}{extra}");
            prop_assert!(!classifier.classify(&longer));
        }

        #[test]
        fn lone_star_matches_everything(name in ".{0,32}") {
            let classifier = ActionClassifier::new(["*"]);
            prop_assert!(classifier.classify(&name));
        }
    }
}

#[cfg(test)]
mod quickcheck_tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn classification_is_deterministic(name: String) -> bool {
        let classifier = ActionClassifier::default();
        classifier.classify(&name) == classifier.classify(&name)
    }

    #[quickcheck]
    fn empty_pattern_never_matches(name: String) -> bool {
        ActionPattern::parse("").is_none() && !ActionClassifier::new([""]).classify(&name)
    }
}
