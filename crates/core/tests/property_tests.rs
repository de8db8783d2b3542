use chars_counter_core::{
    CountRequest, count_chars, count_chars_in_range, count_chars_with_limit,
};
use proptest::prelude::*;

fn naive(text: &str, chars: &[char]) -> usize {
    chars
        .iter()
        .map(|&c| text.chars().filter(|&ch| ch == c).count())
        .sum()
}

proptest! {
    #[test]
    fn test_single_char_counts_exact_occurrences(
        text in "[abc ]{0,200}",
        target in prop::sample::select(vec!['a', 'b', 'c', ' ', 'z'])
    ) {
        let expected = text.chars().filter(|&ch| ch == target).count();
        prop_assert_eq!(count_chars(&text, &[target]).value(), expected);
    }

    #[test]
    fn test_full_range_matches_full_scan(
        text in "\\PC{1,200}",
        chars in prop::collection::vec(any::<char>(), 0..6)
    ) {
        let last = isize::try_from(text.chars().count() - 1).unwrap();
        let ranged = count_chars_in_range(&text, &chars, 0, last).unwrap();
        prop_assert_eq!(ranged, count_chars(&text, &chars));
        prop_assert_eq!(ranged.value(), naive(&text, &chars));
    }

    #[test]
    fn test_calls_are_idempotent(
        text in "[a-e]{1,100}",
        chars in prop::collection::vec(prop::char::range('a', 'f'), 0..5),
        limit in 0isize..20
    ) {
        let last = isize::try_from(text.chars().count() - 1).unwrap();
        prop_assert_eq!(count_chars(&text, &chars), count_chars(&text, &chars));
        prop_assert_eq!(
            count_chars_with_limit(&text, &chars, 0, last, limit).unwrap(),
            count_chars_with_limit(&text, &chars, 0, last, limit).unwrap()
        );
    }

    #[test]
    fn test_limit_caps_the_count(
        text in "[ab]{1,100}",
        chars in prop::collection::vec(prop::char::range('a', 'c'), 0..4),
        limit in 0isize..50
    ) {
        let last = isize::try_from(text.chars().count() - 1).unwrap();
        let uncapped = count_chars_in_range(&text, &chars, 0, last).unwrap().value();
        let capped = count_chars_with_limit(&text, &chars, 0, last, limit).unwrap().value();

        prop_assert!(capped <= uncapped);
        if limit > 0 {
            let limit = usize::try_from(limit).unwrap();
            prop_assert!(capped <= limit);
            prop_assert_eq!(capped, uncapped.min(limit));
        } else {
            prop_assert_eq!(capped, uncapped);
        }
    }

    #[test]
    fn test_duplicated_set_doubles_the_count(
        text in "[xy]{0,100}",
        chars in prop::collection::vec(prop::char::range('x', 'z'), 0..4)
    ) {
        let doubled: Vec<char> = chars.iter().chain(chars.iter()).copied().collect();
        prop_assert_eq!(
            count_chars(&text, &doubled).value(),
            2 * count_chars(&text, &chars).value()
        );
    }

    #[test]
    fn test_end_past_last_position_is_rejected(
        text in "[a-z]{0,50}",
        overshoot in 0isize..5
    ) {
        let len = isize::try_from(text.chars().count()).unwrap();
        let err = count_chars_in_range(&text, &['a'], 0, len + overshoot).unwrap_err();
        prop_assert!(err.is_out_of_range());
    }

    #[test]
    fn test_request_without_text_is_invalid_argument(
        chars in prop::collection::vec(any::<char>(), 0..4),
        start in -5isize..5,
        end in -5isize..5
    ) {
        let err = CountRequest::new().chars(&chars).range(start, end).execute().unwrap_err();
        prop_assert!(err.is_invalid_argument());
    }
}
