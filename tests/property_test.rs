use proptest::prelude::*;

use quiz_convert::services::segmenter::{non_empty_lines, segment};
use quiz_convert::services::{normalize_options, strip_option_prefix};
use quiz_convert::{process_document, Category, Config, RawDocument};

/// 生成类似题目文档的行：编号行、选项行、答案行、解析行、普通行、空行
fn quiz_line() -> impl Strategy<Value = String> {
    prop_oneof![
        (1u32..40, "[a-zA-Z ?]{0,20}").prop_map(|(n, s)| format!("{}. {}", n, s)),
        ("[A-E]", "[a-z0-9 ]{0,10}").prop_map(|(l, s)| format!("{}) {}", l, s)),
        "[A-Fa-f1 ]{0,2}".prop_map(|s| format!("Answer: {}", s)),
        "[a-z .]{0,20}".prop_map(|s| format!("Explanation: {}", s)),
        "[a-z ]{0,20}",
        Just(String::new()),
    ]
}

fn quiz_text() -> impl Strategy<Value = String> {
    prop::collection::vec(quiz_line(), 0..40).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn test_segmentation_is_lossless(text in quiz_text()) {
        let rejoined: Vec<String> = segment(&text).into_iter().flat_map(|b| b.lines).collect();
        let expected: Vec<&str> = non_empty_lines(&text).collect();
        prop_assert_eq!(rejoined, expected);
    }

    #[test]
    fn test_block_ordinals_are_contiguous(text in quiz_text()) {
        for (i, block) in segment(&text).iter().enumerate() {
            prop_assert_eq!(block.ordinal, i + 1);
        }
    }

    #[test]
    fn test_accepted_questions_are_valid(text in quiz_text()) {
        let document = RawDocument::new("generated", text);
        if let Ok(conversion) = process_document(&document, 1, &Config::default()) {
            for question in &conversion.subject.lessons[0].questions {
                prop_assert!(question.options.len() >= 2);
                if !question.answer.is_empty() {
                    let matches = question
                        .options
                        .iter()
                        .filter(|o| strip_option_prefix(o) == question.answer)
                        .count();
                    prop_assert!(matches >= 1);
                }
            }
        }
    }

    #[test]
    fn test_normalizer_is_idempotent(options in prop::collection::vec("[A-D]?\\)? ?[a-z\n ]{0,15}", 0..4)) {
        let once = normalize_options(options);
        let twice = normalize_options(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn test_category_is_total_and_deterministic(identifier in ".*") {
        let first = Category::classify(&identifier);
        let second = Category::classify(&identifier);
        prop_assert_eq!(first, second);
        prop_assert!(Category::ALL.contains(&first));
    }
}
