use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E6002.as_str(), "E6002");
}

#[test]
fn test_every_code_is_in_exactly_one_phase() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_eval_error(),
        ];
        assert_eq!(
            phases.iter().filter(|p| **p).count(),
            1,
            "{code} should belong to exactly one phase"
        );
    }
}

#[test]
fn test_phase_matches_leading_digit() {
    for code in ErrorCode::ALL {
        let digit = code.as_str().as_bytes()[1];
        match digit {
            b'0' => assert!(code.is_lexer_error()),
            b'1' => assert!(code.is_parser_error()),
            b'6' => assert!(code.is_eval_error()),
            other => panic!("unexpected phase digit {}", other as char),
        }
    }
}

#[test]
fn test_descriptions_are_nonempty() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty());
    }
}
