//! Error behavior: what is reported, what recovers, what stops evaluation.

use ili_diagnostic::ErrorCode;
use ili_eval::Value;

use crate::common::run;

mod lexical {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_illegal_character_is_skipped() {
        let result = run("x = 1 @ ;\nprint x;");
        assert_eq!(result.output, "1\n");
        assert_eq!(result.outcome.errors, 1);
        assert!(
            result
                .rendered
                .contains("error[E0001]: illegal character '@'"),
            "{}",
            result.rendered
        );
        assert!(result.rendered.contains("--> 1:7"), "{}", result.rendered);
    }

    #[test]
    fn test_oversized_literal() {
        let result = run("print 99999999999999999999;");
        assert_eq!(result.output, "");
        assert_eq!(result.outcome.errors, 2);
        assert!(result.rendered.contains("error[E0002]"), "{}", result.rendered);
        assert!(result.rendered.contains("error[E1001]"), "{}", result.rendered);
    }
}

mod syntax {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_syntax_error_skips_evaluation() {
        let result = run("print 1;\nprint (2;");
        assert_eq!(result.output, "");
        assert_eq!(result.outcome.errors, 1);
        assert_eq!(result.outcome.value, None);
        assert!(
            result
                .rendered
                .contains("error[E1001]: expected `)`, found `;`"),
            "{}",
            result.rendered
        );
        assert!(result.rendered.contains("--> 2:9"), "{}", result.rendered);
    }

    #[test]
    fn test_unexpected_end_of_input() {
        let result = run("func f() {");
        assert_eq!(result.outcome.errors, 1);
        assert!(
            result
                .rendered
                .contains("error[E1002]: unexpected end of input, expected `}`"),
            "{}",
            result.rendered
        );
    }

    #[test]
    fn test_missing_semicolon() {
        let result = run("x = 1\nprint x;");
        assert!(
            result
                .rendered
                .contains("expected `;`, found `print`"),
            "{}",
            result.rendered
        );
    }
}

mod runtime {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_division_by_zero_continues() {
        let result = run("print 5 / 0; print \"after\";");
        assert_eq!(result.output, "0\nafter\n");
        assert_eq!(result.outcome.errors, 1);
        assert_eq!(result.runtime_codes(), vec![ErrorCode::E6002]);
        assert_eq!(result.rendered, "");
    }

    #[test]
    fn test_undefined_variable_is_a_warning() {
        let result = run("print y;");
        assert_eq!(result.output, "0\n");
        assert_eq!(result.outcome.errors, 0);
        assert_eq!(result.outcome.warnings, 1);
        assert!(!result.runtime[0].is_error());
        assert_eq!(result.runtime[0].message, "undefined variable `y`");
    }

    #[test]
    fn test_function_errors_yield_none() {
        let result = run("func f(a) { return a; } print f(); print g(1);");
        assert_eq!(result.output, "none\nnone\n");
        assert_eq!(
            result.runtime_codes(),
            vec![ErrorCode::E6006, ErrorCode::E6005]
        );
    }

    #[test]
    fn test_type_errors_fall_back_by_operator() {
        let result = run("print \"a\" * 2; print 1 < \"b\";");
        assert_eq!(result.output, "0\nfalse\n");
        assert_eq!(
            result.runtime_codes(),
            vec![ErrorCode::E6004, ErrorCode::E6004]
        );
    }

    #[test]
    fn test_return_outside_function_stops_the_program() {
        let result = run("print 1; return 2; print 3;");
        assert_eq!(result.output, "1\n");
        assert_eq!(result.outcome.errors, 1);
        assert!(result.rendered.contains("error[E6007]"), "{}", result.rendered);
    }

    #[test]
    fn test_program_value_survives_recovered_errors() {
        let result = run("x = 1 / 0; x + 7;");
        assert_eq!(result.outcome.value, Some(Value::int(7)));
        assert_eq!(result.outcome.errors, 1);
    }
}
