use std::collections::VecDeque;

use lolterpreter::{
    Execution,
    error::{Error, ParseError, RuntimeError},
    execute,
    interpreter::value::core::Value,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run_with_input(src: &str, lines: &[&str]) -> (String, Execution) {
    init_logging();
    let mut output = String::new();
    let mut input: VecDeque<String> = lines.iter().map(|line| format!("{line}\n")).collect();
    let execution = execute(src, &mut output, &mut input);
    (output, execution)
}

fn run(src: &str) -> (String, Execution) {
    run_with_input(src, &[])
}

/// Wraps `body` in `HAI` / `KTHXBYE`.
fn program(body: &str) -> String {
    format!("HAI 1.2\n{body}\nKTHXBYE\n")
}

fn assert_success(body: &str, expected: &str) -> Execution {
    let (output, execution) = run(&program(body));
    if let Err(e) = &execution.result {
        panic!("Script failed: {e}\n{body}");
    }
    assert_eq!(output, expected, "unexpected output for:\n{body}");
    execution
}

fn assert_failure(body: &str) -> (String, Error) {
    let (output, execution) = run(&program(body));
    match execution.result {
        Ok(()) => panic!("Script succeeded but was expected to fail:\n{body}"),
        Err(e) => (output, e),
    }
}

fn assert_runtime_failure(body: &str) -> RuntimeError {
    match assert_failure(body) {
        (_, Error::Runtime(e)) => e,
        (_, other) => panic!("expected a runtime error, got {other}"),
    }
}

fn assert_syntax_failure(body: &str) -> ParseError {
    match assert_failure(body) {
        (output, Error::Syntax(e)) => {
            assert!(output.is_empty(), "a syntax error must stop the program before it runs");
            e
        },
        (_, other) => panic!("expected a syntax error, got {other}"),
    }
}

#[test]
fn declaration_block_values_are_visible_in_the_body() {
    let src = "HAI 1.2
WAZZUP
    I HAS A X ITZ 10
BUHBYE
VISIBLE SUM OF X AN 5
KTHXBYE
";
    let (output, execution) = run(src);
    assert!(execution.result.is_ok());
    assert_eq!(output, "15\n");
    assert_eq!(execution.symbols.get("X"), Some(&Value::Numbr(10)));
}

#[test]
fn declaration_block_can_refer_to_earlier_declarations() {
    let src = "HAI
WAZZUP
    I HAS A X ITZ 4
    I HAS A Y ITZ PRODUKT OF X AN X
    I HAS A Z ITZ A YARN
BUHBYE
VISIBLE Y \" [\" Z \"]\"
KTHXBYE
";
    let (output, execution) = run(src);
    assert!(execution.result.is_ok());
    assert_eq!(output, "16 []\n");
}

#[test]
fn input_is_stored_as_yarn() {
    let (output, execution) = run_with_input(&program("I HAS A Y\nGIMMEH Y\nVISIBLE Y"), &["42"]);
    assert!(execution.result.is_ok());
    assert_eq!(output, "42\n");
    assert_eq!(execution.symbols.get("Y"), Some(&Value::from("42")));
}

#[test]
fn exhausted_input_reads_as_empty_yarn() {
    let (_, execution) = run(&program("I HAS A Y\nGIMMEH Y"));
    assert!(execution.result.is_ok());
    assert_eq!(execution.symbols.get("Y"), Some(&Value::from("")));
}

#[test]
fn input_into_undeclared_variable_is_error() {
    assert!(matches!(assert_runtime_failure("GIMMEH NOPE"),
                     RuntimeError::UndeclaredInputTarget { .. }));
}

#[test]
fn visible_joins_operands_and_honours_bang() {
    assert_success("VISIBLE \"A\" AN 1 AN WIN", "A1WIN\n");
    assert_success("VISIBLE \"A\" 2.5 FAIL", "A2.5FAIL\n");
    assert_success("VISIBLE \"NO NEWLINE\"!\nVISIBLE \" THEN ONE\"", "NO NEWLINE THEN ONE\n");
    assert_success("I HAS A N\nVISIBLE N", "NOOB\n");
}

#[test]
fn yarn_escapes_are_decoded() {
    assert_success("VISIBLE \"TAB\\tQUOTE\\\"\"", "TAB\tQUOTE\"\n");
}

#[test]
fn switch_runs_only_the_matching_case() {
    let body = "2
WTF?
    OMG 1
        VISIBLE \"one\"
        GTFO
    OMG 2
        VISIBLE \"two\"
        GTFO
    OMGWTF
        VISIBLE \"other\"
OIC";
    assert_success(body, "two\n");
}

#[test]
fn switch_case_does_not_fall_through() {
    let body = "1
WTF?
    OMG 1
        VISIBLE \"A\"
    OMG 2
        VISIBLE \"B\"
    OMGWTF
        VISIBLE \"C\"
OIC";
    assert_success(body, "A\n");
}

#[test]
fn gtfo_skips_the_rest_of_the_case() {
    let body = "1
WTF?
    OMG 1
        VISIBLE \"A\"
        GTFO
        VISIBLE \"NOPE\"
OIC
VISIBLE \"AFTER\"";
    assert_success(body, "A\nAFTER\n");
}

#[test]
fn switch_falls_back_to_default_and_to_nothing() {
    assert_success("3\nWTF?\nOMG 1\nVISIBLE \"A\"\nOMGWTF\nVISIBLE \"D\"\nOIC", "D\n");
    assert_success("3\nWTF?\nOMG 1\nVISIBLE \"A\"\nOIC\nVISIBLE \"DONE\"", "DONE\n");
}

#[test]
fn switch_matches_non_numeric_yarn_by_equality() {
    let body = "\"CAT\"
WTF?
    OMG \"DOG\"
        VISIBLE \"woof\"
    OMG \"CAT\"
        VISIBLE \"meow\"
OIC";
    assert_success(body, "meow\n");
}

#[test]
fn switch_matches_numbers_across_types() {
    assert_success("\"2\"\nWTF?\nOMG 2\nVISIBLE \"two\"\nOIC", "two\n");
    assert_success("2.0\nWTF?\nOMG 2\nVISIBLE \"two\"\nOIC", "two\n");
}

#[test]
fn duplicate_case_is_syntax_error() {
    let e = assert_syntax_failure("1\nWTF?\nOMG 1\nVISIBLE 1\nOMG 1\nVISIBLE 2\nOIC");
    assert!(matches!(e, ParseError::DuplicateCase { .. }));
}

#[test]
fn uppin_loop_counts_and_drops_its_variable() {
    let body = "IM IN YR LOOP UPPIN YR I TIL BOTH SAEM I AN 3
    VISIBLE I
IM OUTTA YR LOOP";
    let execution = assert_success(body, "0\n1\n2\n");
    assert!(!execution.symbols.contains("I"));
}

#[test]
fn nerfin_loop_keeps_a_declared_variable() {
    let body = "I HAS A N ITZ 3
IM IN YR COUNTDOWN NERFIN YR N WILE N
    VISIBLE N
IM OUTTA YR COUNTDOWN";
    let execution = assert_success(body, "3\n2\n1\n");
    assert_eq!(execution.symbols.get("N"), Some(&Value::Numbr(0)));
}

#[test]
fn loop_condition_is_checked_before_the_first_iteration() {
    assert_success("IM IN YR L UPPIN YR I TIL WIN\nVISIBLE \"NEVER\"\nIM OUTTA YR L\nVISIBLE \"DONE\"",
                   "DONE\n");
}

#[test]
fn unconditional_loop_ends_with_gtfo() {
    let body = "I HAS A C ITZ 0
IM IN YR L
    C R SUM OF C AN 1
    BOTH SAEM C AN 3
    O RLY?
        YA RLY
            GTFO
    OIC
IM OUTTA YR L
VISIBLE C";
    assert_success(body, "3\n");
}

#[test]
fn gtfo_inside_a_switch_inside_a_loop_leaves_only_the_switch() {
    let body = "IM IN YR L UPPIN YR I TIL BOTH SAEM I AN 2
    I
    WTF?
        OMG 0
            VISIBLE \"zero\"
            GTFO
        OMGWTF
            VISIBLE \"other\"
    OIC
IM OUTTA YR L";
    assert_success(body, "zero\nother\n");
}

#[test]
fn mismatched_loop_label_is_syntax_error_with_no_output() {
    let e = assert_syntax_failure("VISIBLE \"BEFORE\"\nIM IN YR A\nGTFO\nIM OUTTA YR B");
    assert!(matches!(e, ParseError::MismatchedLoopLabel { .. }));
}

#[test]
fn conditional_takes_the_first_true_guard() {
    let body = "I HAS A X ITZ 7
BOTH SAEM X AN 1
O RLY?
    YA RLY
        VISIBLE \"one\"
    MEBBE BOTH SAEM X AN 7
        VISIBLE \"seven\"
    MEBBE DIFFRINT X AN 0
        VISIBLE \"nonzero\"
    NO WAI
        VISIBLE \"other\"
OIC";
    assert_success(body, "seven\n");
}

#[test]
fn conditional_uses_the_truthiness_of_it() {
    assert_success("\"\"\nO RLY?\nYA RLY\nVISIBLE \"Y\"\nNO WAI\nVISIBLE \"N\"\nOIC", "N\n");
    assert_success("\"FAIL\"\nO RLY?\nYA RLY\nVISIBLE \"Y\"\nNO WAI\nVISIBLE \"N\"\nOIC", "N\n");
    assert_success("\"0\"\nO RLY?\nYA RLY\nVISIBLE \"Y\"\nNO WAI\nVISIBLE \"N\"\nOIC", "Y\n");
    assert_success("0.0\nO RLY?\nYA RLY\nVISIBLE \"Y\"\nOIC\nVISIBLE \"END\"", "END\n");
}

#[test]
fn non_boolean_guard_is_syntax_error() {
    let e = assert_syntax_failure("WIN\nO RLY?\nYA RLY\nVISIBLE 1\nMEBBE SUM OF 1 AN 2\nVISIBLE 2\nOIC");
    assert!(matches!(e, ParseError::NonBooleanGuard { .. }));
}

#[test]
fn function_call_sets_it() {
    let body = "HOW IZ I ADD YR A AN YR B
    FOUND YR SUM OF A AN B
IF U SAY SO
I IZ ADD YR 2 AN YR 3 MKAY
VISIBLE IT";
    assert_success(body, "5\n");
}

#[test]
fn function_without_return_yields_its_last_it() {
    assert_success("HOW IZ I F\n    SUM OF 1 AN 2\nIF U SAY SO\nVISIBLE I IZ F MKAY", "3\n");
    assert_success("HOW IZ I F\n    VISIBLE \"HI\"\nIF U SAY SO\nVISIBLE I IZ F MKAY", "HI\nNOOB\n");
}

#[test]
fn gtfo_in_a_function_resets_it_and_carries_on() {
    let body = "HOW IZ I F
    SUM OF 1 AN 2
    GTFO
    VISIBLE \"AFTER\"
IF U SAY SO
VISIBLE I IZ F MKAY";
    assert_success(body, "AFTER\nNOOB\n");

    let body = "HOW IZ I G
    GTFO
    SUM OF 4 AN 5
IF U SAY SO
VISIBLE I IZ G MKAY";
    assert_success(body, "9\n");
}

#[test]
fn found_yr_leaves_enclosing_loops() {
    let body = "HOW IZ I FIRST_OVER YR LIMIT
    IM IN YR L UPPIN YR I
        BIGGR OF I AN LIMIT
        BOTH SAEM IT AN I
        O RLY?
            YA RLY
                FOUND YR I
        OIC
    IM OUTTA YR L
IF U SAY SO
VISIBLE I IZ FIRST_OVER YR 4 MKAY";
    assert_success(body, "4\n");
}

#[test]
fn recursive_calls_have_isolated_parameters() {
    let body = "I HAS A N ITZ 100
HOW IZ I FACT YR N
    BOTH SAEM N AN 0
    O RLY?
        YA RLY
            FOUND YR 1
    OIC
    FOUND YR PRODUKT OF N AN I IZ FACT YR DIFF OF N AN 1 MKAY
IF U SAY SO
VISIBLE I IZ FACT YR 5 MKAY
VISIBLE N";
    assert_success(body, "120\n100\n");
}

#[test]
fn functions_cannot_read_top_level_variables() {
    let e = assert_runtime_failure("I HAS A X ITZ 1\nHOW IZ I F\n    VISIBLE X\nIF U SAY SO\nI IZ F MKAY");
    assert!(matches!(e, RuntimeError::UnknownVariable { ref name, .. } if name == "X"));
}

#[test]
fn function_can_be_printed() {
    assert_success("HOW IZ I F\nIF U SAY SO\nVISIBLE F", "<FUNKSHUN F>\n");
}

#[test]
fn wrong_function_arity_is_error() {
    let e = assert_runtime_failure("HOW IZ I F YR A\n    FOUND YR A\nIF U SAY SO\nI IZ F MKAY");
    assert!(matches!(e, RuntimeError::ArgumentCountMismatch { expected: 1, found: 0, .. }));
}

#[test]
fn calling_unknown_names_is_error() {
    assert!(matches!(assert_runtime_failure("I IZ NOPE MKAY"),
                     RuntimeError::UnknownFunction { .. }));
    assert!(matches!(assert_runtime_failure("I HAS A X ITZ 3\nI IZ X MKAY"),
                     RuntimeError::NotAFunction { .. }));
}

#[test]
fn unbounded_recursion_is_error() {
    let body = "HOW IZ I F\n    I IZ F MKAY\nIF U SAY SO\nI IZ F MKAY";
    // Deep recursion needs more than the default test thread stack.
    let handle = std::thread::Builder::new().stack_size(64 * 1024 * 1024)
                                            .spawn(move || assert_runtime_failure(body))
                                            .unwrap();
    let e = handle.join().unwrap();
    assert!(matches!(e, RuntimeError::RecursionLimit { .. }));
}

#[test]
fn duplicate_parameter_is_syntax_error() {
    let e = assert_syntax_failure("HOW IZ I F YR A AN YR A\nIF U SAY SO");
    assert!(matches!(e, ParseError::DuplicateParameter { .. }));
}

#[test]
fn found_yr_outside_a_function_is_syntax_error() {
    assert!(matches!(assert_syntax_failure("FOUND YR 1"),
                     ParseError::ReturnOutsideFunction { .. }));
}

#[test]
fn gtfo_at_top_level_clears_it() {
    assert_success("5\nGTFO\nVISIBLE IT", "NOOB\n");
}

#[test]
fn is_now_a_casts_in_place() {
    let execution = assert_success("I HAS A N ITZ \"5\"\nN IS NOW A NUMBR\nVISIBLE SUM OF N AN 1",
                                   "6\n");
    assert_eq!(execution.symbols.get("N"), Some(&Value::Numbr(5)));
}

#[test]
fn maek_does_not_change_the_variable() {
    let execution = assert_success("I HAS A N ITZ 3.9\nVISIBLE MAEK N A NUMBR\nVISIBLE MAEK N YARN",
                                   "3\n3.9\n");
    assert_eq!(execution.symbols.get("N"), Some(&Value::Numbar(3.9)));
}

#[test]
fn typed_declarations_start_at_zero_values() {
    assert_success("I HAS A T ITZ A TROOF\nI HAS A N ITZ A NUMBR\nI HAS A F ITZ A NUMBAR\nVISIBLE T \" \" N \" \" F",
                   "FAIL 0 0.0\n");
}

#[test]
fn noob_arithmetic_treats_noob_as_zero() {
    assert_success("I HAS A Z\nVISIBLE SUM OF Z AN 5", "5\n");
    assert_success("I HAS A Z\nVISIBLE DIFF OF Z AN 5", "-5\n");
}

#[test]
fn division_by_zero_returns_the_dividend() {
    assert_success("VISIBLE QUOSHUNT OF 10 AN 0", "10\n");
    assert_success("VISIBLE QUOSHUNT OF 10.0 AN 0", "10.0\n");
    assert_success("VISIBLE MOD OF 10 AN FAIL", "0\n");
    assert_success("I HAS A Z\nVISIBLE QUOSHUNT OF 7 AN Z", "7\n");
}

#[test]
fn arithmetic_result_types() {
    assert_success("VISIBLE SUM OF 1.5 AN 1", "2.5\n");
    assert_success("VISIBLE PRODUKT OF 2.5 AN 2", "5.0\n");
    assert_success("VISIBLE SUM OF \"3.7\" AN \"1.2\"", "4\n");
    assert_success("VISIBLE SUM OF 1 AN \"2.5\"", "3.5\n");
    assert_success("VISIBLE QUOSHUNT OF 7 AN 2", "3\n");
    assert_success("VISIBLE QUOSHUNT OF -7 AN 2", "-3\n");
    assert_success("VISIBLE MOD OF 7 AN 3", "1\n");
    assert_success("VISIBLE SUM OF WIN AN WIN", "2\n");
}

#[test]
fn biggr_and_smallr_return_the_original_operand() {
    assert_success("VISIBLE BIGGR OF \"10\" AN 3", "10\n");
    assert_success("VISIBLE SMALLR OF 2.5 AN 3", "2.5\n");
    assert_success("VISIBLE SMALLR OF 2 AN 2.0", "2\n");
}

#[test]
fn boolean_operators_evaluate_truthiness() {
    assert_success("VISIBLE BOTH OF WIN AN \"\"", "FAIL\n");
    assert_success("VISIBLE EITHER OF 0 AN \"X\"", "WIN\n");
    assert_success("VISIBLE WON OF WIN AN WIN", "FAIL\n");
    assert_success("VISIBLE NOT \"FAIL\"", "WIN\n");
    assert_success("VISIBLE NOT \"KITTEH\"", "FAIL\n");
    assert_success("VISIBLE NOT 0", "WIN\n");
    assert_success("VISIBLE ALL OF WIN AN 1 AN \"A\" MKAY", "WIN\n");
    assert_success("VISIBLE ANY OF FAIL AN 0 AN \"\" MKAY", "FAIL\n");
}

#[test]
fn yarn_spelling_a_literal_coerces_like_the_literal() {
    assert_success("VISIBLE SUM OF \"WIN\" AN 5", "6\n");
    assert_success("VISIBLE NOT \"NOOB\"", "WIN\n");
    assert_success("VISIBLE BOTH OF \"NOOB\" AN WIN", "FAIL\n");

    let (output, execution) =
        run_with_input(&program("I HAS A ANSWER\nGIMMEH ANSWER\nVISIBLE SUM OF ANSWER AN 1"),
                       &["WIN"]);
    assert!(execution.result.is_ok());
    assert_eq!(output, "2\n");
}

#[test]
fn keyword_words_running_into_longer_names_are_variables() {
    assert_success("I HAS A NO ITZ 2\nI HAS A WAIT ITZ 3\nVISIBLE NO WAIT", "23\n");
    assert_success("I HAS A SUM ITZ 1\nI HAS A OFFSET ITZ 4\nVISIBLE SUM OFFSET", "14\n");
}

#[test]
fn smoosh_concatenates_display_forms() {
    assert_success("I HAS A X\nVISIBLE SMOOSH \"A\" AN 1 AN 2.5 AN WIN AN X MKAY", "A12.5WINNOOB\n");
}

#[test]
fn equality_compares_numerically() {
    assert_success("VISIBLE BOTH SAEM 1 AN 1.0", "WIN\n");
    assert_success("VISIBLE BOTH SAEM \"1\" AN 1", "WIN\n");
    assert_success("VISIBLE DIFFRINT 2 AN 3", "WIN\n");
    assert_success("I HAS A X\nVISIBLE BOTH SAEM X AN 0", "WIN\n");
}

#[test]
fn equality_on_non_numeric_yarn_is_error() {
    assert!(matches!(assert_runtime_failure("VISIBLE BOTH SAEM \"A\" AN \"A\""),
                     RuntimeError::NonNumericComparison { .. }));
}

#[test]
fn operands_are_all_evaluated() {
    let body = "HOW IZ I LOUD
    VISIBLE \"CALLED\"
    FOUND YR WIN
IF U SAY SO
VISIBLE EITHER OF WIN AN I IZ LOUD MKAY";
    assert_success(body, "CALLED\nWIN\n");
}

#[test]
fn invalid_cast_is_error() {
    assert!(matches!(assert_runtime_failure("VISIBLE MAEK \"CHEEZ\" A NUMBR"),
                     RuntimeError::InvalidCast { .. }));
}

#[test]
fn integer_overflow_is_error() {
    assert!(matches!(assert_runtime_failure("VISIBLE SUM OF 9223372036854775807 AN 1"),
                     RuntimeError::Overflow { .. }));
}

#[test]
fn unknown_variable_is_error() {
    assert!(matches!(assert_runtime_failure("VISIBLE FOO"), RuntimeError::UnknownVariable { .. }));
    assert!(matches!(assert_runtime_failure("FOO R 1"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn runtime_error_keeps_earlier_state_and_output() {
    let (output, execution) = run(&program("I HAS A X ITZ 1
VISIBLE \"BEFORE\"
X R 2
VISIBLE BOTH SAEM \"A\" AN \"B\"
X R 3"));
    assert!(matches!(execution.result, Err(Error::Runtime(_))));
    assert_eq!(output, "BEFORE\n");
    assert_eq!(execution.symbols.get("X"), Some(&Value::Numbr(2)));
}

#[test]
fn runtime_error_reports_its_line() {
    let (_, execution) = run("HAI\nI HAS A X\n\nVISIBLE Y\nKTHXBYE\n");
    let Err(Error::Runtime(e)) = execution.result else {
        panic!("expected a runtime error");
    };
    assert_eq!(e.line(), 4);
    assert!(e.to_string().starts_with("Error on line 4"));
}

#[test]
fn invalid_declaration_in_wazzup_is_syntax_error() {
    let (_, execution) = run("HAI\nWAZZUP\nI HAS A X ITZ Y\nBUHBYE\nKTHXBYE\n");
    assert!(matches!(execution.result,
                     Err(Error::Syntax(ParseError::InvalidDeclaration { .. }))));

    let (_, execution) = run("HAI\nWAZZUP\nI HAS A X ITZ I IZ F MKAY\nBUHBYE\nKTHXBYE\n");
    assert!(matches!(execution.result,
                     Err(Error::Syntax(ParseError::InvalidDeclaration { .. }))));
}

#[test]
fn keywords_are_case_sensitive() {
    assert!(matches!(assert_syntax_failure("visible \"x\""), ParseError::UnexpectedToken { .. }));
}

#[test]
fn missing_expression_is_syntax_error() {
    let e = assert_syntax_failure("VISIBLE");
    assert!(e.to_string().starts_with("Error on line 2"));
}

#[test]
fn program_must_start_with_hai_and_end_with_kthxbye() {
    let (_, execution) = run("VISIBLE 1\nKTHXBYE\n");
    assert!(matches!(execution.result, Err(Error::Syntax(_))));

    let (_, execution) = run("HAI\nVISIBLE 1\n");
    assert!(matches!(execution.result,
                     Err(Error::Syntax(ParseError::UnexpectedEndOfInput { .. }))));
}

#[test]
fn lexical_error_produces_no_tokens() {
    let (output, execution) = run("HAI\nVISIBLE @\nKTHXBYE\n");
    assert!(matches!(execution.result, Err(Error::Lexical(_))));
    assert!(execution.tokens.is_empty());
    assert!(output.is_empty());
}

#[test]
fn comments_and_commas_are_separators() {
    let body = "BTW a line comment
I HAS A X ITZ 1, VISIBLE X BTW trailing
OBTW
    VISIBLE \"HIDDEN\"
TLDR
VISIBLE \"SHOWN\"";
    assert_success(body, "1\nSHOWN\n");
}

#[test]
fn execution_exposes_tokens_and_symbols() {
    let execution = assert_success("I HAS A X ITZ 2\nX R SUM OF X AN 1", "");
    assert!(!execution.tokens.is_empty());
    let names: Vec<&str> = execution.symbols.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["IT", "X"]);
    assert_eq!(execution.symbols.get("X"), Some(&Value::Numbr(3)));
}

#[test]
fn consecutive_identifier_statements_are_separated_by_line_ends() {
    assert_success("I HAS A X ITZ 1\nI HAS A Y ITZ 2\nX\nY\nVISIBLE IT", "2\n");
    assert_success("I HAS A X ITZ 1\nI HAS A Y ITZ 2\nX R Y\nX\nVISIBLE IT", "2\n");
}

#[test]
fn not_applies_to_the_whole_following_expression() {
    assert_success("VISIBLE NOT BOTH SAEM 1 AN 2", "WIN\n");
    assert_success("FAIL\nO RLY?\nYA RLY\nVISIBLE 1\nMEBBE NOT BOTH SAEM 1 AN 2\nVISIBLE 2\nOIC",
                   "2\n");
}
