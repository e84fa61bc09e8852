#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

mod helpers;

use helpers::run_seqgen;

#[test]
fn prints_the_requested_sequence() {
    let run = run_seqgen(["add_primes", "--start", "6", "--length", "10"]);

    assert!(run.success, "stderr: {}", run.stderr);
    assert_eq!(
        run.sequence_lines(),
        vec!["add_primes: [6, 9, 14, 19, 26, 33, 42, 51, 60, 71]"]
    );
}

#[test]
fn accepts_a_fractional_start() {
    let run = run_seqgen(["separate_patterns", "--start", "5/6", "--length", "7"]);

    assert!(run.success, "stderr: {}", run.stderr);
    assert_eq!(
        run.sequence_lines(),
        vec!["separate_patterns: [5/6, 14/7, 23/9, 32/10, 41/12, 50/13, 59/15]"]
    );
}

#[test]
fn length_defaults_to_ten() {
    let run = run_seqgen(["skip_primes"]);

    assert!(run.success, "stderr: {}", run.stderr);
    assert_eq!(
        run.sequence_lines(),
        vec!["skip_primes: [2, 5, 11, 17, 23, 31, 41, 47, 59, 67]"]
    );
}

#[test]
fn unknown_rules_are_rejected() {
    let run = run_seqgen(["add_cubes"]);

    assert!(!run.success);
    assert!(run.stdout.is_empty());
}

#[test]
fn fractional_start_for_a_seeded_rule_fails() {
    let run = run_seqgen(["fibonacci_diff", "--start", "5/6"]);

    assert!(!run.success);
    assert!(run.stderr.contains("requires an integer start"), "{}", run.stderr);
}

#[test]
fn all_rules_skip_those_which_need_an_integer_start() {
    let run = run_seqgen(["--all", "--start", "5/6", "--length", "3"]);

    assert!(run.success, "stderr: {}", run.stderr);
    assert_eq!(
        run.sequence_lines(),
        vec![
            "skip_primes: [2, 5, 11]",
            "recurrence_relation: [5, 10, 55]",
            "fraction_pattern: [1/7, 7/9, 9/11]",
            "integer_fraction_pattern: [1, 2, 24/12]",
            "fibonacci_fractions: [1/1, 1/1, 2/2]",
            "separate_patterns: [5/6, 14/7, 23/9]",
        ]
    );
}

#[test]
fn statistics_are_logged_on_request() {
    let run = run_seqgen(["add_primes", "--start", "6", "--log-statistics"]);

    assert!(run.success, "stderr: {}", run.stderr);
    assert!(run.stdout.contains("%%%seqgen-stat: numElements=10"));
    assert!(run.stdout.contains("%%%seqgen-stat: numPrimesDrawn=10"));
    assert!(run.stdout.contains("%%%seqgen-stat-end"));
}

#[test]
fn huge_lengths_report_an_overflow() {
    let run = run_seqgen(["geometric_diff", "--length", "18446744073709551615"]);

    assert!(!run.success);
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("overflowed"), "{}", run.stderr);
}
