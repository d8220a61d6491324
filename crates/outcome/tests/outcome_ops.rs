//! Integration tests for nebula-outcome
//!
//! These tests drive whole pipelines the way workflow code would: capture a
//! fallible step, transform it, and extract or propagate at the edge.

use nebula_outcome::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use thiserror::Error;

#[derive(Debug, Error)]
enum LedgerError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("account {0} is missing")]
    MissingAccount(String),
}

const ACCOUNTS: &[(&str, i64)] = &[("maintenance", 1200), ("reserve", 300)];

fn checked_div(dividend: i64, divisor: i64) -> Result<i64, LedgerError> {
    if divisor == 0 {
        return Err(LedgerError::DivisionByZero);
    }
    Ok(dividend / divisor)
}

fn find_account(accounts: &[(&str, i64)], name: &str) -> Option<i64> {
    accounts
        .iter()
        .find(|(account, _)| *account == name)
        .map(|(_, balance)| *balance)
}

#[test]
fn test_failed_division_falls_back_to_default() {
    // Scenario: a bad divisor should not take the pipeline down
    let share = Outcome::capture(|| checked_div(8, 0)).unwrap_or(2);
    assert_eq!(share, 2);
}

#[test]
fn test_successful_pipeline_maps_and_unwraps() {
    let doubled = Outcome::capture(|| checked_div(14, 2))
        .map(|n| n * 2)
        .into_result()
        .unwrap();
    assert_eq!(doubled, 14);
}

#[test]
fn test_mapper_is_skipped_once_failed() {
    let mut mapper_calls = 0;
    let outcome = Outcome::capture(|| checked_div(8, 0)).map(|n| {
        mapper_calls += 1;
        n * 2
    });
    assert!(outcome.is_failure());
    assert_eq!(mapper_calls, 0);
}

#[test]
fn test_context_keeps_the_division_error_as_primary_cause() {
    let error = Outcome::capture(|| checked_div(100, 0))
        .context("computing share per participant")
        .expect_failure("division by zero cannot succeed");

    assert_eq!(error.message(), "computing share per participant");
    assert!(matches!(
        error.downcast_ref::<LedgerError>(),
        Some(LedgerError::DivisionByZero)
    ));
}

#[test]
fn test_substituted_failure_files_the_original_as_suppressed() {
    let error = Outcome::capture(|| checked_div(100, 0))
        .context_with(|| OutcomeError::new("settlement aborted"))
        .expect_failure("division by zero cannot succeed");

    assert_eq!(error.message(), "settlement aborted");
    assert!(error.cause().is_none());
    assert_eq!(error.suppressed().len(), 1);
    assert_eq!(error.suppressed()[0].message(), "division by zero");
}

#[test]
fn test_primary_and_suppressed_slots_stay_independent() {
    let error = OutcomeError::new("replaying the journal")
        .with_source(LedgerError::DivisionByZero)
        .with_suppressed(OutcomeError::absent());

    assert_eq!(error.message(), "replaying the journal");
    assert!(error.cause().is_some());
    assert_eq!(error.suppressed().len(), 1);

    // The rendered chain walks the primary spine only
    let rendered: Vec<String> = error.chain().map(ToString::to_string).collect();
    assert_eq!(rendered, vec!["replaying the journal", "division by zero"]);
}

#[test]
fn test_absent_lookup_becomes_the_canonical_absence_failure() {
    let error = find_account(ACCOUNTS, "ghost")
        .into_outcome()
        .expect_failure("the account does not exist");

    assert!(error.is_absent());
    assert_eq!(error.message(), "no value provided");
    assert_eq!(error.code(), "ABSENT_VALUE");
}

#[test]
fn test_absent_lookup_with_substitute_uses_the_domain_failure() {
    let outcome = Outcome::capture_some_or_else(
        || Ok::<_, LedgerError>(find_account(ACCOUNTS, "ghost")),
        || OutcomeError::new("account ghost is not on the ledger"),
    );

    let error = outcome.expect_failure("the account does not exist");
    assert_eq!(error.message(), "account ghost is not on the ledger");
    assert!(error.cause().is_none());
    assert!(!error.is_absent());
}

#[rstest]
#[case(8, 2, 4)]
#[case(8, 0, 2)]
#[case(0, 4, 0)]
fn test_division_grid_falls_back_only_on_failure(
    #[case] dividend: i64,
    #[case] divisor: i64,
    #[case] expected: i64,
) {
    let share = Outcome::capture(|| checked_div(dividend, divisor)).unwrap_or(2);
    assert_eq!(share, expected);
}

#[rstest]
#[case("maintenance", Some(1200))]
#[case("reserve", Some(300))]
#[case("ghost", None)]
fn test_lookup_grid_folds_absence_into_failure(
    #[case] name: &str,
    #[case] expected: Option<i64>,
) {
    let outcome = find_account(ACCOUNTS, name).into_outcome();
    assert_eq!(outcome.is_success(), expected.is_some());
    assert_eq!(outcome.success(), expected);
}

#[test]
fn test_outcome_results_propagate_with_the_question_mark() {
    fn settle(account: &str, parts: i64) -> OutcomeResult<i64> {
        let balance = find_account(ACCOUNTS, account)
            .into_outcome()
            .into_result_context("locating the account")?;
        Outcome::capture(|| checked_div(balance, parts))
            .into_result_context("splitting the balance")
    }

    assert_eq!(settle("maintenance", 4).unwrap(), 300);

    let error = settle("ghost", 4).unwrap_err();
    assert_eq!(error.message(), "locating the account");
    assert!(error.cause().is_some_and(OutcomeError::is_absent));

    let error = settle("reserve", 0).unwrap_err();
    assert_eq!(error.message(), "splitting the balance");
    assert!(matches!(
        error.downcast_ref::<LedgerError>(),
        Some(LedgerError::DivisionByZero)
    ));
}

#[test]
fn test_raising_with_a_substitute_suppresses_the_original() {
    let name = "ghost";
    let error = Outcome::capture(|| {
        find_account(ACCOUNTS, name).ok_or_else(|| LedgerError::MissingAccount(name.to_owned()))
    })
    .into_result_with(|| OutcomeError::new("cannot settle an unknown account"))
    .unwrap_err();

    assert_eq!(error.message(), "cannot settle an unknown account");
    assert!(error.cause().is_none());
    assert_eq!(error.suppressed()[0].message(), "account ghost is missing");
}

#[test]
fn test_conditional_context_only_rewrites_matching_failures() {
    let missing = find_account(ACCOUNTS, "ghost")
        .into_outcome()
        .context_if(OutcomeError::is_absent, || {
            OutcomeError::new("no such account on this ledger")
        });
    assert_eq!(
        missing.expect_failure("lookup cannot succeed").message(),
        "no such account on this ledger"
    );

    let divide = Outcome::capture(|| checked_div(10, 0))
        .context_if(OutcomeError::is_absent, || {
            OutcomeError::new("no such account on this ledger")
        });
    assert_eq!(
        divide.expect_failure("division cannot succeed").message(),
        "division by zero"
    );
}

#[test]
fn test_ensure_and_fail_short_circuit_with_failures() {
    fn split_evenly(total: i64, people: i64) -> Outcome<i64> {
        ensure!(people > 0, "cannot split between {} people", people);
        if total % people != 0 {
            fail!("{} does not split evenly {} ways", total, people);
        }
        Success(total / people)
    }

    assert_eq!(split_evenly(90, 3).success(), Some(30));
    assert_eq!(
        split_evenly(90, 0)
            .expect_failure("the guard rejects zero")
            .message(),
        "cannot split between 0 people"
    );
    assert_eq!(
        split_evenly(100, 3)
            .expect_failure("the remainder check rejects this")
            .message(),
        "100 does not split evenly 3 ways"
    );
}

#[test]
fn test_alternate_display_renders_the_full_cause_chain() {
    let error = Outcome::capture(|| checked_div(8, 0))
        .context("splitting the bill")
        .expect_failure("division by zero cannot succeed");

    assert_eq!(format!("{error}"), "splitting the bill");
    assert_eq!(format!("{error:#}"), "splitting the bill: division by zero");
}
