//! Integration tests for `Either<L, R>`.

use fpkit::either::Either;
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Two-sided operations call exactly one function
// =============================================================================

#[rstest]
#[case(Either::Left(3))]
#[case(Either::Right("three".to_string()))]
fn fold_invokes_exactly_one_function(#[case] value: Either<i32, String>) {
    let left_calls = Cell::new(0);
    let right_calls = Cell::new(0);
    let was_left = value.is_left();

    let _ = value.fold(
        |n| {
            left_calls.set(left_calls.get() + 1);
            n.to_string()
        },
        |s| {
            right_calls.set(right_calls.get() + 1);
            s
        },
    );

    assert_eq!(left_calls.get() + right_calls.get(), 1);
    assert_eq!(left_calls.get() == 1, was_left);
}

#[rstest]
fn match_with_runs_only_the_active_side() {
    let seen = Cell::new("");
    Either::<i32, &str>::Right("r").match_with(|_| seen.set("left"), |_| seen.set("right"));
    assert_eq!(seen.get(), "right");
}

#[rstest]
fn bi_bind_can_switch_sides() {
    let value: Either<String, i32> = Either::Right(-4);
    let checked: Either<String, u32> = value.bi_bind(Either::Left, |n| {
        u32::try_from(n).map_or_else(|_| Either::Left(format!("{n} is negative")), Either::Right)
    });
    assert_eq!(checked, Either::Left("-4 is negative".to_string()));
}

#[rstest]
fn bimap_keeps_the_side() {
    let value: Either<&str, i32> = Either::Left("err");
    assert_eq!(value.bimap(str::len, |n| n * 2), Either::Left(3));
}

// =============================================================================
// One-sided operations pass the other side through
// =============================================================================

#[rstest]
fn map_left_ignores_right() {
    let value: Either<i32, &str> = Either::Right("kept");
    assert_eq!(value.map_left(|n| n + 1), Either::Right("kept"));
}

#[rstest]
fn bind_left_chains_on_left() {
    let value: Either<i32, &str> = Either::Left(10);
    assert_eq!(value.bind_left(|n| Either::Left(n / 2)), Either::Left(5));
}

#[rstest]
fn bind_right_short_circuits_on_left() {
    let value: Either<i32, &str> = Either::Left(1);
    let result: Either<i32, usize> = value.bind_right(|_| panic!("not called"));
    assert_eq!(result, Either::Left(1));
}

// =============================================================================
// Accessors and conversions
// =============================================================================

#[rstest]
fn ref_accessors_borrow_the_active_side() {
    let value: Either<String, i32> = Either::Left("text".to_string());
    assert_eq!(value.left_ref().map(String::as_str), Some("text"));
    assert_eq!(value.right_ref(), None);
}

#[rstest]
fn swap_and_into_options() {
    let value: Either<i32, char> = Either::Right('x');
    assert_eq!(value.swap(), Either::Left('x'));
    assert_eq!(value.into_options(), (None, Some('x')));
}

#[rstest]
fn result_conversions_map_ok_to_right() {
    let ok: Result<u8, String> = Ok(1);
    assert_eq!(Either::from(ok), Either::Right(1));

    let left: Either<String, u8> = Either::Left("bad".to_string());
    assert_eq!(Result::from(left), Err("bad".to_string()));
}

#[rstest]
fn equal_payloads_on_different_sides_differ() {
    assert_ne!(Either::<u8, u8>::Left(1), Either::Right(1));
}
