use super::*;

fn nest(depth: u32, grow: bool) -> u32 {
    with_stack_growth(grow, || if depth == 0 { 0 } else { nest(depth - 1, grow) + 1 })
}

#[test]
fn shallow_nesting_without_growth() {
    assert_eq!(nest(64, false), 64);
}

#[test]
fn shallow_nesting_with_growth() {
    assert_eq!(nest(64, true), 64);
}

#[test]
fn deep_nesting_grows_the_stack() {
    // Far beyond what a default 8MB main-thread stack holds for this frame size.
    assert_eq!(nest(200_000, true), 200_000);
}

#[test]
fn passes_through_closure_result() {
    let result: Result<&str, i32> = ensure_sufficient_stack(|| Ok("done"));
    assert_eq!(result, Ok("done"));
}
