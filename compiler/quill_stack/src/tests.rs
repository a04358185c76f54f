use super::*;

/// Mimics the shape of the evaluator: one native frame per nesting level,
/// carrying a little state on the way down.
fn nested_sum(depth: u32) -> u64 {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            0
        } else {
            let padding = [u64::from(depth); 16];
            nested_sum(depth - 1) + padding[depth as usize % 16] / u64::from(depth)
        }
    })
}

#[test]
fn passes_through_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "quill"), "quill");
}

#[test]
fn passes_through_err() {
    let result: Result<(), String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}

#[test]
fn shallow_nesting() {
    assert_eq!(nested_sum(10), 10);
}

#[test]
fn deep_nesting_does_not_overflow() {
    // Far deeper than a default 8 MiB main-thread stack allows.
    assert_eq!(nested_sum(200_000), 200_000);
}
