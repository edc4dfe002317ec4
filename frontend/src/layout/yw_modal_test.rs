use super::*;

// Element identities stand in for DOM nodes: the overlay is 1, its
// content box and close control are 2 and 3.

#[test]
fn click_on_overlay_closes() {
    assert!(is_backdrop_click(Some(&1), Some(&1)));
}

#[test]
fn click_inside_content_box_does_not_close() {
    assert!(!is_backdrop_click(Some(&2), Some(&1)));
    assert!(!is_backdrop_click(Some(&3), Some(&1)));
}

#[test]
fn unmounted_overlay_never_closes() {
    assert!(!is_backdrop_click(Some(&1), None));
}

#[test]
fn click_without_target_does_not_close() {
    assert!(!is_backdrop_click::<u32>(None, Some(&1)));
    assert!(!is_backdrop_click::<u32>(None, None));
}
