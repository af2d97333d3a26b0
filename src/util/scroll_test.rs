use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn progress_starts_at_zero() {
    assert!(approx(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0));
}

#[test]
fn progress_reaches_full_at_bottom() {
    assert!(approx(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0));
}

#[test]
fn progress_is_proportional_in_between() {
    assert!(approx(scroll_progress_percent(500.0, 3000.0, 1000.0), 25.0));
}

#[test]
fn progress_clamps_overscroll() {
    assert!(approx(scroll_progress_percent(2600.0, 3000.0, 1000.0), 100.0));
    assert!(approx(scroll_progress_percent(-40.0, 3000.0, 1000.0), 0.0));
}

#[test]
fn progress_is_zero_without_scrollable_range() {
    assert!(approx(scroll_progress_percent(0.0, 800.0, 800.0), 0.0));
    assert!(approx(scroll_progress_percent(10.0, 600.0, 800.0), 0.0));
}

#[test]
fn progress_width_is_percent_string() {
    assert_eq!(progress_width_css(25.0), "25%");
    assert_eq!(progress_width_css(100.0), "100%");
}

#[test]
fn parallax_moves_against_scroll() {
    assert!(approx(parallax_offset(100.0, -0.2), -20.0));
    assert_eq!(parallax_transform_css(0.0, -0.2), "translateY(0px)");
    assert_eq!(parallax_transform_css(50.0, -0.2), "translateY(-10px)");
}
