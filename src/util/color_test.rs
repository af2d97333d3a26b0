use super::*;

#[test]
fn parse_hex_rgb_supports_short_and_long_forms() {
    assert_eq!(parse_hex_rgb("#ABC"), Some((170, 187, 204)));
    assert_eq!(parse_hex_rgb("  #a1B2c3 "), Some((161, 178, 195)));
}

#[test]
fn parse_hex_rgb_accepts_missing_hash() {
    assert_eq!(parse_hex_rgb("336699"), Some((51, 102, 153)));
    assert_eq!(parse_hex_rgb("fff"), Some((255, 255, 255)));
}

#[test]
fn parse_hex_rgb_rejects_invalid_inputs() {
    assert_eq!(parse_hex_rgb("#12"), None);
    assert_eq!(parse_hex_rgb("#abcd"), None);
    assert_eq!(parse_hex_rgb("#12GG34"), None);
    assert_eq!(parse_hex_rgb(""), None);
    assert_eq!(parse_hex_rgb("##abc"), None);
    assert_eq!(parse_hex_rgb("rgb(1, 2, 3)"), None);
}

#[test]
fn hex_to_rgb_triplet_formats_comma_separated() {
    assert_eq!(hex_to_rgb_triplet("#abc").as_deref(), Some("170, 187, 204"));
    assert_eq!(hex_to_rgb_triplet("336699").as_deref(), Some("51, 102, 153"));
    assert_eq!(hex_to_rgb_triplet(" #000000").as_deref(), Some("0, 0, 0"));
    assert_eq!(hex_to_rgb_triplet("#12"), None);
}

#[test]
fn color_var_names_pair_up() {
    assert_eq!(color_var("gaming"), "--color-gaming");
    assert_eq!(color_rgb_var("gaming"), "--color-gaming-rgb");
}
