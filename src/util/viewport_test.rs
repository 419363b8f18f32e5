use super::*;

#[test]
fn breakpoint_width_is_mobile() {
    assert_eq!(ViewportClass::from_width(768.0, 768.0), ViewportClass::Mobile);
    assert!(ViewportClass::from_width(300.0, 768.0).is_mobile());
}

#[test]
fn wider_than_breakpoint_is_desktop() {
    assert_eq!(ViewportClass::from_width(768.5, 768.0), ViewportClass::Desktop);
    assert!(!ViewportClass::from_width(1440.0, 768.0).is_mobile());
}
