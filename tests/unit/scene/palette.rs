use super::*;
use crate::scene::config::ColorSchemeId;

#[test]
fn purple_matches_published_stops() {
    let s = scheme(ColorSchemeId::Purple);
    assert_eq!(s.background[0], Rgba8::rgb(0x66, 0x7e, 0xea));
    assert_eq!(s.background[1], Rgba8::rgb(0x76, 0x4b, 0xa2));
    assert!(s.text.is_white());
}

#[test]
fn every_scheme_has_opaque_stops() {
    for id in ColorSchemeId::ALL {
        let s = scheme(id);
        assert_eq!(s.background[0].a, 255, "{id:?}");
        assert_eq!(s.background[1].a, 255, "{id:?}");
        assert_eq!(s.text.a, 255, "{id:?}");
    }
}

#[test]
fn paper_is_the_dark_text_entry() {
    assert!(!scheme(ColorSchemeId::Paper).text.is_white());
    for id in ColorSchemeId::ALL {
        if id != ColorSchemeId::Paper {
            assert!(scheme(id).text.is_white(), "{id:?}");
        }
    }
}

#[test]
fn is_white_requires_full_opacity() {
    assert!(Rgba8::rgb(255, 255, 255).is_white());
    assert!(!Rgba8 { r: 255, g: 255, b: 255, a: 128 }.is_white());
    assert!(!Rgba8::rgb(254, 255, 255).is_white());
}
