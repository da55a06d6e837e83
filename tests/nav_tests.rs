// Host-side tests for header, menu and lazy-image helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
}

use crate::core::nav::*;

#[test]
fn header_scrolled_strictly_past_threshold() {
    assert!(!header_is_scrolled(0.0));
    assert!(!header_is_scrolled(50.0));
    assert!(header_is_scrolled(50.5));
    assert!(header_is_scrolled(2_000.0));
}

#[test]
fn menu_toggle_flips_state() {
    let mut m = MenuState::default();
    assert!(!m.is_open());
    assert!(m.toggle());
    assert!(m.is_open());
    assert!(!m.toggle());
    assert!(!m.is_open());
}

#[test]
fn menu_close_is_idempotent() {
    let mut m = MenuState::default();
    m.toggle();
    m.close();
    m.close();
    assert!(!m.is_open());
}

#[test]
fn outside_click_closes_only_open_menu() {
    let mut m = MenuState::default();
    assert!(!m.should_close_on_document_click(false, false));
    m.toggle();
    assert!(m.should_close_on_document_click(false, false));
    assert!(!m.should_close_on_document_click(true, false));
    assert!(!m.should_close_on_document_click(false, true));
    assert!(!m.should_close_on_document_click(true, true));
}

#[test]
fn lazy_source_requires_non_blank_value() {
    assert_eq!(lazy_source(Some("/img/team.webp")), Some("/img/team.webp"));
    assert_eq!(lazy_source(Some("  /img/a.jpg ")), Some("/img/a.jpg"));
    assert_eq!(lazy_source(Some("   ")), None);
    assert_eq!(lazy_source(Some("")), None);
    assert_eq!(lazy_source(None), None);
}
