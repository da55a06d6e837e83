use crate::constants::{CLASS_SCROLLED, ID_SITE_HEADER};
use crate::core::header_is_scrolled;
use crate::dom;
use web_sys as web;

pub fn wire_header_scroll(document: &web::Document) {
    let Some(header) = dom::element_by_id::<web::Element>(document, ID_SITE_HEADER) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let win = window.clone();
    dom::add_listener(window.as_ref(), "scroll", move || {
        let y = win.scroll_y().unwrap_or(0.0);
        dom::set_class(&header, CLASS_SCROLLED, header_is_scrolled(y));
    });
    log::info!("[header] scroll styling wired");
}
