use crate::core::StatusMessage;
use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement, message: &StatusMessage) {
    el.set_text_content(Some(&message.text));
    let style = el.style();
    _ = style.set_property("display", "block");
    _ = style.set_property("color", message.color);
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.style().set_property("display", "none");
}

