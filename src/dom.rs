use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it; logs and returns None when the page
/// does not carry it.
pub fn element_by_id<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    let el = document.get_element_by_id(element_id);
    if el.is_none() {
        log::warn!("missing #{}", element_id);
    }
    el.and_then(|e| e.dyn_into::<T>().ok())
}

/// All elements matching `selector` under `root`, skipping anything that is
/// not an `Element`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = root.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn document_query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    document
        .document_element()
        .map(|root| query_all(&root, selector))
        .unwrap_or_default()
}

#[inline]
pub fn add_listener(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_event_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

/// Whether the event target sits inside `container` (or is it).
pub fn event_inside(ev: &web::Event, container: &web::Element) -> bool {
    let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
    container.contains(target.as_ref())
}

/// Match the canvas backing store to the viewport in CSS pixels.
pub fn size_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let (w, h) = viewport_size();
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    (w, h)
}

pub fn viewport_size() -> (f32, f32) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width as f32, height as f32)
}
