use crate::constants::*;
use crate::core::lazy_source;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type EntryHandler = Box<dyn FnMut(&web::IntersectionObserverEntry, &web::IntersectionObserver)>;

/// Observe `targets`, calling `on_visible` once per element as it scrolls
/// into view. Handlers decide whether to unobserve.
fn observe(
    targets: &[web::Element],
    init: Option<&web::IntersectionObserverInit>,
    mut on_visible: EntryHandler,
) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let observer = match init {
        Some(opts) => {
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), opts)
        }
        None => web::IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for el in targets {
        observer.observe(el);
    }
    Ok(())
}

pub fn wire_fade_in(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::document_query_all(document, SELECTOR_FADE_IN);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(FADE_IN_THRESHOLD));
    observe(
        &targets,
        Some(&init),
        Box::new(|entry, observer| {
            let el = entry.target();
            dom::set_class(&el, CLASS_VISIBLE, true);
            observer.unobserve(&el);
        }),
    )?;
    log::info!("[reveal] observing {} fade-in elements", targets.len());
    Ok(())
}

pub fn wire_lazy_images(document: &web::Document) -> anyhow::Result<()> {
    let targets = dom::document_query_all(document, SELECTOR_LAZY_IMAGES);
    observe(
        &targets,
        None,
        Box::new(|entry, observer| {
            let Ok(img) = entry.target().dyn_into::<web::HtmlImageElement>() else {
                return;
            };
            let data_src = img.dataset().get("src");
            match lazy_source(data_src.as_deref()) {
                Some(src) => {
                    img.set_src(src);
                    dom::set_class(&img, CLASS_LAZY, false);
                }
                None => log::warn!("[reveal] lazy image without data-src"),
            }
            observer.unobserve(&img);
        }),
    )?;
    log::info!("[reveal] observing {} lazy images", targets.len());
    Ok(())
}
