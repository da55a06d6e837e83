#![cfg(target_arch = "wasm32")]
use crate::core::{ParticleField, ParticleParams, ParticleScene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod carousel;
mod constants;
mod core;
mod dom;
mod events;
mod form;
mod frame;
mod reveal;
mod status;

type HeroScene = ParticleScene<frame::CanvasSurface>;

fn wire_particles(document: &web::Document) -> anyhow::Result<()> {
    let Some(canvas) =
        dom::element_by_id::<web::HtmlCanvasElement>(document, constants::ID_PARTICLE_CANVAS)
    else {
        return Ok(());
    };
    let surface = frame::CanvasSurface::new(&canvas)?;
    let (w, h) = dom::size_canvas_to_viewport(&canvas);
    let mut field = ParticleField::from_entropy(ParticleParams::default());
    field.initialize(w, h);
    log::info!("[particles] {} particles on {}x{}", field.particles().len(), w, h);
    let scene: Rc<RefCell<HeroScene>> = Rc::new(RefCell::new(ParticleScene::new(field, surface)));

    // Canvas follows the viewport immediately; the field rebuilds on its next tick.
    let scene_resize = scene.clone();
    if let Some(window) = web::window() {
        dom::add_listener(window.as_ref(), "resize", move || {
            let (w, h) = dom::size_canvas_to_viewport(&canvas);
            scene_resize.borrow_mut().field.schedule_resize(w, h);
        });
    }

    // Runs for the page's lifetime; the handle is never cancelled.
    let _ = frame::start_loop(scene);
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    events::wire_header_scroll(&document);
    events::wire_mobile_menu(&document);

    // Features are wired independently.
    if let Err(e) = wire_particles(&document) {
        log::error!("[particles] disabled: {:?}", e);
    }
    if let Err(e) = carousel::wire_carousel(&document) {
        log::error!("[carousel] disabled: {:?}", e);
    }
    if let Err(e) = reveal::wire_fade_in(&document) {
        log::error!("[reveal] fade-in disabled: {:?}", e);
    }
    if let Err(e) = reveal::wire_lazy_images(&document) {
        log::error!("[reveal] lazy images disabled: {:?}", e);
    }
    form::wire_quote_form(&document);

    Ok(())
}
