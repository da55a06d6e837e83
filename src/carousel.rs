use crate::constants::{ID_TESTIMONIAL_CAROUSEL, ID_TESTIMONIAL_SLIDER};
use crate::core::{AutoplayError, Carousel, IntervalScheduler, ScheduleError, SlideTrack};
use crate::dom;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type PageCarousel = Carousel<SliderTrack, WindowInterval>;

pub struct SliderTrack {
    slider: web::HtmlElement,
}

impl SlideTrack for SliderTrack {
    fn set_offset_percent(&mut self, percent: f64) {
        _ = self
            .slider
            .style()
            .set_property("transform", &format!("translateX({}%)", percent));
    }
}

/// `setInterval`/`clearInterval` bound to a single callback.
pub struct WindowInterval {
    window: web::Window,
    callback: Closure<dyn FnMut()>,
}

impl IntervalScheduler for WindowInterval {
    type Handle = i32;

    fn schedule(&mut self, period: Duration) -> Result<i32, ScheduleError> {
        self.window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                self.callback.as_ref().unchecked_ref(),
                period.as_millis() as i32,
            )
            .map_err(|e| ScheduleError(format!("{:?}", e)))
    }

    fn cancel(&mut self, handle: i32) {
        self.window.clear_interval_with_handle(handle);
    }
}

pub fn wire_carousel(document: &web::Document) -> anyhow::Result<Option<Rc<RefCell<PageCarousel>>>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let (Some(slider), Some(container)) = (
        dom::element_by_id::<web::HtmlElement>(document, ID_TESTIMONIAL_SLIDER),
        dom::element_by_id::<web::HtmlElement>(document, ID_TESTIMONIAL_CAROUSEL),
    ) else {
        return Ok(None);
    };
    let slide_count = slider.children().length() as usize;

    // The interval callback only holds a weak reference; it is filled in once
    // the carousel exists, well before the first firing.
    let target: Rc<RefCell<Weak<RefCell<PageCarousel>>>> = Rc::new(RefCell::new(Weak::new()));
    let target_cb = target.clone();
    let callback = Closure::wrap(Box::new(move || {
        if let Some(c) = target_cb.borrow().upgrade() {
            c.borrow_mut().on_interval();
        }
    }) as Box<dyn FnMut()>);
    let scheduler = WindowInterval { window, callback };

    let carousel = match Carousel::new(SliderTrack { slider }, scheduler, slide_count) {
        Ok(c) => Rc::new(RefCell::new(c)),
        Err(AutoplayError::NoSlides) => {
            log::warn!("[carousel] #{} has no slides", ID_TESTIMONIAL_SLIDER);
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    *target.borrow_mut() = Rc::downgrade(&carousel);

    let hover_area: &web::EventTarget = container.as_ref();
    let on_enter = carousel.clone();
    dom::add_listener(hover_area, "mouseenter", move || on_enter.borrow_mut().pointer_enter());
    let on_leave = carousel.clone();
    dom::add_listener(hover_area, "mouseleave", move || on_leave.borrow_mut().pointer_leave());

    log::info!("[carousel] autoplay over {} slides", slide_count);
    Ok(Some(carousel))
}
