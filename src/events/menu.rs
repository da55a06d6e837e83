use crate::constants::{CLASS_ACTIVE, ID_MAIN_NAV, ID_MENU_TOGGLE, SELECTOR_NAV_LINKS};
use crate::core::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct MenuWiring {
    toggle: web::Element,
    nav: web::Element,
    state: Rc<RefCell<MenuState>>,
}

impl MenuWiring {
    fn apply(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.toggle, CLASS_ACTIVE, open);
        dom::set_class(&self.nav, CLASS_ACTIVE, open);
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.apply();
    }
}

pub fn wire_mobile_menu(document: &web::Document) {
    let (Some(toggle), Some(nav)) = (
        dom::element_by_id::<web::Element>(document, ID_MENU_TOGGLE),
        dom::element_by_id::<web::Element>(document, ID_MAIN_NAV),
    ) else {
        return;
    };
    let w = MenuWiring {
        toggle,
        nav,
        state: Rc::new(RefCell::new(MenuState::default())),
    };

    let on_toggle = w.clone();
    dom::add_listener(w.toggle.as_ref(), "click", move || {
        on_toggle.state.borrow_mut().toggle();
        on_toggle.apply();
    });

    for link in dom::query_all(&w.nav, SELECTOR_NAV_LINKS) {
        let on_link = w.clone();
        dom::add_listener(link.as_ref(), "click", move || on_link.close());
    }

    let on_outside = w.clone();
    dom::add_event_listener(document.as_ref(), "click", move |ev| {
        let inside_nav = dom::event_inside(&ev, &on_outside.nav);
        let inside_toggle = dom::event_inside(&ev, &on_outside.toggle);
        let close = on_outside
            .state
            .borrow()
            .should_close_on_document_click(inside_nav, inside_toggle);
        if close {
            on_outside.close();
        }
    });
    log::info!("[menu] mobile navigation wired");
}
