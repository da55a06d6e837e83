use crate::constants::{FORM_ENDPOINT, FORM_STATUS_HIDE_DELAY_MS, ID_FORM_RESULT, ID_QUOTE_FORM};
use crate::core::{encode_fields, interpret_response, StatusMessage, SubmitError};
use crate::dom;
use crate::status;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[inline]
fn js_err(e: JsValue) -> SubmitError {
    SubmitError::Network(format!("{:?}", e))
}

/// Text-valued entries of the form; file inputs are dropped.
fn collect_fields(form: &web::HtmlFormElement) -> Result<Vec<(String, Option<String>)>, SubmitError> {
    let data = web::FormData::new_with_form(form).map_err(js_err)?;
    let mut fields = Vec::new();
    if let Some(iter) = js_sys::try_iter(&data).map_err(js_err)? {
        for entry in iter {
            let pair: js_sys::Array = entry.map_err(js_err)?.unchecked_into();
            if let Some(name) = pair.get(0).as_string() {
                fields.push((name, pair.get(1).as_string()));
            }
        }
    }
    Ok(fields)
}

async fn post_json(body: String) -> Result<(), SubmitError> {
    let window = web::window().ok_or_else(|| SubmitError::Network("no window".into()))?;
    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));
    let request = web::Request::new_with_str_and_init(FORM_ENDPOINT, &opts).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(js_err)?;
    headers.set("Accept", "application/json").map_err(js_err)?;

    let resp: web::Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let text = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .unwrap_or_default();
    interpret_response(resp.status(), &text)
}

async fn submit(form: web::HtmlFormElement, result: web::HtmlElement) {
    let outcome = match collect_fields(&form) {
        Ok(fields) => {
            let body = encode_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_deref())));
            post_json(body).await
        }
        Err(e) => Err(e),
    };
    if let Err(e) = &outcome {
        log::error!("[form] submission failed: {}", e);
    }
    status::show(&result, &StatusMessage::from_outcome(&outcome));

    form.reset();
    schedule_hide(result);
}

fn schedule_hide(result: web::HtmlElement) {
    let Some(window) = web::window() else {
        return;
    };
    let hide = Closure::once(move || status::hide(&result));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide.as_ref().unchecked_ref(),
        FORM_STATUS_HIDE_DELAY_MS,
    ) {
        log::warn!("[form] could not schedule status hide: {:?}", e);
    }
    hide.forget();
}

pub fn wire_quote_form(document: &web::Document) {
    let (Some(form), Some(result)) = (
        dom::element_by_id::<web::HtmlFormElement>(document, ID_QUOTE_FORM),
        dom::element_by_id::<web::HtmlElement>(document, ID_FORM_RESULT),
    ) else {
        return;
    };
    let form_el = form.clone();
    dom::add_event_listener(form.as_ref(), "submit", move |ev| {
        ev.prevent_default();
        status::show(&result, &StatusMessage::sending());
        spawn_local(submit(form_el.clone(), result.clone()));
    });
    log::info!("[form] quote form wired to {}", FORM_ENDPOINT);
}
