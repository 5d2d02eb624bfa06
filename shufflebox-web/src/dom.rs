use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Current page URL, for share payloads.
#[must_use]
pub fn current_url() -> String {
    window()
        .location()
        .href()
        .unwrap_or_else(|_| String::new())
}

/// Invoke the platform share sheet with a title/text/url payload.
///
/// Feature-detects `navigator.share` through `Reflect`; when the
/// capability is absent, or the user dismisses the sheet, this is a
/// silent no-op. It never throws into the caller.
pub fn share(title: &str, text: &str, url: &str) {
    let Some(win) = web_sys::window() else {
        return;
    };
    let navigator = win.navigator();
    let Ok(share_fn) = Reflect::get(navigator.as_ref(), &JsValue::from_str("share")) else {
        return;
    };
    if !share_fn.is_function() {
        // Capability absent; the button degrades to a no-op.
        return;
    }

    let payload = js_sys::Object::new();
    let populated = Reflect::set(&payload, &"title".into(), &JsValue::from_str(title))
        .and_then(|_| Reflect::set(&payload, &"text".into(), &JsValue::from_str(text)))
        .and_then(|_| Reflect::set(&payload, &"url".into(), &JsValue::from_str(url)));
    if populated.is_err() {
        return;
    }

    let share_fn = js_sys::Function::from(share_fn);
    match share_fn.call1(navigator.as_ref(), &payload) {
        Ok(value) => {
            // Swallow the rejection a dismissed share sheet produces.
            let promise = js_sys::Promise::resolve(&value);
            wasm_bindgen_futures::spawn_local(async move {
                let _ = JsFuture::from(promise).await;
            });
        }
        Err(err) => {
            console_error(&format!("share failed: {}", js_error_message(&err)));
        }
    }
}

/// Seed material for the session RNG: wall-clock milliseconds mixed with
/// `Math.random` jitter. Good enough for a cosmetic demo draw and avoids
/// any dependency on system entropy in wasm.
#[must_use]
pub fn entropy_seed() -> u64 {
    let millis = js_sys::Date::now().max(0.0) as u64;
    let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
    (millis << 20) ^ jitter
}
