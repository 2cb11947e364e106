//! Entrance animations delegated to the page's AOS and GSAP globals.
//!
//! Purely visual: no return value is consumed. Every call is guarded on a
//! qualifying element existing and tolerates the library global being
//! absent, so pages that ship without the animation scripts lose only the
//! effect.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::dom;

#[wasm_bindgen]
extern "C" {
    /// `AOS.init(options)` from the animate-on-scroll library.
    #[wasm_bindgen(catch, js_namespace = AOS, js_name = init)]
    fn aos_init(options: &JsValue) -> Result<(), JsValue>;

    /// `gsap.from(targets, vars)` from the GSAP tweening library.
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(targets: &str, vars: &JsValue) -> Result<(), JsValue>;
}

/// Fixed AOS configuration: one-shot reveals, no mirroring.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AosOptions {
    duration: u32,
    easing: &'static str,
    once: bool,
    offset: u32,
    mirror: bool,
    anchor_placement: &'static str,
}

/// GSAP `from` vars: the starting offset/opacity/blur state the elements
/// animate away from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TweenVars {
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<f64>,
    opacity: f64,
    duration: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    delay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stagger: Option<f64>,
    ease: &'static str,
    filter: &'static str,
    /// Inline styles GSAP removes once the tween completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    clear_props: Option<&'static str>,
}

/// Kick off the one-shot entrance animations for qualifying elements.
pub fn wire() {
    if dom::first("[data-aos]").is_some() {
        let options = AosOptions {
            duration: 1000,
            easing: "ease-out-quart",
            once: true,
            offset: 30,
            mirror: false,
            anchor_placement: "top-bottom",
        };
        if let Some(options) = to_js(&options) {
            let _ = aos_init(&options);
        }
    }

    if dom::first(".gs-reveal").is_some() {
        let vars = TweenVars {
            x: None,
            y: Some(30.0),
            opacity: 0.0,
            duration: 1.2,
            delay: None,
            stagger: Some(0.15),
            ease: "power2.out",
            filter: "blur(10px)",
            clear_props: Some("all"),
        };
        if let Some(vars) = to_js(&vars) {
            let _ = gsap_from(".gs-reveal", &vars);
        }
    }

    if dom::first(".gs-reveal-img").is_some() {
        let vars = TweenVars {
            x: Some(50.0),
            y: None,
            opacity: 0.0,
            duration: 1.5,
            delay: Some(0.3),
            stagger: None,
            ease: "expo.out",
            filter: "blur(5px)",
            clear_props: None,
        };
        if let Some(vars) = to_js(&vars) {
            let _ = gsap_from(".gs-reveal-img", &vars);
        }
    }
}

/// Serialize a config struct into a plain JS object.
fn to_js<T: Serialize>(value: &T) -> Option<JsValue> {
    let json = serde_json::to_string(value).ok()?;
    js_sys::JSON::parse(&json).ok()
}
