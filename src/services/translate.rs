//! Google translate widget bootstrap.
//!
//! The widget script calls the global `googleTranslateElementInit` once it
//! has loaded; the script may also have finished before the wasm module, so
//! `install` both registers the callback and tries to initialize right away.
//! Whichever path runs first builds the widget; the other is a no-op.

use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use tracing::{debug, info, warn};

use crate::config::TranslateConfig;

pub const INIT_CALLBACK: &str = "googleTranslateElementInit";

pub fn included_languages(config: &TranslateConfig) -> String {
    config.included_languages.join(",")
}

pub fn install(config: &TranslateConfig) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let built = Rc::new(Cell::new(false));
    let cfg = config.clone();
    let cb = {
        let built = built.clone();
        Closure::<dyn Fn()>::new(move || {
            if let Err(e) = build_once(&built, || init_widget(&cfg)) {
                warn!("translate widget init failed: {:?}", e);
            }
        })
    };
    if Reflect::set(&window, &JsValue::from_str(INIT_CALLBACK), cb.as_ref()).is_err() {
        warn!("could not register {INIT_CALLBACK}");
    }
    // the script may call it at any later point
    cb.forget();

    if translate_namespace().is_some() {
        if let Err(e) = build_once(&built, || init_widget(config)) {
            warn!("translate widget init failed: {:?}", e);
        }
    }
}

/// Runs `build` unless an earlier call already produced the widget.
/// `build` reports whether it actually constructed one.
fn build_once<E>(built: &Cell<bool>, build: impl FnOnce() -> Result<bool, E>) -> Result<(), E> {
    if built.get() {
        return Ok(());
    }
    if build()? {
        built.set(true);
    }
    Ok(())
}

fn translate_namespace() -> Option<JsValue> {
    let window = web_sys::window()?;
    let google = Reflect::get(&window, &JsValue::from_str("google")).ok()?;
    if google.is_undefined() || google.is_null() {
        return None;
    }
    let translate = Reflect::get(&google, &JsValue::from_str("translate")).ok()?;
    (!translate.is_undefined() && !translate.is_null()).then_some(translate)
}

fn init_widget(config: &TranslateConfig) -> Result<bool, JsValue> {
    let Some(translate) = translate_namespace() else {
        debug!("google.translate not loaded, skipping widget");
        return Ok(false);
    };
    let ctor: Function = Reflect::get(&translate, &JsValue::from_str("TranslateElement"))?.dyn_into()?;
    let layout = Reflect::get(&ctor, &JsValue::from_str("InlineLayout"))
        .and_then(|l| Reflect::get(&l, &JsValue::from_str("SIMPLE")))
        .unwrap_or(JsValue::UNDEFINED);

    let options = Object::new();
    Reflect::set(&options, &"pageLanguage".into(), &config.page_language.as_str().into())?;
    Reflect::set(&options, &"includedLanguages".into(), &included_languages(config).into())?;
    Reflect::set(&options, &"layout".into(), &layout)?;

    let args = Array::of2(&options, &config.element_id.as_str().into());
    Reflect::construct(&ctor, &args)?;
    info!(languages = %included_languages(config), "translate widget ready");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_are_comma_joined() {
        let cfg = TranslateConfig::default();
        assert_eq!(included_languages(&cfg), "en,hi,es,fr,de,zh,ar,ru,ja,ko");
    }

    #[test]
    fn widget_is_built_once() {
        let built = Cell::new(false);
        let calls = Cell::new(0);
        let build = || -> Result<bool, ()> {
            calls.set(calls.get() + 1);
            Ok(true)
        };
        build_once(&built, build).unwrap();
        build_once(&built, build).unwrap();
        assert_eq!(calls.get(), 1);
        assert!(built.get());
    }

    #[test]
    fn not_loaded_yet_allows_retry() {
        let built = Cell::new(false);
        build_once(&built, || Ok::<_, ()>(false)).unwrap();
        assert!(!built.get());
        build_once(&built, || Ok::<_, ()>(true)).unwrap();
        assert!(built.get());
    }

    #[test]
    fn failed_build_stays_unbuilt() {
        let built = Cell::new(false);
        assert_eq!(build_once(&built, || Err::<bool, _>("TypeError")), Err("TypeError"));
        assert!(!built.get());
    }
}
