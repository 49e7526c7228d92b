//! Typing effect for a hero line. Dormant unless the page config has a
//! `typing` section or the page calls `startTypingEffect` itself.

use std::cell::RefCell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

use super::{document, window};
use crate::config::Config;
use crate::consts::{DEFAULT_TYPING_PAUSE_MS, DEFAULT_TYPING_RESTART_MS, DEFAULT_TYPING_SPEED_MS};
use crate::error::DomError;
use crate::state::typing::{TypingState, TypingTiming};
use crate::util::typing_task::{self, TypingHandle};

thread_local! {
    /// Loop started from the page config, kept so `stopTypingEffect` can end it.
    static CONFIGURED: RefCell<Option<TypingHandle>> = const { RefCell::new(None) };
}

/// JS-facing stop handle for a running typing loop.
#[wasm_bindgen]
pub struct TypingEffect {
    handle: TypingHandle,
}

#[wasm_bindgen]
impl TypingEffect {
    pub fn stop(&self) {
        self.handle.stop();
    }

    #[wasm_bindgen(getter)]
    pub fn stopped(&self) -> bool {
        self.handle.is_stopped()
    }
}

/// Start typing `phrases` into the first element matching `selector`.
/// Returns `undefined` when the element is missing or `phrases` is empty.
#[wasm_bindgen(js_name = startTypingEffect)]
pub fn start_typing_effect(
    selector: &str,
    phrases: Vec<String>,
    speed_ms: Option<u32>,
    pause_ms: Option<u32>,
) -> Option<TypingEffect> {
    let timing = TypingTiming {
        speed_ms: speed_ms.unwrap_or(DEFAULT_TYPING_SPEED_MS),
        pause_ms: pause_ms.unwrap_or(DEFAULT_TYPING_PAUSE_MS),
        restart_ms: DEFAULT_TYPING_RESTART_MS,
    };
    match start(selector, &phrases, timing) {
        Ok(handle) => handle.map(|handle| TypingEffect { handle }),
        Err(err) => {
            log::warn!("typing: {err}");
            None
        }
    }
}

/// Stop the loop started from the page config, if any.
#[wasm_bindgen(js_name = stopTypingEffect)]
pub fn stop_typing_effect() {
    CONFIGURED.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

pub fn mount(config: &Config) -> Result<bool, DomError> {
    let Some(typing) = &config.typing else {
        return Ok(false);
    };
    let timing = TypingTiming { speed_ms: typing.speed_ms, pause_ms: typing.pause_ms, restart_ms: typing.restart_ms };
    let Some(handle) = start(&typing.selector, &typing.phrases, timing)? else {
        return Ok(false);
    };
    CONFIGURED.with(|slot| {
        if let Some(previous) = slot.borrow_mut().replace(handle) {
            previous.stop();
        }
    });
    Ok(true)
}

fn start(selector: &str, phrases: &[String], timing: TypingTiming) -> Result<Option<TypingHandle>, DomError> {
    let Some(target) = document(&window()?)?.query_selector(selector)? else {
        log::debug!("typing: nothing matches {selector:?}");
        return Ok(None);
    };
    let Some(state) = TypingState::new(phrases, timing) else {
        return Ok(None);
    };
    let (handle, task) = typing_task::cancellable(state, move |text| target.set_text_content(Some(text)), TimeoutFuture::new);
    spawn_local(async move {
        if task.await.is_err() {
            log::debug!("typing: stopped");
        }
    });
    Ok(Some(handle))
}
