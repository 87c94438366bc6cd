//! `navigator` introspection

use demo_pages_core::environment::{Capability, ConnectionInfo, EnvironmentProbe};
use js_sys::Reflect;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserEnvironment;

fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|w| w.navigator())
}

impl EnvironmentProbe for BrowserEnvironment {
    fn online(&self) -> Capability<bool> {
        Capability::from_option(navigator().map(|n| n.on_line()))
    }

    // `navigator.connection` is Chromium-only and absent from web-sys' stable API
    fn connection(&self) -> Capability<ConnectionInfo> {
        let info = navigator().and_then(|nav| {
            let connection = Reflect::get(&nav, &JsValue::from_str("connection")).ok()?;
            if connection.is_undefined() || connection.is_null() {
                return None;
            }
            let effective_type = Reflect::get(&connection, &JsValue::from_str("effectiveType"))
                .ok()?
                .as_string()?;
            let downlink_mbps = Reflect::get(&connection, &JsValue::from_str("downlink"))
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or_default();
            Some(ConnectionInfo {
                effective_type,
                downlink_mbps,
            })
        });
        Capability::from_option(info)
    }

    fn user_agent(&self) -> Capability<String> {
        Capability::from_option(navigator().and_then(|n| n.user_agent().ok()))
    }

    fn language(&self) -> Capability<String> {
        Capability::from_option(navigator().and_then(|n| n.language()))
    }
}
