//! Startup configuration for the HMI front-ends.
//!
//! A deployment may inject `window.__env = { BASE_URL: "..." }` before the
//! wasm bundle loads; otherwise the in-cluster default applies.

use wasm_bindgen::JsValue;

/// Prefix used when the page is reached through the in-cluster ingress.
pub const DEFAULT_BASE_PREFIX: &str = "/api/v1alpha1/";

const ENV_GLOBAL: &str = "__env";
const ENV_BASE_URL: &str = "BASE_URL";

/// API paths served next to the front-end, relative to the base prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Operations,
    SolutionStatus,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Operations => "api/executive/operations",
            Endpoint::SolutionStatus => "api/solution/status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HmiConfig {
    /// Page origin such as `https://cell.lan:17080`; empty keeps URLs relative.
    pub origin: String,
    pub base_prefix: String,
}

impl Default for HmiConfig {
    fn default() -> Self {
        Self::resolve(None, "")
    }
}

impl HmiConfig {
    /// Empty overrides count as missing, matching how the page script treats them.
    pub fn resolve(base_override: Option<String>, origin: impl Into<String>) -> Self {
        let base_prefix = base_override
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_PREFIX.to_string());
        Self {
            origin: origin.into(),
            base_prefix,
        }
    }

    /// Requests resolved against the document, with no origin and no prefix.
    pub fn relative() -> Self {
        Self {
            origin: String::new(),
            base_prefix: String::new(),
        }
    }

    /// Reads `window.__env.BASE_URL` and the page origin. Call once, before
    /// the UI is built.
    pub fn from_window() -> Self {
        let Some(win) = web_sys::window() else {
            return Self::default();
        };
        let origin = win.location().origin().unwrap_or_default();
        let env = js_sys::Reflect::get(&win, &JsValue::from_str(ENV_GLOBAL))
            .unwrap_or(JsValue::UNDEFINED);
        Self::resolve(base_override(&env), origin)
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}{}", self.origin, self.base_prefix, endpoint.path())
    }
}

/// `BASE_URL` from the injected env object. Anything but a string is ignored.
pub fn base_override(env: &JsValue) -> Option<String> {
    if !env.is_object() {
        return None;
    }
    js_sys::Reflect::get(env, &JsValue::from_str(ENV_BASE_URL))
        .ok()?
        .as_string()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn env_with(value: JsValue) -> JsValue {
        let env = js_sys::Object::new();
        js_sys::Reflect::set(&env, &JsValue::from_str(ENV_BASE_URL), &value).unwrap();
        env.into()
    }

    #[wasm_bindgen_test]
    fn string_override_is_used() {
        let env = env_with(JsValue::from_str("/ext/services/hmi/"));
        let cfg = HmiConfig::resolve(base_override(&env), "");
        assert_eq!(cfg.base_prefix, "/ext/services/hmi/");
    }

    #[wasm_bindgen_test]
    fn non_string_override_falls_back() {
        let env = env_with(JsValue::from_f64(17080.0));
        assert_eq!(base_override(&env), None);
        assert_eq!(
            HmiConfig::resolve(base_override(&env), "").base_prefix,
            DEFAULT_BASE_PREFIX
        );
    }

    #[wasm_bindgen_test]
    fn missing_env_object_falls_back() {
        assert_eq!(base_override(&JsValue::UNDEFINED), None);
        assert_eq!(base_override(&JsValue::from_str("BASE_URL")), None);
    }
}
