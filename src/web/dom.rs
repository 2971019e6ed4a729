//! web-sys implementations of the theme, navigation and contact ports.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Headers, HtmlDocument, HtmlElement, HtmlTextAreaElement, Request,
    RequestInit, Response, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
};

use crate::contact::{
    Clipboard, ClipboardError, ContactError, ContactSubmission, FallbackCopy, FormRelay,
    RelayResponse,
};
use crate::nav::{MenuPresenter, ScrollPort, ACTIVE_CLASS};
use crate::theme::{PreferenceStorage, StorageError, ThemeMode, ThemePresenter, DARK_THEME_CLASS};

fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

// ============ Theme ============

/// `window.localStorage`, which may be missing (privacy modes, sandboxed frames)
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("localStorage not available".into()))
    }
}

impl PreferenceStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(js_err(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Unavailable(js_err(e)))
    }
}

/// Dark class on `<body>` plus the glyph on the toggle button
pub struct BodyThemePresenter {
    body: HtmlElement,
    toggle: Element,
}

impl BodyThemePresenter {
    pub fn new(body: HtmlElement, toggle: Element) -> Self {
        Self { body, toggle }
    }
}

impl ThemePresenter for BodyThemePresenter {
    fn apply_dark(&mut self) {
        let _ = self.body.class_list().add_1(DARK_THEME_CLASS);
        self.toggle
            .set_text_content(Some(ThemeMode::Dark.indicator()));
    }

    fn apply_light(&mut self) {
        let _ = self.body.class_list().remove_1(DARK_THEME_CLASS);
        self.toggle
            .set_text_content(Some(ThemeMode::Light.indicator()));
    }
}

// ============ Navigation ============

pub struct DomMenuPresenter {
    button: Element,
    nav: Element,
}

impl DomMenuPresenter {
    pub fn new(button: Element, nav: Element) -> Self {
        Self { button, nav }
    }
}

impl MenuPresenter for DomMenuPresenter {
    fn set_open(&mut self, open: bool) {
        let _ = self.button.class_list().toggle_with_force(ACTIVE_CLASS, open);
        let _ = self.nav.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }
}

pub struct DomScroll {
    document: Document,
}

impl DomScroll {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ScrollPort for DomScroll {
    fn scroll_into_view(&mut self, id: &str) -> bool {
        let Some(target) = self.document.get_element_by_id(id) else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }
}

// ============ Clipboard ============

/// `navigator.clipboard`, looked up dynamically since insecure contexts
/// and older browsers leave it undefined
pub struct NavigatorClipboard {
    clipboard: JsValue,
}

impl NavigatorClipboard {
    pub fn detect() -> Option<Self> {
        let navigator = web_sys::window()?.navigator();
        let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return None;
        }
        Some(Self { clipboard })
    }
}

#[async_trait(?Send)]
impl Clipboard for NavigatorClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let write = js_sys::Reflect::get(&self.clipboard, &JsValue::from_str("writeText"))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or(ClipboardError::Unavailable)?;

        let promise = write
            .call1(&self.clipboard, &JsValue::from_str(text))
            .map_err(|e| ClipboardError::Rejected(js_err(e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| ClipboardError::Rejected("writeText did not return a promise".into()))?;

        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::Rejected(js_err(e)))
    }
}

/// Off-screen textarea + `document.execCommand("copy")`
pub struct TextareaFallback {
    document: Document,
}

impl TextareaFallback {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl FallbackCopy for TextareaFallback {
    fn copy_via_selection(&self, text: &str) -> Result<(), ClipboardError> {
        let failed = |e: JsValue| ClipboardError::CommandFailed(js_err(e));

        let body = self
            .document
            .body()
            .ok_or_else(|| ClipboardError::CommandFailed("document has no body".into()))?;
        let textarea: HtmlTextAreaElement = self
            .document
            .create_element("textarea")
            .map_err(failed)?
            .dyn_into()
            .map_err(|_| ClipboardError::CommandFailed("not a textarea".into()))?;

        textarea.set_value(text);
        let style = textarea.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-999999px");
        let _ = style.set_property("top", "-999999px");

        body.append_child(&textarea).map_err(failed)?;
        let _ = textarea.focus();
        textarea.select();

        let copied = match self.document.dyn_ref::<HtmlDocument>() {
            Some(html) => html.exec_command("copy").map_err(failed),
            None => Err(ClipboardError::CommandFailed("not an HTML document".into())),
        };

        let _ = body.remove_child(&textarea);

        match copied? {
            true => Ok(()),
            false => Err(ClipboardError::CommandFailed("copy command refused".into())),
        }
    }
}

// ============ Contact relay ============

/// Posts submissions to this site's `/contact` route
pub struct ProxyRelay {
    url: String,
}

impl ProxyRelay {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl FormRelay for ProxyRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse, ContactError> {
        let network = |e: JsValue| ContactError::Network(js_err(e));

        let window = web_sys::window().ok_or_else(|| ContactError::Network("No window".into()))?;

        let headers = Headers::new().map_err(network)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(network)?;
        headers.set("Accept", "application/json").map_err(network)?;

        let body = serde_json::to_string(submission)
            .map_err(|e| ContactError::Network(e.to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.url, &opts).map_err(network)?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|_| ContactError::Network("Not a Response".into()))?;

        let text = JsFuture::from(resp.text().map_err(network)?)
            .await
            .map_err(network)?
            .as_string()
            .unwrap_or_default();

        serde_json::from_str::<RelayResponse>(&text).map_err(|_| {
            ContactError::Network(format!("unexpected response ({})", resp.status()))
        })
    }
}
