//! Browser entry point (wasm32 only).
//!
//! Attaches the theme, navigation and contact behaviors to the server-rendered
//! page. Each feature is skipped when its elements are missing.
//!
//! Build: `wasm-pack build --target web --out-dir pkg -- --no-default-features`

mod dom;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::contact::{ContactForm, ContactSubmission, CopyOutcome, EmailCopier, FormStatus};
use crate::contact::{CONTACT_ROUTE, FEEDBACK_DURATION};
use crate::nav::{smooth_scroll, MobileMenu};
use crate::selectors::*;
use crate::theme::ThemePreferenceStore;

pub use dom::{
    BodyThemePresenter, DomMenuPresenter, DomScroll, LocalStorage, NavigatorClipboard,
    ProxyRelay, TextareaFallback,
};

#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    init_theme(&document);
    init_navigation(&document);
    init_email_copy(&document);
    init_contact_form(&document);

    web_sys::console::log_1(&"Portfolio site initialized".into());
}

/// Attach a click handler that lives as long as the page
fn on_click(target: &Element, handler: impl FnMut(Event) + 'static) {
    on_event(target, "click", handler);
}

fn on_event(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        tracing::warn!("Failed to attach {} listener: {:?}", event, e);
        return;
    }
    closure.forget();
}

fn init_theme(document: &Document) {
    let (Some(body), Some(toggle)) = (document.body(), document.get_element_by_id(THEME_TOGGLE_ID))
    else {
        return;
    };

    let mut store =
        ThemePreferenceStore::new(LocalStorage::open(), BodyThemePresenter::new(body, toggle.clone()));
    store.initialize();

    on_click(&toggle, move |_| {
        store.toggle();
    });
}

fn init_navigation(document: &Document) {
    if let (Ok(Some(button)), Ok(Some(nav))) = (
        document.query_selector(MENU_TOGGLE_SELECTOR),
        document.query_selector(HEADER_NAV_SELECTOR),
    ) {
        let menu = Rc::new(RefCell::new(MobileMenu::new(DomMenuPresenter::new(
            button.clone(),
            nav,
        ))));

        let toggle_menu = menu.clone();
        on_click(&button, move |_| {
            toggle_menu.borrow_mut().toggle();
        });

        for link in query_all(document, HEADER_NAV_LINKS_SELECTOR) {
            let menu = menu.clone();
            on_click(&link, move |_| menu.borrow_mut().close());
        }
    }

    for anchor in query_all(document, ANCHOR_LINKS_SELECTOR) {
        let mut scroll = DomScroll::new(document.clone());
        let link = anchor.clone();
        on_click(&anchor, move |event| {
            event.prevent_default();
            if let Some(href) = link.get_attribute("href") {
                smooth_scroll(&mut scroll, &href);
            }
        });
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn init_email_copy(document: &Document) {
    let Some(button) = document
        .get_element_by_id(COPY_EMAIL_ID)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(email) = button.get_attribute(EMAIL_ATTR) else {
        return;
    };

    let copier = Rc::new(EmailCopier::new(
        email,
        NavigatorClipboard::detect(),
        TextareaFallback::new(document.clone()),
    ));
    // Ignore clicks while feedback is on screen so the label is restored correctly
    let busy = Rc::new(Cell::new(false));

    let target: Element = button.clone().into();
    on_click(&target, move |_| {
        if busy.replace(true) {
            return;
        }
        let copier = copier.clone();
        let button = button.clone();
        let busy = busy.clone();
        spawn_local(async move {
            let outcome = copier.copy().await;
            show_copy_feedback(&button, outcome, busy);
        });
    });
}

fn show_copy_feedback(button: &HtmlElement, outcome: CopyOutcome, busy: Rc<Cell<bool>>) {
    let original = button.inner_html();
    button.set_text_content(Some(outcome.label()));
    if let Some(class) = outcome.class() {
        let _ = button.class_list().add_1(class);
    }

    let restore_target = button.clone();
    let restore = Closure::once_into_js(move || {
        restore_target.set_inner_html(&original);
        if let Some(class) = outcome.class() {
            let _ = restore_target.class_list().remove_1(class);
        }
        busy.set(false);
    });

    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            restore.unchecked_ref(),
            FEEDBACK_DURATION.as_millis() as i32,
        );
    }
}

fn init_contact_form(document: &Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };
    let status_line = document.get_element_by_id(FORM_STATUS_ID);

    let target: Element = form.clone().into();
    on_event(&target, "submit", move |event| {
        event.prevent_default();

        let submission = read_submission(&form);
        let form = form.clone();
        let status_line = status_line.clone();
        let submit_button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok());

        spawn_local(async move {
            let mut contact = ContactForm::new(ProxyRelay::new(CONTACT_ROUTE));
            contact.begin();
            render_status(status_line.as_ref(), contact.status());
            if let Some(button) = &submit_button {
                button.set_disabled(true);
            }

            let status = contact.submit(&submission).await.clone();
            render_status(status_line.as_ref(), &status);
            if status == FormStatus::Sent {
                form.reset();
            }

            if let Some(button) = &submit_button {
                button.set_disabled(false);
            }
        });
    });
}

fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let Ok(data) = FormData::new_with_form(form) else {
        return ContactSubmission::default();
    };
    let field = |name: &str| data.get(name).as_string().unwrap_or_default();

    ContactSubmission {
        name: field("name"),
        email: field("email"),
        subject: field("subject"),
        message: field("message"),
    }
}

fn render_status(line: Option<&Element>, status: &FormStatus) {
    if let Some(line) = line {
        line.set_text_content(Some(status.message()));
        line.set_class_name(status.class());
    }
}
