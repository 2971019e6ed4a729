//! Element ids and selectors shared by the rendered page and the browser
//! behavior layer.

pub const THEME_TOGGLE_ID: &str = "theme-toggle";

pub const MENU_TOGGLE_CLASS: &str = "menu-toggle";
pub const MENU_TOGGLE_SELECTOR: &str = ".site-header .menu-toggle";
pub const HEADER_NAV_SELECTOR: &str = ".site-header nav";
pub const HEADER_NAV_LINKS_SELECTOR: &str = ".site-header nav a";
pub const ANCHOR_LINKS_SELECTOR: &str = "a[href^=\"#\"]";

pub const COPY_EMAIL_ID: &str = "copy-email-btn";
/// Attribute on the copy button carrying the address to copy
pub const EMAIL_ATTR: &str = "data-email";

pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";

/// Sections linked from the header, in page order
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];
