
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running the content service locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production: content service is served from the same origin
}

/// CMS collection holding the company's service records.
pub const SERVICES_COLLECTION: &str = "companyservices";

/// Fraction of an element that has to be on screen before it is revealed.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Stagger between sibling reveals in grids and lists.
pub const REVEAL_STAGGER_MS: u64 = 100;

/// Delay before scrolling to the service named in the URL fragment,
/// so the section exists in the DOM after the catalog arrives.
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 100;

pub const CONTACT_EMAIL: &str = "contact@luminaryforge.tech";
pub const CONTACT_PHONE: &str = "+1 (555) 123-4567";
pub const CONTACT_PHONE_HREF: &str = "tel:+15551234567";
pub const CONTACT_LOCATION: &str = "San Francisco, CA";
