//! Service catalog: reads the `companyservices` collection once per page and
//! turns it into the lists the pages render.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, Utc};
use gloo_net::http::Request;
use log::{debug, error, info};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use yew::prelude::*;

use crate::config;
use crate::icons::Icon;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdDate", default, deserialize_with = "lenient_timestamp")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(rename = "_updatedDate", default, deserialize_with = "lenient_timestamp")]
    pub updated_date: Option<DateTime<Utc>>,
    #[serde(rename = "serviceName", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    #[serde(default)]
    pub capabilities: Option<String>,
    #[serde(rename = "serviceImage", default)]
    pub image_ref: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
}

// The CMS sends explicit nulls for cleared fields.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Timestamps are informational; anything unreadable becomes None instead of
// failing the whole collection.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_timestamp))
}

/// Reads RFC 3339 strings, plain `YYYY-MM-DD` dates and `{"$date": ...}` wrappers.
pub fn parse_timestamp(value: &serde_json::Value) -> Option<DateTime<Utc>> {
    match value {
        serde_json::Value::String(text) => DateTime::parse_from_rfc3339(text)
            .map(|stamp| stamp.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(text, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
                    .map(|midnight| midnight.and_utc())
            }),
        serde_json::Value::Object(fields) => fields.get("$date").and_then(parse_timestamp),
        _ => None,
    }
}

#[cfg(test)]
impl ServiceRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_date: None,
            updated_date: None,
            name: name.into(),
            short_description: None,
            detailed_description: None,
            capabilities: None,
            image_ref: None,
            is_featured: false,
        }
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }
}

impl ServiceRecord {
    pub fn icon(&self) -> Icon {
        resolve_icon(&self.name)
    }

    pub fn capability_list(&self) -> Vec<String> {
        parse_capabilities(self.capabilities.as_deref())
    }

    /// Link to this service's section on the services page.
    pub fn anchor_href(&self) -> String {
        format!("/services#{}", self.id)
    }
}

pub const DEFAULT_SERVICE_ICON: Icon = Icon::Code;

static SERVICE_ICONS: Lazy<HashMap<&'static str, Icon>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert("Web Development", Icon::Code);
    map.insert("App Development", Icon::Smartphone);
    map.insert("UI/UX Design", Icon::Palette);
    map.insert("3D Design", Icon::Cube);
    map.insert("Game Development", Icon::Gamepad);
    map.insert("Digital Marketing", Icon::TrendingUp);
    map
});

/// Icon for a service category. Unknown categories get [`DEFAULT_SERVICE_ICON`].
pub fn resolve_icon(name: &str) -> Icon {
    SERVICE_ICONS.get(name).copied().unwrap_or(DEFAULT_SERVICE_ICON)
}

pub fn parse_capabilities(text: Option<&str>) -> Vec<String> {
    text.unwrap_or_default()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn filter_featured(records: &[ServiceRecord]) -> Vec<ServiceRecord> {
    records.iter().filter(|record| record.is_featured).cloned().collect()
}

/// Two-digit, 1-based label shown on service cards.
pub fn service_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Both derived lists, always built from the same snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CatalogView {
    pub all: Vec<ServiceRecord>,
    pub featured: Vec<ServiceRecord>,
}

impl CatalogView {
    pub fn from_records(records: Vec<ServiceRecord>) -> Self {
        let featured = filter_featured(&records);
        Self { all: records, featured }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("request to content service failed: {0}")]
    Network(String),
    #[error("content service responded with status {0}")]
    Status(u16),
    #[error("could not decode collection: {0}")]
    Decode(String),
}

/// `{ "items": [...] }` as returned for a collection read.
#[derive(Deserialize, Debug)]
pub struct CollectionPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Read access to named CMS collections.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn get_all<T: DeserializeOwned>(&self, collection: &str) -> Result<CollectionPage<T>, ContentError>;
}

pub struct HttpContentSource {
    base_url: String,
}

impl HttpContentSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/api/collections/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(collection)
        )
    }
}

impl Default for HttpContentSource {
    fn default() -> Self {
        Self::new(config::get_backend_url())
    }
}

impl ContentSource for HttpContentSource {
    async fn get_all<T: DeserializeOwned>(&self, collection: &str) -> Result<CollectionPage<T>, ContentError> {
        let response = Request::get(&self.collection_url(collection))
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }

        response
            .json::<CollectionPage<T>>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
}

/// The service records held by one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceCatalog {
    view: CatalogView,
}

impl ServiceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the whole collection. On failure the error is logged and the
    /// records held before the call stay in place.
    pub async fn load_all<S: ContentSource>(&mut self, source: &S) -> Result<&CatalogView, ContentError> {
        match source.get_all::<ServiceRecord>(config::SERVICES_COLLECTION).await {
            Ok(page) => {
                info!("Loaded {} services", page.items.len());
                self.view = CatalogView::from_records(page.items);
                Ok(&self.view)
            }
            Err(err) => {
                error!("Failed to load services: {}", err);
                Err(err)
            }
        }
    }

    pub fn into_view(self) -> CatalogView {
        self.view
    }
}

#[cfg(test)]
impl ServiceCatalog {
    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn records(&self) -> &[ServiceRecord] {
        &self.view.all
    }

    pub fn featured(&self) -> &[ServiceRecord] {
        &self.view.featured
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub loading: bool,
    pub view: Rc<CatalogView>,
    pub error: Option<ContentError>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            loading: true,
            view: Rc::new(CatalogView::default()),
            error: None,
        }
    }
}

/// Hands a finished load to the page unless it has unmounted meanwhile.
/// Returns whether the state was applied.
pub fn deliver_if_mounted(mounted: &Cell<bool>, state: CatalogState, apply: impl FnOnce(CatalogState)) -> bool {
    if !mounted.get() {
        debug!("Page unmounted before services arrived, dropping response");
        return false;
    }
    apply(state);
    true
}

/// Loads the catalog once when the calling component mounts.
#[hook]
pub fn use_service_catalog() -> CatalogState {
    let state = use_state(CatalogState::default);

    {
        let state = state.setter();
        use_effect_with_deps(
            move |_| {
                let mounted = Rc::new(Cell::new(true));
                {
                    let mounted = mounted.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let mut catalog = ServiceCatalog::new();
                        let error = catalog.load_all(&HttpContentSource::default()).await.err();
                        let loaded = CatalogState {
                            loading: false,
                            view: Rc::new(catalog.into_view()),
                            error,
                        };
                        deliver_if_mounted(&mounted, loaded, |loaded| state.set(loaded));
                    });
                }
                move || mounted.set(false)
            },
            (),
        );
    }

    (*state).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use serde_json::json;

    struct FixedSource {
        response: Result<serde_json::Value, ContentError>,
        requests: Cell<usize>,
    }

    impl FixedSource {
        fn ok(body: serde_json::Value) -> Self {
            Self {
                response: Ok(body),
                requests: Cell::new(0),
            }
        }

        fn failing(err: ContentError) -> Self {
            Self {
                response: Err(err),
                requests: Cell::new(0),
            }
        }
    }

    impl ContentSource for FixedSource {
        async fn get_all<T: DeserializeOwned>(&self, collection: &str) -> Result<CollectionPage<T>, ContentError> {
            assert_eq!(collection, "companyservices");
            self.requests.set(self.requests.get() + 1);
            let body = self.response.clone()?;
            serde_json::from_value(body).map_err(|e| ContentError::Decode(e.to_string()))
        }
    }

    fn ids(records: &[ServiceRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn featured_filter_keeps_order_and_source() {
        let records = vec![
            ServiceRecord::new("a", "Web Development").featured(true),
            ServiceRecord::new("b", "3D Design"),
            ServiceRecord::new("c", "Game Development").featured(true),
            ServiceRecord::new("d", "Digital Marketing"),
            ServiceRecord::new("e", "UI/UX Design").featured(true),
        ];
        let before = records.clone();

        let featured = filter_featured(&records);

        assert_eq!(ids(&featured), vec!["a", "c", "e"]);
        assert!(featured.iter().all(|r| r.is_featured));
        assert_eq!(records, before);
        assert!(filter_featured(&[]).is_empty());
    }

    #[test]
    fn known_categories_have_their_own_icons() {
        assert_eq!(resolve_icon("Web Development"), Icon::Code);
        assert_eq!(resolve_icon("App Development"), Icon::Smartphone);
        assert_eq!(resolve_icon("UI/UX Design"), Icon::Palette);
        assert_eq!(resolve_icon("3D Design"), Icon::Cube);
        assert_eq!(resolve_icon("Game Development"), Icon::Gamepad);
        assert_eq!(resolve_icon("Digital Marketing"), Icon::TrendingUp);
    }

    #[test]
    fn unknown_categories_fall_back_to_default_icon() {
        for name in ["Unknown Category", "", "web development", " Web Development", "Consulting"] {
            assert_eq!(resolve_icon(name), DEFAULT_SERVICE_ICON);
            assert_eq!(resolve_icon(name), resolve_icon(name));
        }
    }

    #[test]
    fn capabilities_are_split_into_trimmed_lines() {
        assert!(parse_capabilities(None).is_empty());
        assert!(parse_capabilities(Some("")).is_empty());
        assert_eq!(parse_capabilities(Some("A\n\nB\n")), vec!["A", "B"]);
        assert_eq!(
            parse_capabilities(Some("  Responsive layouts \r\n\n   \nSEO audits\nCI/CD")),
            vec!["Responsive layouts", "SEO audits", "CI/CD"]
        );
    }

    #[test]
    fn service_numbers_are_zero_padded() {
        assert_eq!(service_number(0), "01");
        assert_eq!(service_number(8), "09");
        assert_eq!(service_number(9), "10");
        assert_eq!(service_number(123), "124");
    }

    #[test]
    fn decodes_cms_field_names() {
        let record: ServiceRecord = serde_json::from_value(json!({
            "_id": "svc-1",
            "_createdDate": "2024-03-01T10:00:00Z",
            "serviceName": "App Development",
            "shortDescription": "Native and cross-platform apps.",
            "capabilities": "iOS\nAndroid",
            "serviceImage": "wix:image://v1/abc.png/app.png#originWidth=800&originHeight=600",
            "isFeatured": true,
            "someFieldWeDoNotUse": 3
        }))
        .unwrap();

        assert_eq!(record.id, "svc-1");
        assert_eq!(record.name, "App Development");
        assert!(record.is_featured);
        assert!(record.created_date.is_some());
        assert_eq!(record.detailed_description, None);
        assert_eq!(record.capability_list(), vec!["iOS", "Android"]);
        assert_eq!(record.icon(), Icon::Smartphone);
        assert_eq!(record.anchor_href(), "/services#svc-1");
    }

    #[test]
    fn missing_and_null_fields_default() {
        let record: ServiceRecord = serde_json::from_value(json!({
            "_id": "svc-2",
            "serviceName": null,
            "isFeatured": null
        }))
        .unwrap();

        assert_eq!(record.name, "");
        assert!(!record.is_featured);
        assert!(record.capability_list().is_empty());
        assert_eq!(record.icon(), DEFAULT_SERVICE_ICON);
    }

    #[test]
    fn load_then_filter_end_to_end() {
        let source = FixedSource::ok(json!({
            "items": [
                { "_id": "1", "serviceName": "Web Development", "isFeatured": true },
                { "_id": "2", "serviceName": "Unknown Category", "isFeatured": false }
            ]
        }));
        let mut catalog = ServiceCatalog::new();

        let view = block_on(catalog.load_all(&source)).unwrap().clone();

        assert_eq!(source.requests.get(), 1);
        assert_eq!(ids(&view.all), vec!["1", "2"]);
        assert_eq!(ids(&filter_featured(catalog.records())), vec!["1"]);
        assert_eq!(ids(catalog.featured()), vec!["1"]);
        assert_eq!(resolve_icon("Unknown Category"), DEFAULT_SERVICE_ICON);
        assert_eq!(resolve_icon("Web Development"), Icon::Code);
        assert_eq!(view.all[1].icon(), DEFAULT_SERVICE_ICON);
    }

    #[test]
    fn failed_load_keeps_previous_records() {
        let mut catalog = ServiceCatalog::new();
        let first = FixedSource::ok(json!({ "items": [ { "_id": "1", "serviceName": "3D Design" } ] }));
        block_on(catalog.load_all(&first)).unwrap();

        let broken = FixedSource::failing(ContentError::Status(503));
        let err = block_on(catalog.load_all(&broken)).unwrap_err();

        assert_eq!(err, ContentError::Status(503));
        assert_eq!(ids(catalog.records()), vec!["1"]);
    }

    #[test]
    fn failed_first_load_leaves_catalog_empty() {
        let mut catalog = ServiceCatalog::new();
        let source = FixedSource::failing(ContentError::Network("offline".into()));

        assert!(block_on(catalog.load_all(&source)).is_err());
        assert!(catalog.view().is_empty());
        assert!(catalog.featured().is_empty());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let mut catalog = ServiceCatalog::new();
        let source = FixedSource::ok(json!({ "items": [ { "serviceName": "no id" } ] }));

        assert!(matches!(block_on(catalog.load_all(&source)), Err(ContentError::Decode(_))));
        assert!(catalog.view().is_empty());
    }

    #[test]
    fn missing_items_is_an_empty_page() {
        let mut catalog = ServiceCatalog::new();
        let source = FixedSource::ok(json!({}));

        assert!(block_on(catalog.load_all(&source)).unwrap().is_empty());
    }

    #[test]
    fn unreadable_timestamps_do_not_drop_records() {
        let source = FixedSource::ok(json!({
            "items": [
                { "_id": "1", "serviceName": "Web Development", "isFeatured": true,
                  "_createdDate": "2024-03-01T10:00:00Z" },
                { "_id": "2", "serviceName": "3D Design", "_createdDate": "2024-01-15",
                  "_updatedDate": { "$date": "2024-02-01T08:30:00Z" } },
                { "_id": "3", "serviceName": "Game Development", "_createdDate": "last tuesday",
                  "_updatedDate": 42 }
            ]
        }));
        let mut catalog = ServiceCatalog::new();

        let view = block_on(catalog.load_all(&source)).unwrap().clone();

        assert_eq!(ids(&view.all), vec!["1", "2", "3"]);
        assert_eq!(ids(&view.featured), vec!["1"]);
        assert_eq!(view.all[1].created_date.map(|d| d.to_rfc3339()), Some("2024-01-15T00:00:00+00:00".to_string()));
        assert!(view.all[1].updated_date.is_some());
        assert_eq!(view.all[2].created_date, None);
        assert_eq!(view.all[2].updated_date, None);
    }

    #[test]
    fn late_response_after_unmount_is_dropped() {
        let mounted = Cell::new(true);
        let applied = Cell::new(0);
        let loaded = || CatalogState {
            loading: false,
            ..CatalogState::default()
        };

        assert!(deliver_if_mounted(&mounted, loaded(), |state| {
            assert!(!state.loading);
            applied.set(applied.get() + 1);
        }));
        assert_eq!(applied.get(), 1);

        mounted.set(false);
        assert!(!deliver_if_mounted(&mounted, loaded(), |_| applied.set(applied.get() + 1)));
        assert_eq!(applied.get(), 1);
    }

    #[test]
    fn collection_urls_are_encoded() {
        let source = HttpContentSource::new("http://localhost:3001/");
        assert_eq!(
            source.collection_url("companyservices"),
            "http://localhost:3001/api/collections/companyservices"
        );
        assert_eq!(HttpContentSource::new("").collection_url("a b"), "/api/collections/a%20b");
    }
}
