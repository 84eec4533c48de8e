pub mod console;
pub mod controller;
pub mod source;

pub use controller::{AppState, Controller};
pub use source::{DatasetSource, FileSource, HttpSource, StaticSource};

use tracing_subscriber::{fmt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::console::{TextList, TextMap};
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_basic_load_and_filter() {
        let src = StaticSource(json!({ "companies": {
            "Kinova": {
                "locations": [{ "Montreal": [45.5, -73.56] }],
                "links": { "website": "https://kinovarobotics.com", "linkedin": "" },
                "workFields": ["Robotics"]
            }
        }}));
        let mut ctl = Controller::new(TextMap::default(), TextList::default());
        ctl.init(&src).await.unwrap();
        assert_eq!(ctl.view().list().counter(), 1);
        assert_eq!(ctl.set_search("kino"), 1);
        assert_eq!(ctl.set_search("xyz"), 0);
    }
}
