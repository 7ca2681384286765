//! Five-day Hong Kong trip itinerary: an overview tab plus one tab per day,
//! with a private note on every timeline entry kept in `localStorage`.

pub mod components;
pub mod config;
pub mod error;
pub mod icons;
pub mod model;
pub mod notes;
pub mod tabs;

use std::rc::Rc;

use gloo::console;

use crate::components::app::{App, AppProps, LoadFailed, LoadFailedProps};
use crate::config::AppConfig;
use crate::model::Itinerary;
use crate::notes::NoteStoreHandle;

/// Mounts the app on `<body>`; expects the bundled itinerary to validate.
pub fn start() {
    let config = AppConfig::from_build_env();

    match Itinerary::bundled() {
        Ok(itinerary) => {
            console::debug!(format!(
                "itinerary loaded: {} days, assets under {:?}",
                itinerary.days.len(),
                config.base_path
            ));
            yew::Renderer::<App>::with_props(AppProps {
                itinerary: Rc::new(itinerary),
                store: NoteStoreHandle::local(),
                config,
            })
            .render();
        }
        Err(err) => {
            console::error!(format!("itinerary failed to load: {err}"));
            yew::Renderer::<LoadFailed>::with_props(LoadFailedProps {
                message: err.to_string(),
            })
            .render();
        }
    }
}
