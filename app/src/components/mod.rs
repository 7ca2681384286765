pub mod app;
pub mod day_view;
pub mod flight_card;
pub mod image;
pub mod note_editor;
pub mod overview;
pub mod timeline_item;
pub mod trip_header;

use yew::prelude::*;

use crate::icons::Icon;

pub fn icon_view(icon: Icon) -> Html {
    html! {
        <span class={classes!("icon", icon.class())} aria-hidden="true">{ icon.glyph() }</span>
    }
}
