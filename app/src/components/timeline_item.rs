use yew::prelude::*;

use super::icon_view;
use super::image::ImageWithFallback;
use super::note_editor::NoteEditor;
use crate::icons::{duration_icon, entry_icon, Icon};
use crate::model::{Activity, FlightLeg, GroundTransport, TimelineEntry};
use crate::notes::NoteKey;

#[derive(Properties, PartialEq)]
pub struct TimelineItemProps {
    pub day: u8,
    /// Position within the day's timeline, 0-based.
    pub index: usize,
    pub entry: TimelineEntry,
    #[prop_or_default]
    pub is_last: bool,
}

#[function_component(TimelineItem)]
pub fn timeline_item(props: &TimelineItemProps) -> Html {
    let entry = &props.entry;
    let note_key = NoteKey::for_entry(props.day, props.index, entry);
    let node_tone = if entry.is_flight() { "node flight" } else { "node" };

    let note = html! {
        <NoteEditor key={note_key.storage_key()} note_key={note_key.clone()} />
    };

    let card = match entry {
        TimelineEntry::Flight(leg) => flight_card(leg, note),
        TimelineEntry::Transport(t) => transport_card(t, entry, note),
        TimelineEntry::Activity(a) => activity_card(a, entry, note),
    };

    html! {
      <div class="tl-item">
        <div class="tl-rail">
          <div class={node_tone}>{ icon_view(entry_icon(entry)) }</div>
          if !props.is_last {
            <div class="tl-line"></div>
          }
        </div>
        <div class="tl-body">{ card }</div>
      </div>
    }
}

fn flight_card(leg: &FlightLeg, note: Html) -> Html {
    html! {
      <div class="card tl-card flight">
        <div class="tl-flight-head">
          <div>
            <span class="airline-badge">{ icon_view(Icon::Plane) }{ leg.airline.clone() }</span>
            <h4 class="tl-title">{ leg.flight_number.clone() }</h4>
          </div>
          <div class="right">
            <p class="muted small">{ "飛行時間" }</p>
            <p class="strong">{ leg.duration.clone() }</p>
          </div>
        </div>

        <div class="tl-flight-route">
          <div class="flight-end">
            <p class="flight-time">{ leg.depart_time.clone() }</p>
            <p class="airport">{ leg.from.clone() }</p>
          </div>
          <div class="flight-line">
            <div class="arrow" aria-hidden="true"></div>
            <p class="nonstop">{ "直飛" }</p>
          </div>
          <div class="flight-end">
            <p class="flight-time">{ leg.arrive_time.clone() }</p>
            <p class="airport">{ leg.to.clone() }</p>
          </div>
        </div>

        { note }
      </div>
    }
}

fn transport_card(t: &GroundTransport, entry: &TimelineEntry, note: Html) -> Html {
    html! {
      <div class="card tl-card">
        { time_chip(&t.time) }
        <h4 class="tl-title">{ t.title() }</h4>
        <p class="muted small">
          { t.mode.label() }
          {
            match t.price {
                Some(price) => html! { <span class="price">{ format!(" · ${price}") }</span> },
                None => Html::default(),
            }
          }
        </p>
        { duration_line(entry, Some(t.duration.as_str())) }
        { note }
      </div>
    }
}

fn activity_card(a: &Activity, entry: &TimelineEntry, note: Html) -> Html {
    html! {
      <div class="card tl-card">
        { time_chip(&a.time) }
        <h4 class="tl-title">{ a.title.clone() }</h4>

        if let Some(location) = non_blank(a.location.as_deref()) {
          <div class="tl-location muted">{ icon_view(Icon::MapPin) }{ location.to_string() }</div>
        }

        if let Some(description) = non_blank(a.description.as_deref()) {
          <p class="tl-desc">{ description.to_string() }</p>
        }

        // Activities without a photo simply have no image block.
        if a.image.is_some() {
          <div class="tl-img-wrap">
            <ImageWithFallback
                src={a.image.clone()}
                alt={a.title.clone()}
                class={classes!("tl-img")}
                fallback={icon_view(Icon::MapPin)}
            />
          </div>
        }

        { duration_line(entry, a.duration.as_deref()) }
        { note }
      </div>
    }
}

fn time_chip(time: &str) -> Html {
    html! {
      <div class="tl-chip-row">
        <span class="time-chip">{ icon_view(Icon::Clock) }{ time.to_string() }</span>
      </div>
    }
}

fn duration_line(entry: &TimelineEntry, duration: Option<&str>) -> Html {
    match non_blank(duration) {
        Some(text) => html! {
          <div class="tl-duration muted small">
            { icon_view(duration_icon(entry)) }
            { text.to_string() }
          </div>
        },
        None => Html::default(),
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}
