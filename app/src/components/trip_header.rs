use yew::prelude::*;

use super::icon_view;
use super::image::ImageWithFallback;
use crate::icons::Icon;
use crate::model::TripData;

#[derive(Properties, PartialEq)]
pub struct TripHeaderProps {
    pub trip: TripData,
}

#[function_component(TripHeader)]
pub fn trip_header(props: &TripHeaderProps) -> Html {
    let trip = &props.trip;

    html! {
      <header class="hero">
        <div class="hero-shade" aria-hidden="true"></div>
        <ImageWithFallback
            src={trip.image.clone()}
            alt={trip.destination.clone()}
            class={classes!("hero-img")}
            fallback={html! { <div class="hero-gradient"></div> }}
        />
        <div class="hero-body">
          {
            if let Some(badge) = trip.badge.as_deref().filter(|b| !b.trim().is_empty()) {
                html! { <div class="badge">{ badge.to_string() }</div> }
            } else {
                Html::default()
            }
          }
          <h1 class="h1">{ trip.destination.clone() }</h1>
          <p class="hero-dates">
            { icon_view(Icon::Calendar) }
            <span>{ trip.start_date.clone() }</span>
            <span class="dot" aria-hidden="true"></span>
            <span>{ trip.end_date.clone() }</span>
          </p>
        </div>
      </header>
    }
}
