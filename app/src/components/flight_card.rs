use yew::prelude::*;

use super::icon_view;
use crate::icons::Icon;
use crate::model::{FlightDirection, FlightSummary};

#[derive(Properties, PartialEq)]
pub struct FlightCardProps {
    pub flight: FlightSummary,
}

/// Booked flight on the overview tab.
#[function_component(FlightCard)]
pub fn flight_card(props: &FlightCardProps) -> Html {
    let f = &props.flight;
    let (tone, plane_cls) = match f.direction {
        FlightDirection::Departure => ("tone-blue", "plane"),
        FlightDirection::Return => ("tone-green", "plane flipped"),
    };

    html! {
      <div class={classes!("flight-card", tone)}>
        <div class="flight-airline">
          <div class={classes!("flight-badge", plane_cls)}>{ icon_view(Icon::Plane) }</div>
          <div>
            <p class="strong">{ f.airline.clone() }</p>
            <p class="muted small">{ f.flight_number.clone() }</p>
          </div>
        </div>

        <div class="flight-route">
          <div class="flight-end">
            <p class="flight-time">{ f.depart_time.clone() }</p>
            <p class="muted small">{ f.from.clone() }</p>
          </div>
          <div class="flight-line">
            <p class="muted small">{ f.duration.clone() }</p>
            <div class="arrow" aria-hidden="true"></div>
          </div>
          <div class="flight-end">
            <p class="flight-time">{ f.arrive_time.clone() }</p>
            <p class="muted small">{ f.to.clone() }</p>
          </div>
        </div>

        <div class="flight-price">{ format!("${}", f.price) }</div>
      </div>
    }
}
