use std::rc::Rc;

use yew::prelude::*;

use super::flight_card::FlightCard;
use super::icon_view;
use crate::icons::Icon;
use crate::model::{DayPlan, FlightDirection, Itinerary, TipSection};
use crate::tabs::TabId;

#[derive(Properties, PartialEq)]
pub struct OverviewProps {
    pub itinerary: Rc<Itinerary>,
    pub on_select: Callback<TabId>,
}

#[function_component(Overview)]
pub fn overview(props: &OverviewProps) -> Html {
    let itinerary = &props.itinerary;

    let flight_block = |direction: FlightDirection, heading: &'static str, tone: &'static str| {
        match itinerary.flight(direction) {
            Some(flight) => html! {
              <div class="flight-block">
                <h3 class={classes!("eyebrow", tone)}>{ heading }</h3>
                <FlightCard flight={flight.clone()} />
              </div>
            },
            None => Html::default(),
        }
    };

    html! {
      <div class="overview">
        <section class="card">
          <h2 class="card-t">{ icon_view(Icon::Plane) }{ "航班資訊" }</h2>
          { flight_block(FlightDirection::Departure, "去程航班 (Departure)", "tone-blue") }
          { flight_block(FlightDirection::Return, "回程航班 (Return)", "tone-green") }
        </section>

        <section class="card">
          <h2 class="card-t">{ icon_view(Icon::MapPin) }{ "行程摘要" }</h2>
          <div class="day-grid">
            { for itinerary.days.iter().map(|day| day_summary(day, &props.on_select)) }
          </div>
        </section>

        {
          if itinerary.tips.is_empty() {
              Html::default()
          } else {
              html! {
                <section class="card tips">
                  <h2 class="card-t">{ "旅行小提示" }</h2>
                  <div class="tips-grid">
                    { for itinerary.tips.iter().map(tip_section) }
                  </div>
                </section>
              }
          }
        }
      </div>
    }
}

fn day_summary(day: &DayPlan, on_select: &Callback<TabId>) -> Html {
    let tab = TabId::Day(day.day);
    let onclick = on_select.reform(move |_: MouseEvent| tab);
    let (date, _) = day.date_parts();

    html! {
      <button class="day-summary" {onclick}>
        <h3 class="day-summary-t">{ format!("Day {}", day.day) }</h3>
        <p class="muted small">{ date.to_string() }</p>
        <ul class="day-summary-list">
          { for day.summary_titles().into_iter().map(|title| html! { <li>{ format!("• {title}") }</li> }) }
        </ul>
        <p class="more">{ "查看詳情 →" }</p>
      </button>
    }
}

fn tip_section(section: &TipSection) -> Html {
    html! {
      <div>
        <h3 class="eyebrow">{ section.title.clone() }</h3>
        <ul class="tip-list">
          {
            for section.items.iter().map(|tip| html! {
              <li>
                <span class={classes!("dot", format!("accent-{}", tip.accent))} aria-hidden="true"></span>
                { tip.text.clone() }
              </li>
            })
          }
        </ul>
      </div>
    }
}
