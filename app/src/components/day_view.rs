use yew::prelude::*;

use super::icon_view;
use super::image::ImageWithFallback;
use super::timeline_item::TimelineItem;
use crate::config::maps_search_url;
use crate::icons::{weather_icon, Icon};
use crate::model::{Accommodation, DayPlan, MealKind, Meals, Weather};

#[derive(Properties, PartialEq)]
pub struct DayViewProps {
    pub day: DayPlan,
}

#[function_component(DayView)]
pub fn day_view(props: &DayViewProps) -> Html {
    let day = &props.day;
    let (date, weekday) = day.date_parts();
    let last = day.timeline.len().saturating_sub(1);

    html! {
      <div class="day-view">
        <aside class="day-side">
          <div class="day-head">
            <div class="day-number" aria-hidden="true">{ format!("{:02}", day.day) }</div>
            <h2 class="day-date">{ date.to_string() }</h2>
            <h3 class="day-weekday">{ weekday.to_string() }</h3>
          </div>

          { weather_pill(&day.weather) }

          {
            match &day.accommodation {
                Some(stay) => accommodation_card(stay),
                None => Html::default(),
            }
          }

          { dining_card(&day.meals) }
        </aside>

        <div class="timeline">
          {
            for day.timeline.iter().enumerate().map(|(index, entry)| html! {
              <TimelineItem
                  day={day.day}
                  {index}
                  entry={entry.clone()}
                  is_last={index == last}
              />
            })
          }
        </div>
      </div>
    }
}

fn weather_pill(weather: &Weather) -> Html {
    html! {
      <div class="weather-pill" title={format!("{} {}", weather.day, weather.date)}>
        <div class={classes!("weather-icon", weather.condition.as_str())}>
          { icon_view(weather_icon(weather.condition)) }
        </div>
        <div>
          <p class="weather-temp">{ format!("{}°C", weather.temp) }</p>
          <p class="muted small">{ weather.condition.as_str() }</p>
        </div>
        <div class="weather-extra muted small">
          <span>{ icon_view(Icon::Droplet) }{ format!("{}%", weather.humidity) }</span>
          <span>{ icon_view(Icon::Wind) }{ format!("{}km/h", weather.wind) }</span>
        </div>
      </div>
    }
}

fn accommodation_card(stay: &Accommodation) -> Html {
    html! {
      <div class="stay-card">
        <p class="eyebrow tone-orange">{ "ACCOMMODATION" }</p>
        <div class="stay-img-wrap">
          <ImageWithFallback
              src={stay.image.clone()}
              alt={stay.name.clone()}
              class={classes!("stay-img")}
              fallback={icon_view(Icon::Bed)}
          />
          <span class="stay-tag">{ icon_view(Icon::Moon) }{ "今晚入住" }</span>
        </div>
        <h4 class="stay-name">{ stay.name.clone() }</h4>
        <a
            class="stay-link muted small"
            href={maps_search_url(&stay.name)}
            target="_blank"
            rel="noopener noreferrer"
        >
          { icon_view(Icon::MapPin) }
          <span>{ stay.location.clone() }</span>
          { icon_view(Icon::ExternalLink) }
        </a>
      </div>
    }
}

fn dining_card(meals: &Meals) -> Html {
    let entries = meals.entries();
    if entries.is_empty() {
        return Html::default();
    }

    html! {
      <div class="card dining">
        <h3 class="eyebrow">{ "Dining" }</h3>
        {
          for entries.into_iter().map(|(kind, text)| {
            let icon = match kind {
                MealKind::Breakfast => Icon::Coffee,
                MealKind::Lunch | MealKind::Dinner => Icon::Utensils,
            };
            html! {
              <div class="meal-row">
                <div class={classes!("meal-icon", format!("meal-{kind:?}").to_lowercase())}>{ icon_view(icon) }</div>
                <div>
                  <p class="muted small strong">{ kind.label() }</p>
                  <p class="meal-text">{ text.to_string() }</p>
                </div>
              </div>
            }
          })
        }
      </div>
    }
}
