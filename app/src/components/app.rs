use std::rc::Rc;

use gloo::console;
use yew::prelude::*;

use super::day_view::DayView;
use super::icon_view;
use super::overview::Overview;
use super::trip_header::TripHeader;
use crate::config::AppConfig;
use crate::icons::Icon;
use crate::model::Itinerary;
use crate::notes::NoteStoreHandle;
use crate::tabs::TabId;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub itinerary: Rc<Itinerary>,
    pub store: NoteStoreHandle,
    #[prop_or_default]
    pub config: AppConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let day_count = props.itinerary.day_count();
    let active = use_state(|| TabId::initial(day_count));

    let select_tab = {
        let active = active.clone();
        Callback::from(move |tab: TabId| {
            if tab.is_valid(day_count) {
                active.set(tab);
            } else {
                console::warn!(format!("ignoring unknown tab {tab}"));
            }
        })
    };

    let body = match *active {
        TabId::Overview => html! {
            <Overview itinerary={props.itinerary.clone()} on_select={select_tab.clone()} />
        },
        // Keyed per day so every note editor remounts and re-reads its key.
        TabId::Day(n) => match props.itinerary.day(n) {
            Some(day) => html! { <DayView key={day.tab_value()} day={day.clone()} /> },
            None => html! { <p class="empty">{ "找不到這一天的行程" }</p> },
        },
    };

    html! {
      <ContextProvider<NoteStoreHandle> context={props.store.clone()}>
        <ContextProvider<AppConfig> context={props.config.clone()}>
          <div class="page">
            <div class="wrap">
              <TripHeader trip={props.itinerary.trip.clone()} />

              <nav class="tabs-bar">
                <div class="tabs" role="tablist" aria-label="行程分頁">
                  {
                    for TabId::all(day_count).into_iter().map(|t| {
                      let is_active = *active == t;
                      let cls = if is_active { "tab active" } else { "tab" };
                      let select_tab = select_tab.clone();
                      html! {
                        <button
                          class={cls}
                          role="tab"
                          aria-selected={is_active.to_string()}
                          onclick={Callback::from(move |_| select_tab.emit(t))}
                        >
                          { tab_label(t) }
                        </button>
                      }
                    })
                  }
                </div>
              </nav>

              <main class="tab-panel" role="tabpanel" data-tab={active.to_string()}>
                { body }
              </main>
            </div>
          </div>
        </ContextProvider<AppConfig>>
      </ContextProvider<NoteStoreHandle>>
    }
}

fn tab_label(tab: TabId) -> Html {
    match tab {
        TabId::Overview => html! {
            <>
              { icon_view(Icon::Info) }
              <span class="tab-text">{ "總覽" }</span>
            </>
        },
        TabId::Day(n) => html! {
            <>
              <span class="tab-day">{ "Day" }</span>
              <span>{ n.to_string() }</span>
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadFailedProps {
    pub message: String,
}

/// Shown instead of the app when the bundled itinerary does not validate.
#[function_component(LoadFailed)]
pub fn load_failed(props: &LoadFailedProps) -> Html {
    html! {
      <div class="page">
        <div class="wrap">
          <div class="card load-failed">
            <h1>{ "行程資料載入失敗" }</h1>
            <p class="muted">{ props.message.clone() }</p>
          </div>
        </div>
      </div>
    }
}
