use yew::prelude::*;

use crate::config::AppConfig;

#[derive(Properties, PartialEq)]
pub struct ImageProps {
    /// Itinerary-relative or absolute source; `None` renders the fallback.
    pub src: Option<String>,
    pub alt: String,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub fallback: Html,
}

/// `<img>` that swaps to `fallback` when the source is missing or fails to load.
#[function_component(ImageWithFallback)]
pub fn image_with_fallback(props: &ImageProps) -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let failed = use_state(|| false);

    let src = props
        .src
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    match src {
        Some(src) if !*failed => {
            let onerror = {
                let failed = failed.clone();
                Callback::from(move |_: Event| failed.set(true))
            };
            html! {
                <img
                    class={props.class.clone()}
                    src={config.asset_url(src)}
                    alt={props.alt.clone()}
                    loading="lazy"
                    {onerror}
                />
            }
        }
        _ => html! {
            <div class={classes!(props.class.clone(), "img-fallback")} role="img" aria-label={props.alt.clone()}>
                { props.fallback.clone() }
            </div>
        },
    }
}
