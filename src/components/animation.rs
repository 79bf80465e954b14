use leptos::{html, prelude::*};

use crate::models::AnimationData;

#[cfg(feature = "hydrate")]
mod lottie {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type AnimationItem;

        #[wasm_bindgen(catch, js_namespace = lottie, js_name = loadAnimation)]
        pub fn load_animation(params: &js_sys::Object) -> Result<AnimationItem, JsValue>;

        #[wasm_bindgen(method)]
        pub fn destroy(this: &AnimationItem);
    }
}

/// Looping vector animation in the hero.
///
/// Playback is delegated to the `lottie` global. Until it is ready, or if
/// it never loads, the stage shows a CSS-only spinning disc.
#[component]
pub fn AnimationPlayer(#[prop(into)] data: Signal<AnimationData>) -> impl IntoView {
    let stage = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let player = StoredValue::new_local(None::<lottie::AnimationItem>);

        Effect::new(move |_| {
            let animation = data.get();
            let Some(el) = stage.get() else {
                return;
            };
            if let Some(previous) = player.try_update_value(Option::take).flatten() {
                previous.destroy();
            }
            match mount_player(&el, &animation) {
                Ok(item) => player.set_value(Some(item)),
                Err(err) => log::debug!("animation player unavailable: {err:?}"),
            }
        });

        on_cleanup(move || {
            if let Some(item) = player.try_update_value(Option::take).flatten() {
                item.destroy();
            }
        });
    }

    view! {
        <div
            class="animation-stage"
            node_ref=stage
            data-name=move || data.with(|d| d.name().unwrap_or_default().to_string())
            data-frame-rate=move || data.with(|d| d.frame_rate.to_string())
            data-duration=move || data.with(|d| format!("{:.2}", d.duration_secs()))
        >
            <div class="animation-fallback" aria-hidden="true"></div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn mount_player(
    container: &leptos::web_sys::HtmlDivElement,
    animation: &AnimationData,
) -> Result<lottie::AnimationItem, wasm_bindgen::JsValue> {
    use js_sys::{Object, Reflect, JSON};
    use wasm_bindgen::JsValue;

    let json = serde_json::to_string(animation).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let params = Object::new();
    Reflect::set(&params, &"container".into(), container)?;
    Reflect::set(&params, &"renderer".into(), &"svg".into())?;
    Reflect::set(&params, &"loop".into(), &JsValue::TRUE)?;
    Reflect::set(&params, &"autoplay".into(), &JsValue::TRUE)?;
    Reflect::set(&params, &"animationData".into(), &JSON::parse(&json)?)?;
    lottie::load_animation(&params)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn stage_describes_placeholder() {
        let html = render(|| view! { <AnimationPlayer data=AnimationData::placeholder() /> });
        assert!(html.contains("animation-stage"));
        assert!(html.contains(r#"data-name="ML Animation""#));
        assert!(html.contains(r#"data-frame-rate="25""#));
        assert!(html.contains(r#"data-duration="3.00""#));
    }
}
