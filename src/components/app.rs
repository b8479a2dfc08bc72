use super::touch_view::TouchView;
use crate::state::Settings;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(Settings::load);

    // Persist settings changes
    use_effect_with((*settings).clone(), move |s| {
        s.save();
        || ()
    });

    let on_settings_change = {
        let settings = settings.clone();
        Callback::from(move |s: Settings| settings.set(s))
    };

    html! { <TouchView settings={(*settings).clone()} on_settings_change={on_settings_change} /> }
}
