use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::interactions::intro::HeroIntro;

const HEADLINE: [&str; 3] = [
    "Property management",
    "for Landlords who want",
    "to keep their rent.",
];

#[derive(Clone, Copy, PartialEq)]
enum ScrollHint {
    Visible,
    Fading,
    Gone,
}

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub intro: HeroIntro,
    pub on_contact: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let intro = props.intro;
    // Stages: one per headline line, then the subtitle
    let revealed = use_state(|| intro.first_stage(HEADLINE.len()));
    let hint = use_state(|| ScrollHint::Visible);

    {
        let setter = revealed.setter();
        use_effect_with_deps(
            move |count: &usize| {
                if *count <= HEADLINE.len() {
                    let next = *count + 1;
                    Timeout::new(intro.step_delay_ms(), move || setter.set(next)).forget();
                }
                || ()
            },
            *revealed,
        );
    }

    {
        let setter = hint.setter();
        use_effect_with_deps(
            move |_| {
                Timeout::new(config::SCROLL_HINT_DELAY_MS, move || {
                    setter.set(ScrollHint::Fading);
                    Timeout::new(config::SCROLL_HINT_FADE_MS, move || setter.set(ScrollHint::Gone)).forget();
                })
                .forget();
                || ()
            },
            (),
        );
    }

    let hint_style = match *hint {
        ScrollHint::Visible => "",
        ScrollHint::Fading => "opacity: 0; transition: opacity 1s ease-out;",
        ScrollHint::Gone => "display: none;",
    };

    let on_contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <section id="hero-section" class="hero">
            <h1 class="hero-headline">
                { for HEADLINE.iter().enumerate().map(|(i, line)| {
                    let class = classes!("hero-line", (i < *revealed).then(|| "revealed"));
                    html! { <span {class}>{ *line }</span> }
                }) }
            </h1>
            <p class={classes!("hero-subtitle", (*revealed > HEADLINE.len()).then(|| "revealed"))}>
                {"Lettings and full management for one flat 3.6% fee. No hidden extras, no lock-in."}
            </p>
            <div class="hero-cta-group">
                <button id="open-modal" class="hero-cta" onclick={on_contact}>
                    {"Get a free consultation"}
                </button>
                <a href="https://wa.me/447700900123" target="_blank" rel="noopener noreferrer" class="hero-secondary">
                    {"Chat on WhatsApp"}
                </a>
            </div>
            <div id="scroll-indicator" class="scroll-indicator" style={hint_style} aria-hidden="true">
                {"↓"}
            </div>
        </section>
    }
}
