use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::consent::ConsentChoice;
use crate::interactions::intro::HeroIntro;
use crate::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct PrivacyBannerProps {
    pub session: SessionHandle,
    pub intro: HeroIntro,
    /// Fired after consent is stored as accepted.
    pub on_consent: Callback<()>,
    pub on_details: Callback<()>,
}

#[derive(Clone, Copy, PartialEq)]
enum BannerPhase {
    Waiting,
    Shown,
    Dismissed,
}

#[function_component(PrivacyBanner)]
pub fn privacy_banner(props: &PrivacyBannerProps) -> Html {
    let phase = use_state(|| BannerPhase::Waiting);

    // Give the hero a moment before asking
    {
        let phase = phase.clone();
        let session = props.session.clone();
        let delay = props.intro.banner_delay_ms();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(delay, move || {
                    if session.consent.needs_decision() {
                        phase.set(BannerPhase::Shown);
                    }
                });
                timeout.forget();
                || ()
            },
            (),
        );
    }

    let on_accept = {
        let phase = phase.clone();
        let session = props.session.clone();
        let on_consent = props.on_consent.clone();
        Callback::from(move |_: MouseEvent| {
            session.record_consent(ConsentChoice::Accepted);
            on_consent.emit(());
            phase.set(BannerPhase::Dismissed);
        })
    };

    let on_decline = {
        let phase = phase.clone();
        let session = props.session.clone();
        Callback::from(move |_: MouseEvent| {
            session.record_consent(ConsentChoice::Declined);
            phase.set(BannerPhase::Dismissed);
        })
    };

    let on_details = {
        let on_details = props.on_details.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_details.emit(());
        })
    };

    let class = classes!(
        "privacy-banner",
        (*phase == BannerPhase::Shown).then(|| "show"),
        (*phase == BannerPhase::Dismissed).then(|| "hide"),
    );

    html! {
        <div id="privacy-banner" {class} role="dialog" aria-live="polite">
            <p class="privacy-text">
                {"We use cookies to understand how landlords find us. "}
                <a href="#" class="privacy-link" onclick={on_details}>{"Learn more"}</a>
            </p>
            <div class="privacy-actions">
                <button class="privacy-btn-decline" onclick={on_decline}>{"Decline"}</button>
                <button class="privacy-btn-accept" onclick={on_accept}>{"Accept"}</button>
            </div>
        </div>
    }
}
