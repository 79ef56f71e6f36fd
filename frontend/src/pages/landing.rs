use log::debug;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::components::hero::Hero;
use crate::components::modals::{ContactModal, PrivacyModal};
use crate::components::privacy_banner::PrivacyBanner;
use crate::components::rent_calculator::RentCalculator;
use crate::components::stage_selector::StageSelector;
use crate::interactions::binder::{self, PageBindings};
use crate::interactions::modal::{ModalAction, ModalState, OpenModal};
use crate::session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub session: SessionHandle,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let modal = use_reducer(ModalState::default);
    let intro = {
        let session = props.session.clone();
        *use_state(move || session.hero_intro())
    };
    let bindings = use_mut_ref(|| None::<PageBindings>);

    // Visitors who already accepted get tracking on every mount
    {
        let session = props.session.clone();
        let bindings = bindings.clone();
        use_effect_with_deps(
            move |_| {
                *bindings.borrow_mut() = binder::activate(&session);
                move || {
                    bindings.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_consent = {
        let session = props.session.clone();
        let bindings = bindings.clone();
        Callback::from(move |_: ()| {
            let mut bindings = bindings.borrow_mut();
            if bindings.is_none() {
                *bindings = binder::activate(&session);
            }
        })
    };

    {
        let overflow = modal.body_overflow();
        use_effect_with_deps(
            move |overflow: &&'static str| {
                if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                    if let Err(err) = body.style().set_property("overflow", overflow) {
                        debug!("Could not set body overflow: {:?}", err);
                    }
                }
                || ()
            },
            overflow,
        );
    }

    {
        let modal = modal.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                modal.dispatch(ModalAction::Close);
            }
        });
    }

    let open_contact = {
        let modal = modal.clone();
        let session = props.session.clone();
        Callback::from(move |_: ()| {
            modal.dispatch(ModalAction::OpenContact);
            session.modal_opened();
        })
    };

    let open_privacy = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::OpenPrivacy))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    let on_privacy_link = open_privacy.reform(|e: MouseEvent| e.prevent_default());

    html! {
        <div class="landing-page">
            <Hero {intro} on_contact={open_contact.clone()} />

            <section id="how-we-are-different-section" class="principles">
                <h2>{"How we are different"}</h2>
                <div class="principles-grid">
                    <div class="principle">
                        <h3>{"One flat fee"}</h3>
                        <p>{"3.6% of the rent covers letting and management. Renewals, inspections and check-outs are included."}</p>
                    </div>
                    <div class="principle">
                        <h3>{"A named manager"}</h3>
                        <p>{"You deal with one person who knows your property, not a call centre."}</p>
                    </div>
                    <div class="principle">
                        <h3>{"Leave any time"}</h3>
                        <p>{"Rolling monthly agreement. If we are not earning our fee, you can walk away."}</p>
                    </div>
                </div>
            </section>

            <section id="how-can-we-help-section" class="services">
                <h2>{"How can we help?"}</h2>
                <StageSelector />
            </section>

            <section id="pricing-section" class="pricing">
                <h2>{"See what you would save"}</h2>
                <RentCalculator />
            </section>

            <section id="cta-section" class="cta">
                <h2>{"Ready to hand over the keys?"}</h2>
                <div class="cta-actions">
                    <button class="open-modal-btn cta-primary" onclick={open_contact.reform(|_: MouseEvent| ())}>
                        {"Get in touch"}
                    </button>
                    <a href="https://calendly.com/managedby/intro-call" target="_blank" rel="noopener noreferrer" class="cta-secondary">
                        {"Book a call"}
                    </a>
                </div>
            </section>

            <footer class="site-footer">
                <span class="footer-brand">{"managedby.app"}</span>
                <nav class="footer-links">
                    <a href="mailto:hello@managedby.app">{"hello@managedby.app"}</a>
                    <a href="https://wa.me/447700900123" target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    <a href="#" id="open-privacy-modal" onclick={on_privacy_link}>{"Privacy"}</a>
                </nav>
            </footer>

            <ContactModal open={modal.is_open(OpenModal::Contact)} on_close={close_modal.clone()} />
            <PrivacyModal open={modal.is_open(OpenModal::Privacy)} on_close={close_modal} />
            <PrivacyBanner session={props.session.clone()} {intro} {on_consent} on_details={open_privacy} />
        </div>
    }
}
