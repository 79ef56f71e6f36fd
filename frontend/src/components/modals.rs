use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

fn close_callback(on_close: &Callback<()>) -> Callback<MouseEvent> {
    let on_close = on_close.clone();
    Callback::from(move |_: MouseEvent| on_close.emit(()))
}

/// Clicks inside the panel must not reach the backdrop.
fn keep_inside() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| e.stop_propagation())
}

// Both modals stay in the DOM while hidden so their links can be bound
// for tracking on page load.

#[function_component(ContactModal)]
pub fn contact_modal(props: &ModalProps) -> Html {
    let backdrop_class = classes!("modal-backdrop", (!props.open).then(|| "hidden"));

    html! {
        <div id="contact-modal" class={backdrop_class} onclick={close_callback(&props.on_close)}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_inside()}>
                <button id="close-modal" class="modal-close" aria-label="Close"
                    onclick={close_callback(&props.on_close)}>
                    {"×"}
                </button>
                <h2>{"Talk to us about your property"}</h2>
                <p>{"Pick whichever is easiest. We reply within one working day."}</p>
                <div class="modal-options">
                    <a href="https://wa.me/447700900123" target="_blank" rel="noopener noreferrer" class="modal-option">
                        {"Message us on WhatsApp"}
                    </a>
                    <a href="https://calendly.com/managedby/intro-call" target="_blank" rel="noopener noreferrer" class="modal-option">
                        {"Book a 15 minute call"}
                    </a>
                    <a href="mailto:hello@managedby.app" class="modal-option">
                        {"Email hello@managedby.app"}
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(PrivacyModal)]
pub fn privacy_modal(props: &ModalProps) -> Html {
    let backdrop_class = classes!("modal-backdrop", (!props.open).then(|| "hidden"));

    html! {
        <div id="privacy-modal" class={backdrop_class} onclick={close_callback(&props.on_close)}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_inside()}>
                <button id="close-privacy-modal" class="modal-close" aria-label="Close"
                    onclick={close_callback(&props.on_close)}>
                    {"×"}
                </button>
                <h2>{"Privacy"}</h2>
                <p>{"With your consent we use Google Analytics to count visits and see which parts of this page are useful. \
                    We record where you arrived from and which contact option you picked, never your name or messages."}</p>
                <p>{"Your choice is stored in this browser only. Clear site data to be asked again."}</p>
            </div>
        </div>
    }
}
