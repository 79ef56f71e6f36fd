use log::warn;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config;
use crate::interactions::calculator::{format_pounds, format_range, parse_rent, RentQuote};

#[function_component(RentCalculator)]
pub fn rent_calculator() -> Html {
    let rent = use_state(|| config::RENT_DEFAULT);

    let oninput = {
        let rent = rent.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_rent(&input.value()) {
                Some(value) => rent.set(value),
                None => warn!("Ignoring slider value {:?}", input.value()),
            }
        })
    };

    let quote = RentQuote::for_rent(*rent);

    html! {
        <div class="rent-calculator">
            <label for="rent-slider" class="rent-label">
                {"Monthly rent: "}<strong id="rent-value">{ format_pounds(i64::from(quote.rent)) }</strong>
            </label>
            <input
                id="rent-slider"
                type="range"
                min={config::RENT_MIN.to_string()}
                max={config::RENT_MAX.to_string()}
                step={config::RENT_STEP.to_string()}
                value={(*rent).to_string()}
                {oninput}
            />
            <div class="rent-results">
                <div class="rent-result">
                    <span class="rent-result-label">{"Our flat fee"}</span>
                    <span id="flat-fee" class="rent-result-value">{ format!("{}/month", format_pounds(quote.flat_fee)) }</span>
                </div>
                <div class="rent-result">
                    <span class="rent-result-label">{"Typical agent (10-15%)"}</span>
                    <span id="traditional-fee" class="rent-result-value">{ format!("{}/month", format_range(quote.traditional)) }</span>
                </div>
                <div class="rent-result highlight">
                    <span class="rent-result-label">{"You save"}</span>
                    <span id="annual-saving" class="rent-result-value">{ format!("{} a year", format_range(quote.annual_saving)) }</span>
                </div>
            </div>
        </div>
    }
}
