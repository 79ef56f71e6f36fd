use yew::prelude::*;

use crate::interactions::stage::{grid_class, ServiceColumn, Stage};

fn column_copy(column: ServiceColumn) -> (&'static str, &'static [&'static str]) {
    match column {
        ServiceColumn::GettingReady => (
            "Getting ready",
            &["Safety certificates and inventory", "Photos and listing", "Fair rent valuation"],
        ),
        ServiceColumn::FindingTenants => (
            "Finding tenants",
            &["Viewings handled for you", "Referencing and right-to-rent checks", "Deposit protection"],
        ),
        ServiceColumn::Managing => (
            "Day-to-day management",
            &["Rent collection and chasing", "Repairs with vetted trades", "Renewals and check-outs"],
        ),
    }
}

#[function_component(StageSelector)]
pub fn stage_selector() -> Html {
    let stage = use_state(Stage::default);
    let visible = stage.visible_columns();

    html! {
        <div class="stage-selector">
            <div class="stage-selector-buttons" role="tablist">
                { for Stage::ALL.iter().map(|&option| {
                    let onclick = {
                        let stage = stage.clone();
                        Callback::from(move |_: MouseEvent| stage.set(option))
                    };
                    let class = classes!("stage-selector-btn", (*stage == option).then(|| "active"));
                    html! {
                        <button {class} data-stage={option.attr()} role="tab"
                            aria-selected={(*stage == option).to_string()} {onclick}>
                            { option.label() }
                        </button>
                    }
                }) }
            </div>
            <div id="service-columns" class={grid_class(visible.len())}>
                { for ServiceColumn::ALL.iter().map(|&column| {
                    let (title, items) = column_copy(column);
                    let display = if stage.shows(column) { "display: flex" } else { "display: none" };
                    html! {
                        <div class="service-column" data-column={column.number().to_string()} style={display}>
                            <h3>{ title }</h3>
                            <ul>
                                { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
                            </ul>
                        </div>
                    }
                }) }
            </div>
        </div>
    }
}
