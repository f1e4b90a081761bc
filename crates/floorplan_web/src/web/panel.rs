use floorplan::model::SelectOption;
use floorplan::selection::Selection;
use leptos::prelude::*;

use crate::ui_model::PanelStatus;

/// The building and floor dropdowns plus a status line.
#[component]
pub(super) fn SelectionPanel(
    selection: RwSignal<Selection>,
    status: ReadSignal<PanelStatus>,
    buildings_label: String,
    floors_label: String,
    on_building: Callback<String>,
    on_floor: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="floorplan-controls">
            <form>
                <label>
                    {buildings_label}
                    <select on:change=move |ev| on_building.run(event_target_value(&ev))>
                        <For
                            each=move || selection.with(|s| s.building_options())
                            key=|o| o.value.clone()
                            children=move |o: SelectOption| {
                                let value = o.value.clone();
                                view! {
                                    <option
                                        value=o.value
                                        prop:selected=move || {
                                            selection.with(|s| s.building_value() == value)
                                        }
                                    >
                                        {o.label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
                <label>
                    {floors_label}
                    <select on:change=move |ev| on_floor.run(event_target_value(&ev))>
                        <For
                            each=move || selection.with(|s| s.floor_options())
                            key=|o| o.value.clone()
                            children=move |o: SelectOption| {
                                let value = o.value.clone();
                                view! {
                                    <option
                                        value=o.value
                                        prop:selected=move || {
                                            selection.with(|s| s.floor_value() == value)
                                        }
                                    >
                                        {o.label}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
            </form>
            <span class=move || status.with(|s| s.class())>{move || status.with(|s| s.text())}</span>
        </div>
    }
}
