use leptos::prelude::*;

/// Selection checkbox cell.
///
/// Renders a `<td>` with the checkbox inside; clicks on the checkbox do not
/// bubble into the row click handler.
#[component]
pub fn TableCheckbox(
    /// Checked state
    checked: Signal<bool>,
    /// Callback invoked with the new state
    on_change: Callback<bool>,
    /// Disable the checkbox
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </td>
    }
}
