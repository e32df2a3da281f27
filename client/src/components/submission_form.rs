//! "Try it now": submit one of the backend's forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/forms` on mount. Inputs are generated from the selected form's
//! field list and are all plain text; the backend is the only validator.
//! Field inputs are bound to the draft, so switching forms (which empties the
//! draft) also blanks them.

use contract::{Backend as _, FieldSpec};
use leptos::prelude::*;

use crate::net::api::HttpBackend;
use crate::state::submit::SubmitState;
use crate::util::report;

#[component]
pub fn SubmissionForm() -> impl IntoView {
    let backend = expect_context::<HttpBackend>();
    let submit = RwSignal::new(SubmitState::default());

    let load_backend = backend.clone();
    Effect::new(move || {
        let Some(token) = submit.try_update(SubmitState::begin_forms_load) else {
            return;
        };
        let backend = load_backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.forms().await;
            report::swallow("forms", submit.try_update(|s| s.apply_forms(token, result)));
        });
    });

    let on_submit = move |_| {
        let Some((token, request)) = submit.try_update(SubmitState::begin_submit).flatten() else {
            return;
        };
        let backend = backend.clone();
        leptos::task::spawn_local(async move {
            let result = backend.create_submission(&request).await;
            report::swallow("submission", submit.try_update(|s| s.apply_result(token, result)));
        });
    };

    // Memoized so typing into a field does not rebuild the inputs.
    let options = Memo::new(move |_| {
        submit.with(|s| {
            s.forms
                .iter()
                .map(|form| (form.id.clone(), form.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let fields = Memo::new(move |_| submit.with(|s| s.selected_form().map(|form| form.fields.clone())));

    view! {
        <section class="submit" id="submit">
            <h2 class="section__title">"Try it now"</h2>
            <p class="section__subtitle">"Submit a form and route for approval."</p>
            <div class="submit__card">
                <div class="submit__layout">
                    <div class="submit__picker">
                        <label class="submit__label">"Choose form"</label>
                        <select
                            class="submit__select"
                            prop:value=move || submit.with(|s| s.selected.clone().unwrap_or_default())
                            on:change=move |ev| {
                                let form_id = event_target_value(&ev);
                                submit.update(|s| s.select(&form_id));
                            }
                        >
                            <option value="">"-- Select --"</option>
                            {move || {
                                options
                                    .get()
                                    .into_iter()
                                    .map(|(id, name)| view! { <option value=id>{name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </div>
                    <div class="submit__fields">
                        {move || match fields.get() {
                            Some(fields) => {
                                view! {
                                    <div class="submit__grid">
                                        {fields
                                            .into_iter()
                                            .map(|field| view! { <FieldInput field=field submit=submit/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! { <p class="submit__hint">"Select a form to preview fields."</p> }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
                <div class="submit__actions">
                    <button
                        class="btn submit__send"
                        on:click=on_submit
                        disabled=move || !submit.with(SubmitState::can_submit)
                    >
                        "Submit"
                    </button>
                    {move || {
                        submit
                            .with(SubmitState::result_line)
                            .map(|line| view! { <span class="submit__result">{line}</span> })
                    }}
                </div>
            </div>
        </section>
    }
}

/// Text input for one declared field, merged into the draft on every edit.
#[component]
fn FieldInput(field: FieldSpec, submit: RwSignal<SubmitState>) -> impl IntoView {
    let FieldSpec { key, label } = field;
    let value_key = key.clone();
    view! {
        <div class="submit__field">
            <label class="submit__label">{label}</label>
            <input
                class="submit__input"
                type="text"
                prop:value=move || submit.with(|s| s.field_value(&value_key).to_owned())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    submit.update(|s| {
                        s.set_field(&key, value);
                    });
                }
            />
        </div>
    }
}
