//! 第三步：年龄、性别、偏好与简介

use campus_match::RegistrationWizard;
use leptos::prelude::*;

const GENDERS: [&str; 3] = ["Man", "Woman", "Non-binary"];
const PREFERENCES: [&str; 3] = ["Men", "Women", "Everyone"];

#[component]
fn Choice(
    id: &'static str,
    label: &'static str,
    options: [&'static str; 3],
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for=id class="label">
                <span class="label-text">{label}</span>
            </label>
            <select id=id required
                class="select select-bordered w-full"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=value
            >
                <option value="" disabled selected=move || value.get().is_empty()>"Select..."</option>
                {options
                    .into_iter()
                    .map(|o| view! { <option value=o>{o}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn DetailsStep(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let gender = Signal::derive(move || wizard.with(|w| w.form.gender.clone()));
    let preference = Signal::derive(move || wizard.with(|w| w.form.preference.clone()));

    view! {
        <div class="form-control">
            <label for="age" class="label">
                <span class="label-text">"Age"</span>
            </label>
            <input id="age" required
                type="number"
                min="18"
                on:input=move |ev| wizard.update(|w| w.form.age = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.age.clone())
                class="input input-bordered w-full"
            />
        </div>
        <Choice
            id="gender"
            label="Gender"
            options=GENDERS
            value=gender
            on_change=move |v| wizard.update(|w| w.form.gender = v)
        />
        <Choice
            id="preference"
            label="Preference"
            options=PREFERENCES
            value=preference
            on_change=move |v| wizard.update(|w| w.form.preference = v)
        />
        <div class="form-control">
            <label for="bio" class="label">
                <span class="label-text">"Bio"</span>
                <span class="label-text-alt">"Optional"</span>
            </label>
            <textarea id="bio"
                class="textarea textarea-bordered h-24"
                on:input=move |ev| wizard.update(|w| w.form.bio = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.bio.clone())
            ></textarea>
        </div>
    }
}
