//! 第二步：邮箱与密码

use campus_match::RegistrationWizard;
use campus_match::auth::MIN_PASSWORD_LEN;
use leptos::prelude::*;

#[component]
pub fn CredentialsStep(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label for="email" class="label">
                <span class="label-text">"Email"</span>
            </label>
            <input id="email" required
                type="email"
                placeholder="you@college.edu"
                on:input=move |ev| wizard.update(|w| w.form.email = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.email.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="password" class="label">
                <span class="label-text">"Password"</span>
                <span class="label-text-alt">{format!("At least {} characters", MIN_PASSWORD_LEN)}</span>
            </label>
            <input id="password" required
                type="password"
                on:input=move |ev| wizard.update(|w| w.form.password = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.password.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="confirm_password" class="label">
                <span class="label-text">"Confirm Password"</span>
            </label>
            <input id="confirm_password" required
                type="password"
                on:input=move |ev| wizard.update(|w| w.form.confirm_password = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.confirm_password.clone())
                class="input input-bordered w-full"
            />
        </div>
    }
}
