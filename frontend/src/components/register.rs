//! 注册向导页面
//!
//! 四个步骤共用一个 `RegistrationWizard`，步骤切换与校验都由它完成；
//! 页面只负责渲染当前步骤并在校验失败时弹出提示。

mod account_step;
mod credentials_step;
mod details_step;

use crate::auth::register;
use crate::components::interest_picker::InterestPicker;
use crate::web::{alert, use_router};
use account_step::AccountStep;
use campus_match::{Page, RegistrationWizard, WizardStep};
use campus_match_shared::interests::MIN_REGISTRATION_INTERESTS;
use credentials_step::CredentialsStep;
use details_step::DetailsStep;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();
    let wizard = RwSignal::new(RegistrationWizard::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 只在步骤变化时重绘，输入不会打断当前步骤
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let on_next = move |_| {
        if let Some(Err(e)) = wizard.try_update(|w| w.next()) {
            alert(e.message());
        }
    };

    let on_prev = move |_| {
        wizard.update(|w| {
            w.prev();
        });
    };

    let on_toggle = Callback::new(move |tag: &'static str| {
        if let Some(Err(e)) = wizard.try_update(|w| w.toggle_interest(tag)) {
            alert(e.message());
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let snapshot = wizard.get_untracked();
        if let Err(e) = snapshot.submission() {
            alert(e.message());
            return;
        }

        set_is_submitting.set(true);
        let router = router.clone();
        spawn_local(async move {
            if !register(router, snapshot).await {
                set_is_submitting.set(false);
            }
        });
    };

    let selected = Signal::derive(move || wizard.with(|w| w.form.interests.tags()));

    view! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-4">
            <div class="card w-full max-w-2xl shadow-2xl bg-base-100">
                <form class="card-body gap-4" on:submit=on_submit>
                    <h1 class="text-3xl font-bold text-center">"Create your account"</h1>

                    // 进度条
                    <ul class="steps w-full">
                        {WizardStep::ALL
                            .into_iter()
                            .map(|s| {
                                let class = move || {
                                    if wizard.with(|w| w.is_progress_active(s)) {
                                        "step step-primary"
                                    } else {
                                        "step"
                                    }
                                };
                                view! { <li class=class>{s.title()}</li> }
                            })
                            .collect_view()}
                    </ul>

                    {move || match step.get() {
                        WizardStep::Account => view! { <AccountStep wizard=wizard /> }.into_any(),
                        WizardStep::Credentials => view! { <CredentialsStep wizard=wizard /> }.into_any(),
                        WizardStep::Details => view! { <DetailsStep wizard=wizard /> }.into_any(),
                        WizardStep::Interests => view! {
                            <div class="space-y-2">
                                <p class="text-base-content/70">
                                    {format!("Pick at least {} interests.", MIN_REGISTRATION_INTERESTS)}
                                </p>
                                <InterestPicker selected=selected on_toggle=on_toggle />
                            </div>
                        }
                        .into_any(),
                    }}

                    <div class="flex justify-between mt-4">
                        <Show when=move || step.get() != WizardStep::Account fallback=|| view! { <span></span> }>
                            <button type="button" class="btn btn-ghost" on:click=on_prev>"Back"</button>
                        </Show>
                        <Show
                            when=move || step.get().is_last()
                            fallback=move || view! {
                                <button type="button" class="btn btn-primary" on:click=on_next>"Next"</button>
                            }
                        >
                            <button type="submit" class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Creating account..." } else { "Sign up" }}
                            </button>
                        </Show>
                    </div>

                    <p class="text-center text-sm">
                        "Already have an account? "
                        <a class="link link-primary" href=Page::Login.to_path()>"Log in"</a>
                    </p>
                </form>
            </div>
        </div>
    }
}
