//! 个人资料页：查看 / 编辑两种模式

use crate::api::web_api;
use crate::auth::use_session;
use crate::components::avatar::AvatarView;
use crate::components::interest_picker::InterestPicker;
use crate::components::nav_bar::NavBar;
use crate::web::{WebHttpClient, alert};
use campus_match::profile::{
    LOAD_FAILURE_MESSAGE, ProfileDraft, ProfileMode, ProfileView, UPDATE_FAILURE_MESSAGE,
};
use campus_match::{Page, ProfileController};
use leptos::prelude::*;
use leptos::task::spawn_local;

type WebProfile = ProfileController<WebHttpClient>;

/// 控制器状态在视图中的快照
#[derive(Clone, PartialEq)]
struct Snapshot {
    view: Option<ProfileView>,
    load_failed: bool,
    mode: ProfileMode,
    draft: ProfileDraft,
}

impl Snapshot {
    fn of(controller: &WebProfile) -> Self {
        Self {
            view: controller.view(),
            load_failed: controller.load_failed(),
            mode: controller.mode(),
            draft: controller.draft(),
        }
    }
}

#[component]
fn Field(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <div class="text-sm text-base-content/60">{label}</div>
            <div class="font-medium">{value}</div>
        </div>
    }
}

#[component]
fn ViewMode(shown: ProfileView, #[prop(into)] on_edit: Callback<()>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body gap-6">
                <div class="flex items-center gap-4">
                    <AvatarView avatar=shown.avatar classes="w-24 h-24 rounded-full text-4xl" />
                    <div>
                        <h2 class="card-title text-2xl">{shown.full_name}</h2>
                        <p class="text-base-content/70">{shown.email}</p>
                    </div>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <Field label="College" value=shown.college />
                    <Field label="Age" value=shown.age />
                    <Field label="Gender" value=shown.gender />
                    <Field label="Preference" value=shown.preference />
                </div>
                <div>
                    <div class="text-sm text-base-content/60">"Bio"</div>
                    <p>{shown.bio}</p>
                </div>
                <div class="flex flex-wrap gap-2">
                    {shown
                        .interests
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge-primary">{tag}</span> })
                        .collect_view()}
                </div>
                <div class="card-actions justify-end">
                    <button class="btn btn-primary" on:click=move |_| on_edit.run(())>"Edit Profile"</button>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = StoredValue::new_local(WebProfile::new(web_api(), use_session()));
    let snapshot = RwSignal::new(Snapshot::of(&profile.get_value()));
    let (is_saving, set_is_saving) = signal(false);
    let sync = move || snapshot.set(Snapshot::of(&profile.get_value()));

    spawn_local(async move {
        if let Err(e) = profile.get_value().load().await {
            tracing::warn!(error = %e, "profile unavailable");
        }
        sync();
    });

    let edit = move |f: fn(&mut ProfileDraft, String), value: String| {
        profile.get_value().edit_draft(|d| f(d, value));
        sync();
    };

    let on_edit = Callback::new(move |_| {
        profile.get_value().begin_edit();
        sync();
    });

    let on_cancel = move |_| {
        profile.get_value().cancel_edit();
        sync();
    };

    let on_toggle = Callback::new(move |tag: &'static str| {
        if let Err(e) = profile.get_value().toggle_interest(tag) {
            alert(e.message());
        }
        sync();
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_saving.set(true);
        let controller = profile.get_value();
        spawn_local(async move {
            match controller.submit().await {
                Ok(message) => alert(&message),
                Err(e) => alert(e.user_message(UPDATE_FAILURE_MESSAGE)),
            }
            set_is_saving.set(false);
            sync();
        });
    };

    let selected = Signal::derive(move || snapshot.with(|s| s.draft.interests.tags()));
    let draft_value = move |f: fn(&ProfileDraft) -> String| snapshot.with(|s| f(&s.draft));

    let edit_form = move || {
        view! {
            <form class="card bg-base-100 shadow-xl" on:submit=on_submit>
                <div class="card-body gap-4">
                    <h2 class="card-title">"Edit Profile"</h2>
                    <div class="form-control">
                        <label for="full_name" class="label"><span class="label-text">"Full Name"</span></label>
                        <input id="full_name" type="text" class="input input-bordered w-full"
                            on:input=move |ev| edit(|d, v| d.full_name = v, event_target_value(&ev))
                            prop:value=move || draft_value(|d| d.full_name.clone())
                        />
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="college" class="label"><span class="label-text">"College"</span></label>
                            <input id="college" type="text" class="input input-bordered w-full"
                                on:input=move |ev| edit(|d, v| d.college = v, event_target_value(&ev))
                                prop:value=move || draft_value(|d| d.college.clone())
                            />
                        </div>
                        <div class="form-control">
                            <label for="age" class="label"><span class="label-text">"Age"</span></label>
                            <input id="age" type="number" class="input input-bordered w-full"
                                on:input=move |ev| edit(|d, v| d.age = v, event_target_value(&ev))
                                prop:value=move || draft_value(|d| d.age.clone())
                            />
                        </div>
                    </div>
                    <div class="form-control">
                        <label for="bio" class="label"><span class="label-text">"Bio"</span></label>
                        <textarea id="bio" class="textarea textarea-bordered h-24"
                            on:input=move |ev| edit(|d, v| d.bio = v, event_target_value(&ev))
                            prop:value=move || draft_value(|d| d.bio.clone())
                        ></textarea>
                    </div>
                    <div class="space-y-2">
                        <p class="text-sm text-base-content/70">
                            {move || match snapshot.with(|s| s.draft.interests.cap()) {
                                Some(cap) => format!("Interests (up to {})", cap),
                                None => "Interests".to_string(),
                            }}
                        </p>
                        <InterestPicker selected=selected on_toggle=on_toggle />
                    </div>
                    <div class="card-actions justify-end">
                        <button type="button" class="btn btn-ghost" on:click=on_cancel>"Cancel"</button>
                        <button type="submit" class="btn btn-primary" disabled=move || is_saving.get()>
                            {move || if is_saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </div>
            </form>
        }
    };

    // 草稿变化不会触发整页重绘，否则输入框会丢失焦点
    let layout = Memo::new(move |_| snapshot.with(|s| (s.view.clone(), s.mode, s.load_failed)));

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-8">
                <NavBar active=Page::Profile />

                {move || {
                    let (view, mode, load_failed) = layout.get();
                    match (view, mode) {
                        (None, _) if load_failed => view! {
                            <div role="alert" class="alert alert-error">{LOAD_FAILURE_MESSAGE}</div>
                        }
                        .into_any(),
                        (None, _) => view! {
                            <div class="flex justify-center py-24">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                        .into_any(),
                        (Some(view), ProfileMode::View) => view! { <ViewMode shown=view on_edit=on_edit /> }.into_any(),
                        (Some(_), ProfileMode::Edit) => edit_form().into_any(),
                    }
                }}
            </div>
        </div>
    }
}
