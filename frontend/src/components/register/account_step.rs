//! 第一步：姓名、学校与头像照片

use campus_match::RegistrationWizard;
use campus_match::request::FileUpload;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;

/// 读取 `<input type="file">` 中选中的第一个文件
async fn read_selected_file(input: HtmlInputElement) -> Option<FileUpload> {
    let file = input.files()?.get(0)?;
    let buffer = match JsFuture::from(file.array_buffer()).await {
        Ok(buffer) => buffer,
        Err(e) => {
            tracing::warn!(error = ?e, "failed to read selected photo");
            return None;
        }
    };
    Some(FileUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}

#[component]
pub fn AccountStep(wizard: RwSignal<RegistrationWizard>) -> impl IntoView {
    let on_photo = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        spawn_local(async move {
            let photo = read_selected_file(input).await;
            wizard.update(|w| w.form.photo = photo);
        });
    };

    let photo_name = move || {
        wizard.with(|w| {
            w.form
                .photo
                .as_ref()
                .map(|p| p.file_name.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="form-control">
            <label for="full_name" class="label">
                <span class="label-text">"Full Name"</span>
            </label>
            <input id="full_name" required
                type="text"
                on:input=move |ev| wizard.update(|w| w.form.full_name = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.full_name.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="college" class="label">
                <span class="label-text">"College"</span>
            </label>
            <input id="college" required
                type="text"
                on:input=move |ev| wizard.update(|w| w.form.college = event_target_value(&ev))
                prop:value=move || wizard.with(|w| w.form.college.clone())
                class="input input-bordered w-full"
            />
        </div>
        <div class="form-control">
            <label for="photo" class="label">
                <span class="label-text">"Profile Photo"</span>
                <span class="label-text-alt">{photo_name}</span>
            </label>
            <input id="photo"
                type="file"
                accept="image/*"
                on:change=on_photo
                class="file-input file-input-bordered w-full"
            />
        </div>
    }
}
