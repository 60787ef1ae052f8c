//! 聊天页：左侧配对列表，右侧当前会话

use crate::api::web_api;
use crate::auth::use_session;
use crate::components::avatar::AvatarView;
use crate::components::nav_bar::NavBar;
use crate::web::WebHttpClient;
use campus_match::chat::{BubbleSide, ConversationView, Delivery, MatchListView, MessageBubble};
use campus_match::{ChatController, Page};
use campus_match_shared::MatchId;
use leptos::prelude::*;
use leptos::task::spawn_local;

type WebChat = ChatController<WebHttpClient>;

#[component]
fn Bubble(bubble: MessageBubble) -> impl IntoView {
    let (align, color) = match bubble.side {
        BubbleSide::Sent => ("chat chat-end", "chat-bubble chat-bubble-primary"),
        BubbleSide::Received => ("chat chat-start", "chat-bubble"),
    };
    let (color, status) = match bubble.delivery {
        Delivery::Pending => (format!("{} opacity-60", color), Some("Sending...")),
        Delivery::Confirmed => (color.to_string(), None),
        Delivery::Failed => ("chat-bubble chat-bubble-error".to_string(), Some("Not delivered")),
    };

    view! {
        <div class=format!("{} {}", align, bubble.side.class_name())>
            <div class=color>{bubble.text}</div>
            {status.map(|s| view! { <div class="chat-footer text-xs opacity-70">{s}</div> })}
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = StoredValue::new_local(WebChat::new(web_api(), use_session()));
    let match_view = RwSignal::new(MatchListView::Loading);
    let conversation = RwSignal::new(ConversationView::Idle);
    let (draft, set_draft) = signal(String::new());

    let sync = move || {
        let controller = chat.get_value();
        match_view.set(controller.match_list());
        conversation.set(controller.conversation());
    };

    spawn_local(async move {
        if let Err(e) = chat.get_value().load_matches().await {
            tracing::warn!(error = %e, "match list unavailable");
        }
        sync();
    });

    let select = move |match_id: MatchId| {
        let controller = chat.get_value();
        spawn_local(async move {
            let (result, ()) = futures::join!(controller.select(match_id), async { sync() });
            if let Err(e) = result {
                tracing::warn!(error = %e, "conversation unavailable");
            }
            sync();
        });
    };

    let on_send = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let controller = chat.get_value();
        let text = draft.get_untracked();
        spawn_local(async move {
            let (result, ()) = futures::join!(controller.send(&text), async { sync() });
            match result {
                Ok(true) => set_draft.set(String::new()),
                Ok(false) => {}
                // 失败的消息保留在列表中并标记，输入框保留原文
                Err(e) => tracing::warn!(error = %e, "message not delivered"),
            }
            sync();
        });
    };

    let match_list = move || match match_view.get() {
        MatchListView::Loading => view! {
            <div class="flex justify-center p-8">
                <span class="loading loading-spinner text-primary"></span>
            </div>
        }
        .into_any(),
        MatchListView::Empty { message } => view! {
            <p class="p-4 text-base-content/70">{message}</p>
        }
        .into_any(),
        MatchListView::Matches(previews) => view! {
            <ul class="menu w-full">
                {previews
                    .into_iter()
                    .map(|preview| {
                        let id = preview.match_id.clone();
                        view! {
                            <li>
                                <a class=if preview.active { "active" } else { "" }
                                    on:click=move |_| select(id.clone())>
                                    <AvatarView avatar=preview.avatar classes="w-10 h-10 rounded-full" />
                                    <div>
                                        <div class="font-semibold">{preview.name}</div>
                                        <div class="text-xs opacity-70">{preview.preview}</div>
                                    </div>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    let thread = move || match conversation.get() {
        ConversationView::Idle => view! {
            <div class="flex-1 flex items-center justify-center text-base-content/60">
                "Select a match to start chatting."
            </div>
        }
        .into_any(),
        ConversationView::Loading { partner } => view! {
            <h2 class="font-bold text-lg p-4 border-b">{partner}</h2>
            <div class="flex-1 flex justify-center p-8">
                <span class="loading loading-spinner text-primary"></span>
            </div>
        }
        .into_any(),
        ConversationView::Failed { partner, message } => view! {
            <h2 class="font-bold text-lg p-4 border-b">{partner}</h2>
            <div role="alert" class="alert alert-error m-4">{message}</div>
        }
        .into_any(),
        ConversationView::Thread { partner, bubbles } => view! {
            <h2 class="font-bold text-lg p-4 border-b">{partner}</h2>
            <div class="flex-1 overflow-y-auto p-4">
                {bubbles
                    .into_iter()
                    .map(|bubble| view! { <Bubble bubble=bubble /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    let can_send = move || {
        matches!(
            conversation.get(),
            ConversationView::Loading { .. } | ConversationView::Thread { .. }
        )
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-6xl mx-auto space-y-8">
                <NavBar active=Page::Chat />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 h-[70vh]">
                    <div class="card bg-base-100 shadow-xl overflow-y-auto">
                        <h2 class="font-bold text-lg p-4 border-b">"Matches"</h2>
                        {match_list}
                    </div>
                    <div class="card bg-base-100 shadow-xl md:col-span-2 flex flex-col">
                        {thread}
                        <Show when=can_send>
                            <form class="flex gap-2 p-4 border-t" on:submit=on_send>
                                <input
                                    type="text"
                                    placeholder="Type a message..."
                                    class="input input-bordered flex-1"
                                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                                    prop:value=draft
                                />
                                <button type="submit" class="btn btn-primary">"Send"</button>
                            </form>
                        </Show>
                    </div>
                </div>
            </div>
        </div>
    }
}
