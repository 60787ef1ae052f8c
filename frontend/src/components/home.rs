//! 发现页：候选人卡片堆

use crate::api::web_api;
use crate::auth::use_session;
use crate::components::avatar::AvatarView;
use crate::components::nav_bar::NavBar;
use crate::web::{TimerPause, WebHttpClient, alert};
use campus_match::discovery::{CandidateCard, DiscoveryView, SwipeDirection, SwipeOutcome};
use campus_match::{DiscoveryController, MatchResult, Page, Pause};
use leptos::prelude::*;
use leptos::task::spawn_local;

type WebDiscovery = DiscoveryController<WebHttpClient, TimerPause>;

const LIKE_FAILURE_MESSAGE: &str = "Could not record your like. Please try again.";

#[component]
fn Card(card: CandidateCard) -> impl IntoView {
    let class = match card.dismissal {
        Some(SwipeDirection::Left) => "card bg-base-100 shadow-xl absolute inset-0 transition-all duration-300 -translate-x-full -rotate-12 opacity-0",
        Some(SwipeDirection::Right) => "card bg-base-100 shadow-xl absolute inset-0 transition-all duration-300 translate-x-full rotate-12 opacity-0",
        None => "card bg-base-100 shadow-xl absolute inset-0 transition-all duration-300",
    };

    view! {
        <div class=class>
            <figure class="h-64">
                <AvatarView avatar=card.avatar classes="w-full h-full text-6xl" />
            </figure>
            <div class="card-body">
                <h2 class="card-title">{card.headline}</h2>
                <p class="text-sm text-base-content/70">{card.college}</p>
                <p>{card.bio}</p>
                <div class="flex flex-wrap gap-1">
                    {card
                        .interests
                        .into_iter()
                        .map(|tag| view! { <span class="badge badge-outline">{tag}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let deck = StoredValue::new_local(WebDiscovery::new(web_api(), use_session(), TimerPause));
    let snapshot = RwSignal::new(DiscoveryView::Loading);
    let sync = move || snapshot.set(deck.get_value().view());

    // 初始加载
    spawn_local(async move {
        if let Err(e) = deck.get_value().load().await {
            tracing::warn!(error = %e, "discovery feed unavailable");
        }
        sync();
    });

    let swipe = move |direction: SwipeDirection| {
        let controller = deck.get_value();
        let delay = controller.swipe_delay();
        spawn_local(async move {
            // join! 先推进划动（标记被划走的卡片），再刷新视图以播放动画；
            // 动画结束后再刷新一次，不等 /like 的响应
            let (outcome, (), ()) = futures::join!(
                async {
                    match direction {
                        SwipeDirection::Right => controller.like().await,
                        SwipeDirection::Left => controller.skip().await,
                    }
                },
                async { sync() },
                async {
                    TimerPause.pause(delay).await;
                    sync();
                }
            );
            sync();
            report(outcome);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-3xl mx-auto space-y-8">
                <NavBar active=Page::Home />

                {move || match snapshot.get() {
                    DiscoveryView::Loading => view! {
                        <div class="flex justify-center py-24">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                    .into_any(),
                    DiscoveryView::Empty { message } => view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body items-center text-center">
                                <p class="text-lg">{message}</p>
                            </div>
                        </div>
                    }
                    .into_any(),
                    DiscoveryView::Stack(cards) => view! {
                        <div class="relative h-[32rem] w-full max-w-sm mx-auto">
                            {cards
                                .into_iter()
                                .map(|card| view! { <Card card=card /> })
                                .collect_view()}
                        </div>
                        <div class="flex justify-center gap-8">
                            <button class="btn btn-circle btn-lg btn-outline btn-error" on:click=move |_| swipe(SwipeDirection::Left)>
                                "✕"
                            </button>
                            <button class="btn btn-circle btn-lg btn-success" on:click=move |_| swipe(SwipeDirection::Right)>
                                "♥"
                            </button>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}

fn report(outcome: MatchResult<SwipeOutcome>) {
    match outcome {
        Ok(outcome) => {
            if let Some(notice) = outcome.match_notice() {
                alert(&notice);
            }
        }
        Err(e) => alert(e.user_message(LIKE_FAILURE_MESSAGE)),
    }
}
