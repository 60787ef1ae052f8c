use crate::web::use_router;
use campus_match::{Page, ShellOutcome};
use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    let signed_in = matches!(
        use_router().outcome(),
        ShellOutcome::Authenticated { .. }
    );

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-6">
                    <h1 class="text-5xl font-bold">"Campus Match"</h1>
                    <p class="text-base-content/70">
                        "Meet people from your campus who share your interests."
                    </p>
                    {if signed_in {
                        view! {
                            <a class="btn btn-primary" href=Page::Home.to_path()>"Start discovering"</a>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="flex gap-4 justify-center">
                                <a class="btn btn-primary" href=Page::Register.to_path()>"Sign up"</a>
                                <a class="btn btn-outline" href=Page::Login.to_path()>"Log in"</a>
                            </div>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </div>
    }
}
