//! Home page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::auth::{AuthState, use_auth_context};

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();

    view! {
        <div class="flex-1 flex items-center justify-center relative">
            <div class="text-center px-4 max-w-3xl mx-auto py-24">
                <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight">
                    "Signdesk"
                </h1>

                {move || {
                    match auth.state.get() {
                        AuthState::Authenticated(user) => {
                            view! {
                                <p class="text-xl text-theme-secondary max-w-xl mx-auto mb-10 leading-relaxed">
                                    {format!("Welcome back, {}.", user.username)}
                                </p>
                            }.into_any()
                        }
                        _ => {
                            view! {
                                <div>
                                    <p class="text-xl text-theme-secondary max-w-xl mx-auto mb-10 leading-relaxed">
                                        "Create an account or sign in to continue."
                                    </p>
                                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                                        <A
                                            href="/register"
                                            attr:class="px-6 py-3 bg-accent-primary hover:bg-accent-primary-hover text-white font-medium rounded-lg transition-colors"
                                        >
                                            "Get Started"
                                        </A>
                                        <A
                                            href="/login"
                                            attr:class="px-6 py-3 border border-theme text-theme-primary hover:bg-theme-secondary font-medium rounded-lg transition-colors"
                                        >
                                            "Sign In"
                                        </A>
                                    </div>
                                </div>
                            }.into_any()
                        }
                    }
                }}
            </div>

            // Background decoration
            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
            </div>
        </div>
    }
}
