//! Application header
//!
//! Top navigation bar: brand link, and either sign-in/sign-up links or the
//! signed-in user with a sign-out action, depending on auth state.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, logout, use_auth_context};
use crate::ui::icon::{Icon, icons};

/// Header component with navigation
#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth_context();

    let handle_logout = move |_| {
        logout();
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    view! {
        <header class="border-b border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <div class="w-8 h-8 bg-accent-primary rounded-lg flex items-center justify-center">
                            <svg class="w-5 h-5 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                                      d="M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z" />
                            </svg>
                        </div>
                        <span class="text-xl font-bold text-theme-primary">"Signdesk"</span>
                    </A>

                    // Navigation + auth actions
                    <div class="flex items-center gap-4">
                        <A
                            href="/"
                            attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                        >
                            "Home"
                        </A>

                        {move || {
                            match auth.state.get() {
                                AuthState::Loading => {
                                    // Skeleton while the session is restored
                                    view! {
                                        <div class="w-8 h-8 rounded-full bg-theme-secondary animate-pulse"></div>
                                    }.into_any()
                                }
                                AuthState::Unauthenticated => {
                                    view! {
                                        <div class="flex items-center gap-2">
                                            <A
                                                href="/login"
                                                attr:class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                            >
                                                "Sign In"
                                            </A>
                                            <A
                                                href="/register"
                                                attr:class="px-3 py-1.5 text-sm font-medium bg-accent-primary hover:bg-accent-primary-hover text-white rounded-lg transition-colors"
                                            >
                                                "Sign Up"
                                            </A>
                                        </div>
                                    }.into_any()
                                }
                                AuthState::Authenticated(user) => {
                                    view! {
                                        <div class="flex items-center gap-3">
                                            <span class="flex items-center gap-2 text-sm text-theme-secondary">
                                                <Icon name=icons::USER class="w-4 h-4" />
                                                {user.username.clone()}
                                            </span>
                                            <button
                                                class="px-3 py-1.5 text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors"
                                                on:click=handle_logout
                                            >
                                                "Sign Out"
                                            </button>
                                        </div>
                                    }.into_any()
                                }
                            }
                        }}
                    </div>
                </div>
            </div>
        </header>
    }
}
