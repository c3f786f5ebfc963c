//! Login page component
//!
//! Hosts the login form; redirects home when already authenticated.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, LoginForm, use_auth_context};

/// Login page component
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    // Handle successful login
    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/", Default::default());
    };

    // Switch to register page
    let on_register_click = move |_| {
        let navigate = use_navigate();
        navigate("/register", Default::default());
    };

    view! {
        <div class="flex-1 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <LoginForm
                    on_success=Callback::new(on_success)
                    on_register_click=Callback::new(on_register_click)
                />
            </div>
        </div>
    }
}
