//! Register page component
//!
//! Hosts the registration form. Registration does not sign the user in;
//! on success they are sent to the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::ui::auth::{AuthState, RegisterForm, use_auth_context};

/// Register page component
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth_context();

    // Redirect if already authenticated
    Effect::new(move |_| {
        if matches!(auth.state.get(), AuthState::Authenticated(_)) {
            let navigate = use_navigate();
            navigate("/", Default::default());
        }
    });

    let on_success = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    let on_login_click = move |_| {
        let navigate = use_navigate();
        navigate("/login", Default::default());
    };

    view! {
        <div class="flex-1 flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                <RegisterForm
                    on_success=Callback::new(on_success)
                    on_login_click=Callback::new(on_login_click)
                />
            </div>
        </div>
    }
}
