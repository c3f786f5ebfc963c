//! Application footer

use leptos::prelude::*;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-4 border-t border-theme">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <p class="text-center text-sm text-theme-tertiary">
                    "© 2026 Signdesk. All rights reserved."
                </p>
            </div>
        </footer>
    }
}
