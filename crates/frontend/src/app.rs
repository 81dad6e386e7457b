use crate::domain::a001_tour_package::ui::list::PackageList;
use crate::domain::a002_booking::ui::status::BookingStatusPage;
use crate::domain::a002_booking::ui::wizard::BookingWizard;
use crate::domain::a004_account::ui::forgot_password::ForgotPasswordPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <header class="site-header">
                <A href="/">"Saleema Tour"</A>
                <nav class="site-header__nav">
                    <A href="/">"Packages"</A>
                    <A href="/forgot-password">"Forgot password"</A>
                </nav>
            </header>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=PackageList />
                    <Route path=path!("/bookings/new/:package_id") view=BookingWizard />
                    <Route path=path!("/bookings/:id") view=BookingStatusPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                </Routes>
            </main>
        </Router>
    }
}
