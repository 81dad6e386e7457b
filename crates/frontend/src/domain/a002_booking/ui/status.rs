use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::a003_review::ui::section::ReviewSection;
use crate::shared::api;
use crate::shared::config::config;
use crate::shared::format::{format_date, format_price};
use crate::shared::icons::icon;
use contracts::domain::a002_booking::{Booking, BookingId, PaymentStatus, Ticket};
use contracts::domain::common::EntityId;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

fn status_color(status: PaymentStatus) -> BadgeColor {
    match status {
        PaymentStatus::Pending => BadgeColor::Warning,
        PaymentStatus::Paid => BadgeColor::Success,
        PaymentStatus::Failed | PaymentStatus::Expired => BadgeColor::Danger,
        PaymentStatus::Refunded => BadgeColor::Informative,
    }
}

#[component]
fn TicketCard(ticket: Ticket) -> impl IntoView {
    view! {
        <section class="ticket">
            <header class="ticket__header">
                {icon("ticket")}
                <span class="ticket__code">{ticket.code.clone()}</span>
            </header>
            <dl class="ticket__details">
                <dt>"Package"</dt>
                <dd>{ticket.package_title.clone()}</dd>
                <dt>"Guest"</dt>
                <dd>{ticket.customer_name.clone()}</dd>
                <dt>"Travelers"</dt>
                <dd>{ticket.travelers}</dd>
                <dt>"Date"</dt>
                <dd>{format_date(ticket.travel_date)}</dd>
            </dl>
            <p class="ticket__hint">"Show this code to your guide on departure day."</p>
        </section>
    }
}

#[component]
fn BookingSummary(booking: Booking) -> impl IntoView {
    let status = booking.status;
    view! {
        <div class="booking-summary">
            <div class="booking-summary__header">
                <h2>{booking.package_title.clone()}</h2>
                <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
                    {status.display_name()}
                </Badge>
            </div>
            <p>{icon("calendar")} " " {format_date(booking.travel_date)}</p>
            <p>{format!("{} traveler(s)", booking.travelers)}</p>
            <p class="booking-summary__total">{format_price(booking.total_price)}</p>
            {(status == PaymentStatus::Pending).then(|| view! {
                <p class="booking-summary__hint">
                    "We are waiting for your payment confirmation. This page updates automatically."
                </p>
            })}
        </div>
    }
}

/// Booking status with payment tracking, ticket and review form
#[component]
pub fn BookingStatusPage() -> impl IntoView {
    let params = use_params_map();
    let booking_id = move || params.read().get("id").and_then(|id| BookingId::parse(&id).ok());

    let (booking, set_booking) = signal(Option::<Booking>::None);
    let (error, set_error) = signal(Option::<String>::None);

    // set when the page is left
    let left_page = Arc::new(AtomicBool::new(false));
    {
        let left_page = left_page.clone();
        on_cleanup(move || left_page.store(true, Ordering::Relaxed));
    }

    // each run stops the poll loop started by the previous one
    Effect::new(move |previous: Option<Arc<AtomicBool>>| {
        if let Some(previous) = previous {
            previous.store(true, Ordering::Relaxed);
        }
        let stop = Arc::new(AtomicBool::new(false));

        let Some(id) = booking_id() else {
            set_error.set(Some("Unknown booking".to_string()));
            return stop;
        };
        let poll_ms = config().api.poll_interval_ms();
        let left_page = left_page.clone();
        let stopped = stop.clone();
        let should_stop =
            move || left_page.load(Ordering::Relaxed) || stopped.load(Ordering::Relaxed);

        spawn_local(async move {
            // poll until the payment settles
            while !should_stop() {
                let result = api::fetch_booking(id).await;
                if should_stop() {
                    break;
                }
                match result {
                    Ok(current) => {
                        let settled = current.status.is_final();
                        log::debug!("booking {}: {}", id.as_string(), current.status.code());
                        set_error.set(None);
                        set_booking.set(Some(current));
                        if settled {
                            break;
                        }
                    }
                    Err(e) => {
                        log::warn!("booking {}: {}", id.as_string(), e);
                        set_error.set(Some(e));
                    }
                }
                TimeoutFuture::new(poll_ms).await;
            }
        });

        stop
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1 class="page__title">"Your booking"</h1>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || match booking.get() {
                None => view! { <p class="empty-state">"Loading booking..."</p> }.into_any(),
                Some(b) => {
                    let ticket = b.ticket();
                    let review = ticket.as_ref().map(|_| (b.package_id, b.customer_name.clone()));
                    view! {
                        <BookingSummary booking=b />
                        {ticket.map(|t| view! { <TicketCard ticket=t /> })}
                        {review.map(|(package_id, author)| view! {
                            <ReviewSection package_id=package_id default_author=author />
                        })}
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
