use crate::shared::api;
use crate::shared::format::format_date;
use chrono::{NaiveDate, Utc};
use contracts::domain::a001_tour_package::TourPackageId;
use contracts::domain::a002_booking::{BookingDraft, BookingId, BookingStep};
use contracts::domain::common::EntityId;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;
use thaw::*;

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Move a confirmed draft to `Submitted`; false if the form refused
fn mark_submitted(draft: &mut BookingDraft, today: NaiveDate) -> bool {
    match draft.next(today) {
        Ok(step) => step == BookingStep::Submitted,
        Err(e) => {
            log::warn!("booking form stayed on {:?}: {}", draft.step, e);
            false
        }
    }
}

#[component]
fn StepIndicator(#[prop(into)] step: Signal<BookingStep>) -> impl IntoView {
    let steps = [BookingStep::Travelers, BookingStep::Contact, BookingStep::Review];
    view! {
        <ol class="wizard-steps">
            {steps.into_iter().map(|s| view! {
                <li class=move || {
                    let current = step.get().number();
                    if s.number() == current {
                        "wizard-steps__item wizard-steps__item--active"
                    } else if s.number() < current {
                        "wizard-steps__item wizard-steps__item--done"
                    } else {
                        "wizard-steps__item"
                    }
                }>
                    {format!("{}. {}", s.number(), s.title())}
                </li>
            }).collect_view()}
        </ol>
    }
}

/// Three-step booking form for one package
#[component]
pub fn BookingWizard() -> impl IntoView {
    let params = use_params_map();

    let package_id = params
        .read_untracked()
        .get("package_id")
        .and_then(|id| TourPackageId::parse(&id).ok());

    let Some(package_id) = package_id else {
        return view! { <p class="error-message">"Unknown package"</p> }.into_any();
    };

    let draft = RwSignal::new(BookingDraft::new(package_id));
    let (error, set_error) = signal(Option::<String>::None);
    let (is_submitting, set_is_submitting) = signal(false);
    let (created, set_created) = signal(Option::<BookingId>::None);

    let step = Signal::derive(move || draft.with(|d| d.step));

    let on_next = move |_: MouseEvent| {
        let mut current = draft.get_untracked();
        match current.next(today()) {
            Ok(_) => {
                set_error.set(None);
                draft.set(current);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let on_back = move |_: MouseEvent| {
        set_error.set(None);
        draft.update(|d| {
            d.back();
        });
    };

    let on_confirm = move |_: MouseEvent| {
        let request = match draft.with_untracked(|d| d.to_request(today())) {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.to_string()));
                return;
            }
        };
        set_is_submitting.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::create_booking(&request).await {
                Ok(booking) => {
                    log::info!("booking {} created", booking.id.as_string());
                    draft.update(|d| {
                        mark_submitted(d, today());
                    });
                    set_created.set(Some(booking.id));
                }
                Err(e) => {
                    log::error!("create booking: {}", e);
                    set_error.set(Some(format!("Booking failed: {}", e)));
                }
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="page wizard">
            <h1 class="page__title">"Book your trip"</h1>
            <StepIndicator step=step />

            {move || created.get().map(|id| view! {
                <Redirect path=format!("/bookings/{}", id.as_string()) />
            })}

            <Show when=move || error.get().is_some()>
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || match step.get() {
                BookingStep::Travelers => view! {
                    <div class="form-group">
                        <label for="travelers">"Travelers"</label>
                        <input
                            type="number"
                            id="travelers"
                            min="1"
                            prop:value=move || draft.with(|d| d.travelers.to_string())
                            on:input=move |ev| {
                                let travelers = event_target_value(&ev).parse().unwrap_or(0);
                                draft.update(|d| d.travelers = travelers);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="travel-date">"Travel date"</label>
                        <input
                            type="date"
                            id="travel-date"
                            min=today().to_string()
                            prop:value=move || {
                                draft.with(|d| d.travel_date.map(|t| t.to_string()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let date = event_target_value(&ev).parse::<NaiveDate>().ok();
                                draft.update(|d| d.travel_date = date);
                            }
                        />
                    </div>
                }
                .into_any(),
                BookingStep::Contact => view! {
                    <div class="form-group">
                        <label for="customer-name">"Full name"</label>
                        <input
                            type="text"
                            id="customer-name"
                            prop:value=move || draft.with(|d| d.customer_name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.customer_name = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || draft.with(|d| d.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.email = value);
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="notes">"Notes (optional)"</label>
                        <textarea
                            id="notes"
                            prop:value=move || draft.with(|d| d.notes.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.notes = value);
                            }
                        ></textarea>
                    </div>
                }
                .into_any(),
                BookingStep::Review | BookingStep::Submitted => {
                    let d = draft.get();
                    view! {
                        <dl class="wizard-review">
                            <dt>"Travelers"</dt>
                            <dd>{d.travelers}</dd>
                            <dt>"Date"</dt>
                            <dd>{d.travel_date.map(format_date).unwrap_or_default()}</dd>
                            <dt>"Name"</dt>
                            <dd>{d.customer_name.clone()}</dd>
                            <dt>"Email"</dt>
                            <dd>{d.email.clone()}</dd>
                        </dl>
                    }
                    .into_any()
                }
            }}

            <div class="wizard-actions">
                <Show when=move || matches!(step.get(), BookingStep::Contact | BookingStep::Review)>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_back>
                        "Back"
                    </Button>
                </Show>
                <Show
                    when=move || step.get() == BookingStep::Review
                    fallback=move || view! {
                        <Button appearance=ButtonAppearance::Primary on_click=on_next>
                            "Continue"
                        </Button>
                    }
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_confirm
                        disabled=Signal::derive(move || is_submitting.get())
                    >
                        {move || if is_submitting.get() { "Booking..." } else { "Confirm booking" }}
                    </Button>
                </Show>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_draft(today: NaiveDate) -> BookingDraft {
        let mut draft = BookingDraft::new(TourPackageId::new_v4());
        draft.travelers = 2;
        draft.travel_date = Some(today);
        draft.customer_name = "Rina".to_string();
        draft.email = "rina@example.com".to_string();
        draft.next(today).unwrap();
        draft.next(today).unwrap();
        draft
    }

    #[test]
    fn test_mark_submitted() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let mut draft = review_draft(today);
        assert!(mark_submitted(&mut draft, today));
        assert_eq!(draft.step, BookingStep::Submitted);

        // a second confirmation is refused and the step is kept
        assert!(!mark_submitted(&mut draft, today));
        assert_eq!(draft.step, BookingStep::Submitted);
    }

    #[test]
    fn test_mark_submitted_from_review_with_stale_date() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let mut draft = review_draft(today);
        let tomorrow = today.succ_opt().unwrap();
        assert!(!mark_submitted(&mut draft, tomorrow));
        assert_eq!(draft.step, BookingStep::Review);
    }
}
