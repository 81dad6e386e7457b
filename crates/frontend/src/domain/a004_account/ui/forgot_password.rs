use crate::shared::api;
use contracts::domain::a004_account::ForgotPasswordStep;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let step = RwSignal::new(ForgotPasswordStep::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut next = step.get_untracked();
        let request = match next.submit(&email.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                set_error_message.set(Some(e.to_string()));
                return;
            }
        };
        step.set(next);
        set_error_message.set(None);

        spawn_local(async move {
            let outcome = api::request_password_reset(&request).await;
            if let Err(e) = &outcome {
                log::warn!("password reset: {}", e);
            }
            step.update(|s| s.resolve(outcome));
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Saleema Tour"</h1>
                <h2>"Reset your password"</h2>

                {move || match step.get() {
                    ForgotPasswordStep::EmailSent => view! {
                        <div class="success-message">
                            <p>{format!("We sent a reset link to {}.", email.get_untracked())}</p>
                            <button class="btn-secondary" on:click=move |_| step.update(ForgotPasswordStep::reset)>
                                "Use another email"
                            </button>
                        </div>
                    }
                    .into_any(),
                    current => {
                        let failure = match &current {
                            ForgotPasswordStep::Failed(e) => Some(format!("Could not send the reset link: {}", e)),
                            _ => None,
                        };
                        let is_sending = current.is_sending();
                        view! {
                            <Show when=move || error_message.get().is_some()>
                                <div class="error-message">
                                    {move || error_message.get().unwrap_or_default()}
                                </div>
                            </Show>
                            {failure.map(|text| view! { <div class="error-message">{text}</div> })}

                            <form on:submit=on_submit>
                                <div class="form-group">
                                    <label for="email">"Email"</label>
                                    <input
                                        type="email"
                                        id="email"
                                        placeholder="you@example.com"
                                        prop:value=move || email.get_untracked()
                                        on:input=move |ev| set_email.set(event_target_value(&ev))
                                        required
                                        disabled=is_sending
                                    />
                                </div>
                                <button type="submit" class="btn-primary" disabled=is_sending>
                                    {if is_sending { "Sending..." } else { "Send reset link" }}
                                </button>
                            </form>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}
