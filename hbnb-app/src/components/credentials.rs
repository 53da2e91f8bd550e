use leptos::{ev, *};

use hbnb_boundary::Credentials;

const INPUT_CLASS: &str = "form-control block w-full px-3 py-1.5 text-base font-normal text-gray-700 bg-white bg-clip-padding border border-solid border-gray-300 rounded transition ease-in-out m-0 focus:text-gray-700 focus:bg-white focus:outline-none";

#[component]
pub fn CredentialsForm(
    title: &'static str,
    description: &'static str,
    submit_credentials_label: &'static str,
    initial_credentials: Credentials,
    submit_credentials_action: Action<Credentials, ()>,
    error: Signal<Option<String>>,
    disabled: Signal<bool>,
) -> impl IntoView {
    let Credentials { email, password } = initial_credentials;
    let (email, set_email) = create_signal(email);
    let (password, set_password) = create_signal(password);

    let credentials = Signal::derive(move || {
        email.with(|email| {
            let email = email.trim();
            if email.is_empty() {
                return None;
            }
            password.with(|password| {
                if password.trim().is_empty() {
                    return None;
                }
                // Clone the signal data at the very last moment
                Some(Credentials {
                    email: email.to_owned(),
                    password: password.to_owned(),
                })
            })
        })
    });

    let submit_credentials_disabled =
        Signal::derive(move || disabled.get() || credentials.get().is_none());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submit_credentials_disabled.get_untracked() {
            return;
        }
        if let Some(credentials) = credentials.get_untracked() {
            submit_credentials_action.dispatch(credentials);
        }
    };

    view! {
      <form id="login-form" on:submit = on_submit>
        <div class="text-center">
          <h4 class="text-xl font-semibold mt-1 mb-12 pb-1">{ title }</h4>
        </div>
        <p class="mb-4 text-gray-600">{ description }</p>
        { move || error.get().map(|err| view! {
          <p class="mb-4 text-red-700">{ err }</p>
        })}
        <div class="mb-4">
          <input
            id = "email"
            type = "email"
            required
            placeholder = "Email address"
            class = INPUT_CLASS
            prop:disabled = move || disabled.get()
            on:input = move |ev| set_email.set(event_target_value(&ev))
            // The `change` event fires when the browser fills the form automatically,
            on:change = move |ev| set_email.set(event_target_value(&ev))
          />
        </div>
        <div class="mb-4">
          <input
            id = "password"
            type = "password"
            required
            placeholder = "Password"
            class = INPUT_CLASS
            prop:disabled = move || disabled.get()
            on:input = move |ev| set_password.set(event_target_value(&ev))
            on:change = move |ev| set_password.set(event_target_value(&ev))
          />
        </div>
        <div class="text-center pt-1 mb-12 pb-1">
          <button
            type = "submit"
            prop:disabled = move || submit_credentials_disabled.get()
            class="inline-block px-6 py-2.5 font-medium text-xs leading-tight uppercase rounded shadow-md hover:shadow-lg focus:shadow-lg focus:outline-none focus:ring-0 active:shadow-lg transition duration-150 ease-in-out w-full mb-3 bg-gray-100"
          >
          { submit_credentials_label }
          </button>
        </div>
      </form>
    }
}
