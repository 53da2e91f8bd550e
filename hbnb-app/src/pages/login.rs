use leptos::*;

use hbnb_boundary::Credentials;
use hbnb_core::session::{LoginOutcome, PageKind};
use hbnb_frontend_api::{PublicApi, UserApi};

use crate::{components::*, cookie};

#[component]
pub fn Login<F>(public_api: PublicApi, on_success: F) -> impl IntoView
where
    F: Fn(UserApi, PageKind) + 'static + Clone,
{
    let (login_error, set_login_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    let login_action = create_action(move |credentials: &Credentials| {
        log::info!("Logging in with {email}", email = credentials.email);
        let credentials = credentials.to_owned();
        let on_success = on_success.clone();
        async move {
            set_wait_for_response.update(|w| *w = true);
            let result = public_api.login(&credentials).await;
            set_wait_for_response.update(|w| *w = false);
            match LoginOutcome::from_result(result) {
                LoginOutcome::LoggedIn {
                    session,
                    set_cookie,
                    navigate_to,
                } => {
                    set_login_error.update(|e| *e = None);
                    if let Err(err) = cookie::write(&set_cookie) {
                        log::error!("Unable to store session token: {err}");
                    }
                    on_success(session, navigate_to);
                }
                LoginOutcome::Failed { message } => {
                    log::error!("Unable to login with {}: {message}", credentials.email);
                    set_login_error.update(|e| *e = Some(message));
                }
            }
        }
    });

    let disabled = Signal::derive(move || wait_for_response.get());

    view! {
      <section>
        <div class="container py-12 px-6 mx-auto">
          <div class="flex justify-center items-center flex-wrap h-full g-6 text-gray-800">
            <div class="xl:w-6/12">
              <div class="block bg-white shadow-lg rounded-lg">
                <div class="px-4 md:px-0 mx-auto">
                  <div class="md:p-12 md:mx-6">
                    <CredentialsForm
                        title = "Login"
                        description = "Please login to your account"
                        submit_credentials_label = "Log in"
                        initial_credentials = Credentials::default()
                        submit_credentials_action = login_action
                        error = login_error.into()
                        disabled
                    />
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </section>
    }
}
