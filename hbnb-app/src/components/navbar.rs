use leptos::*;
use leptos_router::*;

use hbnb_core::session::PageLoad;

use crate::Page;

#[component]
pub fn NavBar(logged_in: Signal<bool>) -> impl IntoView {
    let location = use_location();
    let show_login_link = create_memo(move |_| {
        let page = location.pathname.with(|path| Page::from_path(path)).unwrap_or_default();
        PageLoad::plan(logged_in.get(), page.into(), None).show_login_link
    });

    view! {
      <nav class="relative container mx-auto p-6">
        <div class="flex items-center justify-between">

          // Logo
          <div class="pt-2 font-bold">
            <A href = Page::Home.path()>"HBnB"</A>
          </div>

          // Menu items
          <div class="flex space-x-6">
            <A href = Page::Home.path() class="hover:text-gray-600".to_string()>"Places"</A>
            { move || show_login_link.get().then(|| view! {
                <a id="login-link" href = Page::Login.path() class="login-button hover:text-gray-600">
                  "Login"
                </a>
            })}
          </div>
        </div>
      </nav>
    }
}
