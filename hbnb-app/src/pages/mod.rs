use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use hbnb_core::session::PageKind;

mod home;
mod login;
mod place;

pub use self::{home::*, login::*, place::*};

const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    Login,
    Place,
}

impl Page {
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Place => "/place",
        }
    }

    /// The page that is served under the given route path.
    pub fn from_path(path: &str) -> Option<Self> {
        [Self::Home, Self::Login, Self::Place]
            .into_iter()
            .find(|page| page.path() == path)
    }

    /// Link to the details of a single place.
    pub fn place_details(id: &str) -> String {
        let id = utf8_percent_encode(id, QUERY_VALUE);
        format!("{}?id={id}", Self::Place.path())
    }
}

impl From<Page> for PageKind {
    fn from(from: Page) -> Self {
        match from {
            Page::Home => Self::Listing,
            Page::Login => Self::Login,
            Page::Place => Self::PlaceDetails,
        }
    }
}

impl From<PageKind> for Page {
    fn from(from: PageKind) -> Self {
        match from {
            PageKind::Listing => Self::Home,
            PageKind::Login => Self::Login,
            PageKind::PlaceDetails => Self::Place,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_details_link() {
        assert_eq!(Page::place_details("42"), "/place?id=42");
        assert_eq!(Page::place_details("a&b=c"), "/place?id=a%26b%3Dc");
    }

    #[test]
    fn only_place_details_require_auth() {
        assert!(!PageKind::from(Page::Home).requires_auth());
        assert!(!PageKind::from(Page::Login).requires_auth());
        assert!(PageKind::from(Page::Place).requires_auth());
    }

    #[test]
    fn resolve_route_paths() {
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path("/login"), Some(Page::Login));
        assert_eq!(Page::from_path("/place"), Some(Page::Place));
        assert_eq!(Page::from_path("/unknown"), None);
    }

    #[test]
    fn successful_login_navigates_home() {
        assert_eq!(Page::from(PageKind::Listing), Page::Home);
        for page in [Page::Home, Page::Login, Page::Place] {
            assert_eq!(Page::from(PageKind::from(page)), page);
        }
    }
}
