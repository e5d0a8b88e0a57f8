use super::*;

const PROTECTED: [AppRoute; 3] = [AppRoute::Buses, AppRoute::Students, AppRoute::Notifications];

#[test]
fn protected_routes_redirect_without_token() {
    for route in PROTECTED {
        assert_eq!(decide(route, false), Decision::Redirect("/login"), "{route:?}");
    }
}

#[test]
fn protected_routes_render_with_token() {
    for route in PROTECTED {
        assert_eq!(decide(route, true), Decision::Render, "{route:?}");
    }
}

#[test]
fn open_routes_render_either_way() {
    for route in [AppRoute::Login, AppRoute::Register] {
        assert_eq!(route.access(), Access::Open);
        assert_eq!(decide(route, false), Decision::Render);
        assert_eq!(decide(route, true), Decision::Render);
    }
}

#[test]
fn root_always_goes_to_buses() {
    assert_eq!(decide(AppRoute::Root, true), Decision::Redirect("/buses"));
    assert_eq!(decide(AppRoute::Root, false), Decision::Redirect("/buses"));
}

#[test]
fn from_path_matches_every_route_and_trailing_slash() {
    for route in AppRoute::ALL {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
    assert_eq!(AppRoute::from_path("/students/"), Some(AppRoute::Students));
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::Root));
    assert_eq!(AppRoute::from_path("/drivers"), None);
}

#[test]
fn logout_then_render_redirects() {
    let session = crate::state::session::Session::in_memory();
    session.set_token("t");
    assert_eq!(decide(AppRoute::Students, session.is_authenticated()), Decision::Render);
    session.clear();
    assert_eq!(decide(AppRoute::Students, session.is_authenticated()), Decision::Redirect(LOGIN_PATH));
}
