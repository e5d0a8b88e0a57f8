use super::*;

#[test]
fn fresh_session_is_not_authenticated() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn set_token_authenticates_and_clear_revokes() {
    let session = Session::in_memory();
    session.set_token("abc");
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("abc"));

    session.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn garbage_token_still_counts_as_present() {
    let session = Session::new(Arc::new(MemoryTokenStore::with_token("not-a-jwt")));
    assert!(session.is_authenticated());

    let session = Session::new(Arc::new(MemoryTokenStore::with_token("")));
    assert!(session.is_authenticated());
}

#[test]
fn clones_share_the_same_slot() {
    let session = Session::in_memory();
    let other = session.clone();
    session.set_token("t1");
    assert_eq!(other.token().as_deref(), Some("t1"));
    other.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn debug_output_hides_token_value() {
    let session = Session::new(Arc::new(MemoryTokenStore::with_token("secret")));
    let rendered = format!("{session:?}");
    assert!(rendered.contains("authenticated: true"));
    assert!(!rendered.contains("secret"));
}
