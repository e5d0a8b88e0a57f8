#![cfg(not(feature = "csr"))]

use super::*;
use crate::state::session::Session;

#[test]
fn native_store_is_inert() {
    let store = LocalStorageTokenStore::new("token");
    store.save("abc");
    assert_eq!(store.load(), None);
    store.remove();
    assert_eq!(store.key(), "token");
}

#[test]
fn session_over_native_store_never_authenticates() {
    let session = Session::new(std::sync::Arc::new(LocalStorageTokenStore::new("token")));
    session.set_token("abc");
    assert!(!session.is_authenticated());
}
