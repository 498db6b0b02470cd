use super::*;

fn make_user(name: &str) -> User {
    User { id: "u-1".to_owned(), name: name.to_owned(), email: "a@b.com".to_owned() }
}

#[test]
fn greeting_uses_display_name() {
    assert_eq!(greeting(Some(&make_user("Alice"))), "Welcome back, Alice!");
}

#[test]
fn greeting_trims_and_falls_back_for_blank_names() {
    assert_eq!(greeting(Some(&make_user("  Bob "))), "Welcome back, Bob!");
    assert_eq!(greeting(Some(&make_user("   "))), "Welcome back!");
    assert_eq!(greeting(None), "Welcome back!");
}
