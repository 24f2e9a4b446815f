use super::*;

fn make_user(auth_method: &str) -> User {
    User {
        id: "6f1c".to_owned(),
        name: "octocat".to_owned(),
        avatar_url: None,
        auth_method: auth_method.to_owned(),
    }
}

#[test]
fn account_rows_list_name_id_and_method() {
    let rows = account_rows(&make_user("github"));
    assert_eq!(
        rows,
        vec![
            ("Name", "octocat".to_owned()),
            ("User ID", "6f1c".to_owned()),
            ("Signed in with", "GitHub".to_owned()),
        ]
    );
}

#[test]
fn unknown_sign_in_method_is_shown_verbatim() {
    let rows = account_rows(&make_user("passkey"));
    assert_eq!(rows[2], ("Signed in with", "passkey".to_owned()));
}

#[test]
fn session_method_is_capitalized() {
    let rows = account_rows(&make_user("session"));
    assert_eq!(rows[2].1, "Session");
}
