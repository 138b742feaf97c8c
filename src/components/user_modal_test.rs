use super::*;

fn valid_form() -> UserForm {
    UserForm {
        email: "ops@example.com".to_owned(),
        full_name: "Ops Person".to_owned(),
        password: "long-enough".to_owned(),
        role: "user".to_owned(),
        is_active: true,
    }
}

// =============================================================
// Form validation
// =============================================================

#[test]
fn valid_create_form_passes() {
    assert!(validate(&valid_form(), true).is_empty());
}

#[test]
fn email_is_required_and_shaped() {
    let mut form = valid_form();
    form.email = String::new();
    assert_eq!(validate(&form, true).email, Some("Email is required"));

    form.email = "not-an-email".to_owned();
    assert_eq!(validate(&form, true).email, Some("Email is invalid"));

    form.email = "a b@example.com".to_owned();
    assert_eq!(validate(&form, true).email, Some("Email is invalid"));

    form.email = "ops@example".to_owned();
    assert_eq!(validate(&form, true).email, Some("Email is invalid"));
}

#[test]
fn full_name_is_required() {
    let mut form = valid_form();
    form.full_name = "   ".to_owned();
    assert_eq!(validate(&form, true).full_name, Some("Full name is required"));
}

#[test]
fn password_required_only_on_create() {
    let mut form = valid_form();
    form.password = String::new();

    assert_eq!(validate(&form, true).password, Some("Password is required"));
    // Editing: blank keeps the current password.
    assert!(validate(&form, false).is_empty());
}

#[test]
fn short_password_rejected_even_when_optional() {
    let mut form = valid_form();
    form.password = "short".to_owned();
    assert_eq!(
        validate(&form, false).password,
        Some("Password must be at least 8 characters")
    );
}
