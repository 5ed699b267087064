use crate::{User, UserRole};

#[test]
fn test_user_new_lowercases_email() {
    let user = User::new(
        "Ada".to_string(),
        "EMP001".to_string(),
        "  Ada@Example.COM ",
        "secret".to_string(),
        UserRole::default(),
    );

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, UserRole::FrontendDeveloper);
    assert!(!user.is_admin());
}

#[test]
fn test_user_admin_role() {
    let user = User::new(
        "Admin".to_string(),
        "ADMIN001".to_string(),
        "admin@example.com",
        "hash".to_string(),
        UserRole::Admin,
    );
    assert!(user.is_admin());
}
