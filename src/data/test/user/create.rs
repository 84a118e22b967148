use super::*;

/// Tests creating an account and finding it by email.
///
/// Expected: Ok with the account found and `email_exists` true
#[tokio::test]
async fn creates_and_finds_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
            role: Role::Member,
        })
        .await?;

    let found = repo.find_by_email("dana@example.com").await?.unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(found.role, Role::Member);
    assert!(repo.email_exists("dana@example.com").await?);
    assert!(!repo.email_exists("nobody@example.com").await?);

    Ok(())
}
