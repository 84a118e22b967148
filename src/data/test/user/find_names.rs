use super::*;

/// Tests resolving display names for a set of accounts.
///
/// Expected: Ok with names for existing ids only
#[tokio::test]
async fn resolves_names_of_existing_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ada = UserFactory::new(db).name("Ada").build().await?;
    let grace = UserFactory::new(db).name("Grace").build().await?;
    factory::create_user(db).await?;

    let names = UserRepository::new(db)
        .find_names(&[ada.id, grace.id, 999])
        .await?;

    assert_eq!(names.len(), 2);
    assert_eq!(names.get(&ada.id).map(String::as_str), Some("Ada"));
    assert_eq!(names.get(&grace.id).map(String::as_str), Some("Grace"));

    Ok(())
}

/// Tests resolving names for an empty id list.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(UserRepository::new(db).find_names(&[]).await?.is_empty());

    Ok(())
}
