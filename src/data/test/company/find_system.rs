use super::*;

/// Tests finding the system company among normal companies.
///
/// Expected: Ok(Some(company)) with SYSTEM type
#[tokio::test]
async fn finds_system_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_company_with_user(db).await?;
    let (_, system) = factory::helpers::create_system_company(db).await?;

    let found = CompanyRepository::new(db).find_system().await?.unwrap();

    assert_eq!(found.id, system.id);
    assert_eq!(found.company_type, CompanyType::System);
    assert!(found.is_system());

    Ok(())
}

/// Tests the lookup before the system company has been created.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_system_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    CompanyFactory::new(db, user.id)
        .company_type(DbCompanyType::Normal)
        .build()
        .await?;

    assert!(CompanyRepository::new(db).find_system().await?.is_none());

    Ok(())
}
