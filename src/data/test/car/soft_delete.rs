use super::*;

/// Tests soft deleting a car.
///
/// Verifies that the row survives with `is_active=false` and disappears from the
/// company's active listing.
///
/// Expected: Ok(true)
#[tokio::test]
async fn deactivates_car_without_removing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let repo = CarRepository::new(db);

    assert!(repo.soft_delete(car.id).await?);

    let stored = repo.find_by_id(car.id).await?.unwrap();
    assert!(!stored.is_active);
    assert!(repo.find_active_by_company(company.id).await?.is_empty());

    Ok(())
}

/// Tests soft deleting a missing car.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!CarRepository::new(db).soft_delete(999).await?);

    Ok(())
}
