use super::*;

/// Tests creating a company car.
///
/// Verifies that new listings start active and available with the submitted fields.
///
/// Expected: Ok with car created
#[tokio::test]
async fn creates_active_company_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company) = factory::helpers::create_company_with_user(db).await?;

    let car = CarRepository::new(db)
        .create(CreateCarParams {
            company_id: company.id,
            owner_id: None,
            details: details(),
        })
        .await?;

    assert_eq!(car.company_id, company.id);
    assert_eq!(car.owner_id, None);
    assert_eq!(car.brand, "Skoda");
    assert_eq!(car.model_name, "Octavia");
    assert_eq!(car.price_per_day, 45.5);
    assert_eq!(car.car_type, CarType::Sedan);
    assert!(car.is_active);
    assert!(car.availability);

    Ok(())
}

/// Tests creating a car for an unknown company.
///
/// Expected: Err(DbErr) from the foreign key
#[tokio::test]
async fn fails_for_unknown_company() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarRepository::new(db)
        .create(CreateCarParams {
            company_id: 404,
            owner_id: None,
            details: details(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
