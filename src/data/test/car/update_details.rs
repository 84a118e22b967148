use super::*;

/// Tests replacing the listing fields of a car.
///
/// Expected: Ok(Some(car)) with new fields and unchanged ownership
#[tokio::test]
async fn replaces_listing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;

    let updated = CarRepository::new(db)
        .update_details(
            car.id,
            CarDetailsParams {
                car_type: CarType::Suv,
                seating_capacity: 7,
                ..details()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, car.id);
    assert_eq!(updated.company_id, company.id);
    assert_eq!(updated.brand, "Skoda");
    assert_eq!(updated.car_type, CarType::Suv);
    assert_eq!(updated.seating_capacity, 7);

    Ok(())
}

/// Tests updating a missing car.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_car_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarRepository::new(db).update_details(999, details()).await?;

    assert!(result.is_none());

    Ok(())
}
