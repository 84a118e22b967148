use super::*;

/// Tests the public listing with ratings and member cars.
///
/// Verifies that cars of an inactive company are hidden, member cars are shown with
/// their owner, and average ratings are rounded to one decimal.
///
/// Expected: Ok with the visible cars and their averages
#[tokio::test]
async fn lists_public_cars_with_ratings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let (member, _, member_car) = factory::helpers::create_member_car(db).await?;
    let pending_user = UserFactory::new(db).role(DbRole::Company).build().await?;
    let pending = CompanyFactory::new(db, pending_user.id)
        .is_active(false)
        .build()
        .await?;
    let hidden = factory::create_car(db, pending.id).await?;
    let customer = factory::create_customer(db).await?;

    for score in [5, 4, 4] {
        let (order, _) = OrderFactory::new(db, customer.id)
            .company_id(company.id)
            .status(DbOrderStatus::Completed)
            .item(car.id, days_from_today(-10), days_from_today(-9), 50.0)
            .build()
            .await?;
        factory::create_rating(db, customer.id, order.id, car.id, score).await?;
    }

    let cars = CarService::new(db).get_public_cars().await?;
    let ids: Vec<i32> = cars.iter().map(|c| c.id).collect();

    assert!(!ids.contains(&hidden.id));

    let rated = cars.iter().find(|c| c.id == car.id).unwrap();
    assert_eq!(rated.average_rating, 4.3);

    let listed = cars.iter().find(|c| c.id == member_car.id).unwrap();
    assert_eq!(listed.owner_id, Some(member.id));
    assert!(listed.owner_name.is_some());
    assert_eq!(listed.average_rating, 0.0);

    Ok(())
}

/// Tests searching with a window that overlaps a placed booking.
///
/// Expected: Ok without the booked car
#[tokio::test]
async fn hides_cars_booked_in_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, booked) = factory::helpers::create_company_car(db).await?;
    let free = factory::create_car(db, company.id).await?;
    let customer = factory::create_customer(db).await?;
    factory::create_order(
        db,
        customer.id,
        company.id,
        booked.id,
        days_from_today(3),
        days_from_today(5),
    )
    .await?;

    let cars = CarService::new(db)
        .search_cars(CarSearchFilter {
            start_date: Some(days_from_today(5)),
            end_date: Some(days_from_today(7)),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = cars.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![free.id]);

    Ok(())
}

/// Tests a window whose start is after its end.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db)
        .search_cars(CarSearchFilter {
            start_date: Some(days_from_today(7)),
            end_date: Some(days_from_today(5)),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reading a car that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_car_by_id_returns_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CarService::new(db).get_car_by_id(12345).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
