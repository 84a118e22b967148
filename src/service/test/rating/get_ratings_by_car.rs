use super::*;

/// Tests listing a car's ratings with reviewer names.
///
/// Expected: Ok with every rating of the car
#[tokio::test]
async fn lists_ratings_with_reviewer_names() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, order, car) = completed_booking(db).await?;
    factory::create_rating(db, customer.id, order.id, car.id, 3).await?;

    let ratings = RatingService::new(db).get_ratings_by_car(car.id).await?;

    assert_eq!(ratings.len(), 1);
    assert_eq!(ratings[0].score, 3);
    assert_eq!(ratings[0].user_name, customer.name);

    Ok(())
}

/// Tests listing ratings of a car that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_car() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RatingService::new(db).get_ratings_by_car(777).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
