use super::*;

/// Tests storing a rating and finding it for its order and car.
///
/// Expected: Ok with `exists_for` and `rated_car_ids` reporting the rated car
#[tokio::test]
async fn stores_rating_for_order_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let other = factory::create_car(db, company.id).await?;
    let customer = factory::create_customer(db).await?;
    let (order, _) =
        factory::create_order(db, customer.id, company.id, car.id, day(0), day(1)).await?;

    let repo = RatingRepository::new(db);
    let rating = repo
        .create(CreateRatingParams {
            user_id: customer.id,
            car_id: car.id,
            order_id: order.id,
            score: 4,
            comment: Some("Clean and on time".to_string()),
        })
        .await?;

    assert_eq!(rating.score, 4);
    assert!(repo.exists_for(order.id, car.id).await?);
    assert!(!repo.exists_for(order.id, other.id).await?);

    let rated = repo.rated_car_ids(order.id).await?;
    assert!(rated.contains(&car.id));
    assert_eq!(rated.len(), 1);

    Ok(())
}
