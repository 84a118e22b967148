use super::*;

/// Tests the order detail view after rating one of two cars.
///
/// Expected: Ok with item views and the rated flag set only for the rated car
#[tokio::test]
async fn detail_view_marks_rated_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let other = CarFactory::new(db, company.id).brand("Fiat").build().await?;
    let customer = factory::create_customer(db).await?;
    let (order, _) = OrderFactory::new(db, customer.id)
        .company_id(company.id)
        .status(DbOrderStatus::Completed)
        .item(car.id, days_from_today(-5), days_from_today(-4), 50.0)
        .item(other.id, days_from_today(-5), days_from_today(-4), 50.0)
        .build()
        .await?;
    factory::create_rating(db, customer.id, order.id, car.id, 5).await?;

    let view = OrderService::new(db).get_order_by_id(order.id).await?;

    assert_eq!(view.status, OrderStatus::Completed);
    assert_eq!(view.items.len(), 2);
    for item in &view.items {
        assert_eq!(item.rated, item.car_id == car.id);
    }
    let fiat = view.items.iter().find(|i| i.car_id == other.id).unwrap();
    assert_eq!(fiat.car_brand, "Fiat");

    Ok(())
}

/// Tests the list views for customer, company account and member.
///
/// Expected: Ok with each order under its parties and no item views
#[tokio::test]
async fn lists_orders_per_party() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (company_user, company, car) = factory::helpers::create_company_car(db).await?;
    let (member, _, member_car) = factory::helpers::create_member_car(db).await?;
    let customer = factory::create_customer(db).await?;
    let service = OrderService::new(db);

    let company_booking = service
        .place_order(customer.id, company_order(company.id, vec![item(car.id, 1, 2)]))
        .await?;
    let member_booking = service
        .place_order(
            customer.id,
            PlaceOrderParams {
                company_id: None,
                owner_id: Some(member.id),
                items: vec![item(member_car.id, 1, 2)],
            },
        )
        .await?;

    let mine = service.get_orders_by_customer(customer.id).await?;
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|o| o.items.is_empty()));

    let for_company = service.get_orders_by_company_user(company_user.id).await?;
    assert_eq!(for_company.len(), 1);
    assert_eq!(for_company[0].order_id, company_booking.order_id);

    let for_member = service.get_orders_by_owner(member.id).await?;
    assert_eq!(for_member.len(), 1);
    assert_eq!(for_member[0].order_id, member_booking.order_id);

    Ok(())
}

/// Tests the company order list for an account without a company profile.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn company_list_requires_profile() -> Result<(), AppError> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = OrderService::new(db).get_orders_by_company_user(user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
