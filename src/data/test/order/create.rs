use super::*;

/// Tests creating a member order and its first line item.
///
/// Verifies that new orders start PLACED with a zero total, carry only the owner side of
/// the booking party, and that `set_total` stores the computed amount.
///
/// Expected: Ok with order and item persisted
#[tokio::test]
async fn creates_placed_order_with_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, _, car) = factory::helpers::create_member_car(db).await?;
    let customer = factory::create_customer(db).await?;

    let orders = OrderRepository::new(db);
    let order = orders
        .create(customer.id, BookingParty::Owner(member.id))
        .await?;

    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.total_amount, 0.0);
    assert_eq!(order.company_id, None);
    assert_eq!(order.owner_id, Some(member.id));

    let item = OrderItemRepository::new(db)
        .create(CreateOrderItemParams {
            order_id: order.id,
            car_id: car.id,
            start_date: day(0),
            end_date: day(2),
            number_of_days: 3,
            price: 150.0,
        })
        .await?;
    orders.set_total(order.id, item.price).await?;

    let stored = orders.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.total_amount, 150.0);

    let items = OrderItemRepository::new(db).find_by_order(order.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].number_of_days, 3);

    Ok(())
}
