use super::*;

/// Tests listing a customer's orders.
///
/// Verifies that only the customer's own orders are returned, newest first.
///
/// Expected: Ok with two orders in reverse creation order
#[tokio::test]
async fn lists_customer_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let customer = factory::create_customer(db).await?;
    let other = factory::create_customer(db).await?;

    let (first, _) =
        factory::create_order(db, customer.id, company.id, car.id, day(0), day(1)).await?;
    let (second, _) =
        factory::create_order(db, customer.id, company.id, car.id, day(5), day(6)).await?;
    factory::create_order(db, other.id, company.id, car.id, day(10), day(11)).await?;

    let orders = OrderRepository::new(db).find_by_customer(customer.id).await?;
    let ids: Vec<i32> = orders.iter().map(|o| o.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests listing orders booked with a company and with a member.
///
/// Expected: Ok with each order listed only under its own booking party
#[tokio::test]
async fn lists_orders_by_booking_party() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, company_car) = factory::helpers::create_company_car(db).await?;
    let (member, _, member_car) = factory::helpers::create_member_car(db).await?;
    let customer = factory::create_customer(db).await?;

    let (company_order, _) =
        factory::create_order(db, customer.id, company.id, company_car.id, day(0), day(1))
            .await?;
    let (member_order, _) = OrderFactory::new(db, customer.id)
        .owner_id(member.id)
        .item(member_car.id, day(0), day(1), 30.0)
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    let by_company = repo.find_by_company(company.id).await?;
    assert_eq!(by_company.len(), 1);
    assert_eq!(by_company[0].id, company_order.id);

    let by_owner = repo.find_by_owner(member.id).await?;
    assert_eq!(by_owner.len(), 1);
    assert_eq!(by_owner[0].id, member_order.id);

    Ok(())
}
