use super::*;

/// Tests moving an order out of the expected status.
///
/// Expected: Ok(true) and the new status stored
#[tokio::test]
async fn updates_when_current_status_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let customer = factory::create_customer(db).await?;
    let (order, _) =
        factory::create_order(db, customer.id, company.id, car.id, day(0), day(1)).await?;

    let repo = OrderRepository::new(db);

    assert!(
        repo.transition_status(order.id, OrderStatus::Placed, OrderStatus::Confirmed)
            .await?
    );

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Confirmed);

    Ok(())
}

/// Tests a transition whose expected status is stale.
///
/// Verifies that a concurrent change is not overwritten when the stored status no longer
/// matches the one the caller read.
///
/// Expected: Ok(false) and the stored status unchanged
#[tokio::test]
async fn skips_when_current_status_differs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let customer = factory::create_customer(db).await?;
    let (order, _) = OrderFactory::new(db, customer.id)
        .company_id(company.id)
        .status(DbOrderStatus::Cancelled)
        .item(car.id, day(0), day(1), 50.0)
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    assert!(
        !repo
            .transition_status(order.id, OrderStatus::Placed, OrderStatus::Confirmed)
            .await?
    );

    let stored = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(stored.status, OrderStatus::Cancelled);

    Ok(())
}
