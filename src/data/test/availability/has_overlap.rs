use super::*;

use test_utils::factory::order::OrderFactory;

/// Tests overlap detection against a booking sharing only its last day.
///
/// Verifies that both endpoints of an existing booking count as booked days, so a new
/// window starting on the existing end date conflicts.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_overlap_on_shared_endpoint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let customer = factory::create_customer(db).await?;
    factory::create_order(db, customer.id, company.id, car.id, day(0), day(3)).await?;

    let repo = AvailabilityRepository::new(db);

    assert!(repo.has_overlap(car.id, day(3), day(5)).await?);
    assert!(repo.has_overlap(car.id, day(-2), day(0)).await?);
    assert!(repo.has_overlap(car.id, day(1), day(2)).await?);
    assert!(repo.has_overlap(car.id, day(-5), day(10)).await?);

    Ok(())
}

/// Tests windows that touch but do not intersect an existing booking.
///
/// Expected: Ok(false)
#[tokio::test]
async fn allows_adjacent_windows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let customer = factory::create_customer(db).await?;
    factory::create_order(db, customer.id, company.id, car.id, day(0), day(3)).await?;

    let repo = AvailabilityRepository::new(db);

    assert!(!repo.has_overlap(car.id, day(4), day(6)).await?);
    assert!(!repo.has_overlap(car.id, day(-3), day(-1)).await?);

    Ok(())
}

/// Tests that only PLACED, CONFIRMED and ACTIVE orders reserve a car.
///
/// Verifies that completed and cancelled bookings over the same window never block,
/// while the legacy ACTIVE status still does.
///
/// Expected: Ok(false) for terminal statuses, Ok(true) for blocking ones
#[tokio::test]
async fn ignores_terminal_orders() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let other = factory::create_car(db, company.id).await?;
    let customer = factory::create_customer(db).await?;

    for status in [OrderStatus::Completed, OrderStatus::Cancelled] {
        OrderFactory::new(db, customer.id)
            .company_id(company.id)
            .status(status)
            .item(car.id, day(0), day(5), 50.0)
            .build()
            .await?;
    }
    OrderFactory::new(db, customer.id)
        .company_id(company.id)
        .status(OrderStatus::Active)
        .item(other.id, day(0), day(5), 50.0)
        .build()
        .await?;

    let repo = AvailabilityRepository::new(db);

    assert!(!repo.has_overlap(car.id, day(1), day(2)).await?);
    assert!(repo.has_overlap(other.id, day(1), day(2)).await?);

    Ok(())
}

/// Tests that bookings of one car never block another car.
///
/// Expected: Ok(false)
#[tokio::test]
async fn scopes_overlap_to_car() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_rental_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, company, car) = factory::helpers::create_company_car(db).await?;
    let other = factory::create_car(db, company.id).await?;
    let customer = factory::create_customer(db).await?;
    factory::create_order(db, customer.id, company.id, car.id, day(0), day(3)).await?;

    let repo = AvailabilityRepository::new(db);

    assert!(!repo.has_overlap(other.id, day(0), day(3)).await?);

    Ok(())
}
