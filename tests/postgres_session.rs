//! PostgreSQL session tests. Need a reachable server: `DATABASE_URL=... cargo test -- --ignored`.

use product_api::{ensure_products_table, Database, Field, PgDatabase, ProductChanges, ProductCreate};
use rust_decimal::Decimal;
use sqlx::PgPool;

fn pen() -> ProductCreate {
    ProductCreate {
        name: "Pen".into(),
        description: "Blue pen".into(),
        price: Decimal::new(150, 2),
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn create_get_replace_delete(pool: PgPool) -> sqlx::Result<()> {
    ensure_products_table(&pool).await.unwrap();
    let db = PgDatabase::new(pool);
    let mut session = db.open().await.unwrap();

    assert!(session.list_all().await.unwrap().is_empty());

    let created = session.create(pen()).await.unwrap();
    assert_eq!(session.get_by_id(created.id).await.unwrap(), Some(created.clone()));

    let changes = ProductChanges {
        price: Field::Present(Decimal::new(200, 2)),
        ..Default::default()
    };
    let updated = session.replace(created.clone(), changes).await.unwrap();
    assert_eq!(updated.name, "Pen");
    assert_eq!(updated.description, "Blue pen");
    assert_eq!(updated.price, Decimal::new(200, 2));

    session.delete(updated.clone()).await.unwrap();
    session.delete(updated.clone()).await.unwrap();
    assert_eq!(session.get_by_id(updated.id).await.unwrap(), None);
    Ok(())
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn list_orders_by_id(pool: PgPool) -> sqlx::Result<()> {
    ensure_products_table(&pool).await.unwrap();
    let db = PgDatabase::new(pool);
    let mut session = db.open().await.unwrap();
    for _ in 0..3 {
        session.create(pen()).await.unwrap();
    }
    let ids: Vec<i32> = session.list_all().await.unwrap().iter().map(|p| p.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(ids.len(), 3);
    Ok(())
}
