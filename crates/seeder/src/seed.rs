//! Insert-or-ignore seeding for the store and demo databases.
//!
//! Each run generates one batch of sample rows and inserts them inside a
//! single transaction, committed at the end. Rows that collide with a
//! uniqueness constraint are dropped by `INSERT OR IGNORE` and counted as
//! skipped in the returned [`SeedReport`]; they never fail the batch.

use rand::Rng;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::instrument;

use crate::generate::SampleSet;
use crate::schema;

/// Errors raised while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Database operation failed. Uniqueness conflicts do not surface here.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Inserted/skipped tally for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableReport {
    /// Table name.
    pub table: &'static str,
    /// Rows actually written.
    pub inserted: u64,
    /// Rows silently dropped by a uniqueness conflict.
    pub skipped: u64,
}

/// Summary of one seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    /// Per-table tallies, in seeding order.
    pub tables: Vec<TableReport>,
}

impl SeedReport {
    fn record(&mut self, table: &'static str, attempted: u64, inserted: u64) {
        self.tables.push(TableReport {
            table,
            inserted,
            skipped: attempted - inserted,
        });
    }

    /// Total rows written across all tables.
    #[must_use]
    pub fn total_inserted(&self) -> u64 {
        self.tables.iter().map(|t| t.inserted).sum()
    }

    /// Total rows dropped by uniqueness conflicts.
    #[must_use]
    pub fn total_skipped(&self) -> u64 {
        self.tables.iter().map(|t| t.skipped).sum()
    }
}

/// Initialize the store schema and seed it with `rows` rows per table.
///
/// Safe to run against an already-seeded file: conflicting rows are skipped,
/// everything else is inserted again under new surrogate keys.
///
/// # Errors
///
/// Returns [`SeedError::Database`] if schema creation, an insert, or the
/// final commit fails.
#[instrument(skip(pool, rng))]
pub async fn seed_store(
    pool: &SqlitePool,
    rng: &mut (impl Rng + Send),
    rows: u32,
) -> Result<SeedReport, SeedError> {
    schema::init_store(pool).await?;

    let sample = SampleSet::generate(rng, rows);
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    let mut inserted = 0;
    for customer in &sample.customers {
        inserted += sqlx::query("INSERT OR IGNORE INTO Customers (Name, Email, City) VALUES (?, ?, ?)")
            .bind(&customer.name)
            .bind(&customer.email)
            .bind(&customer.city)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    report.record("Customers", sample.customers.len() as u64, inserted);

    let mut inserted = 0;
    for category in &sample.categories {
        inserted += sqlx::query("INSERT OR IGNORE INTO Categories (CategoryName) VALUES (?)")
            .bind(category)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    report.record("Categories", sample.categories.len() as u64, inserted);

    let mut inserted = 0;
    for product in &sample.products {
        inserted +=
            sqlx::query("INSERT OR IGNORE INTO Products (Name, Price, CategoryID) VALUES (?, ?, ?)")
                .bind(&product.name)
                .bind(product.price)
                .bind(product.category_id.get())
                .execute(&mut *tx)
                .await?
                .rows_affected();
    }
    report.record("Products", sample.products.len() as u64, inserted);

    let mut inserted = 0;
    for order in &sample.orders {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO Orders (CustomerID, OrderDate, TotalAmount) VALUES (?, ?, ?)",
        )
        .bind(order.customer_id.get())
        .bind(order.date.format("%Y-%m-%d").to_string())
        .bind(order.total)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    report.record("Orders", sample.orders.len() as u64, inserted);

    let mut inserted = 0;
    for detail in &sample.order_details {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO OrderDetails (OrderID, ProductID, Quantity) VALUES (?, ?, ?)",
        )
        .bind(detail.order_id.get())
        .bind(detail.product_id.get())
        .bind(detail.quantity)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    report.record("OrderDetails", sample.order_details.len() as u64, inserted);

    let mut inserted = 0;
    for payment in &sample.payments {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO Payments (OrderID, PaymentDate, Amount, PaymentMethod) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(payment.order_id.get())
        .bind(payment.date.format("%Y-%m-%d").to_string())
        .bind(payment.amount)
        .bind(payment.method.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    report.record("Payments", sample.payments.len() as u64, inserted);

    let mut inserted = 0;
    for shipper in &sample.shippers {
        inserted += sqlx::query("INSERT OR IGNORE INTO Shippers (Name, Phone) VALUES (?, ?)")
            .bind(&shipper.name)
            .bind(&shipper.phone)
            .execute(&mut *tx)
            .await?
            .rows_affected();
    }
    report.record("Shippers", sample.shippers.len() as u64, inserted);

    let mut inserted = 0;
    for review in &sample.reviews {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO Reviews (CustomerID, ProductID, Rating, Comment) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(review.customer_id.get())
        .bind(review.product_id.get())
        .bind(review.rating.as_i64())
        .bind(&review.comment)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    report.record("Reviews", sample.reviews.len() as u64, inserted);

    tx.commit().await?;

    tracing::info!(
        inserted = report.total_inserted(),
        skipped = report.total_skipped(),
        "store seeding complete"
    );
    Ok(report)
}

const DEMO_CUSTOMERS: [(&str, &str, &str); 3] = [
    ("Alice", "alice@example.com", "1234567890"),
    ("Bob", "bob@example.com", "9876543210"),
    ("Charlie", "charlie@example.com", "5555555555"),
];

const DEMO_PRODUCTS: [(&str, f64, i64); 3] = [
    ("Laptop", 1200.50, 10),
    ("Smartphone", 799.99, 20),
    ("Headphones", 150.00, 50),
];

const DEMO_ORDERS: [(i64, i64, i64); 3] = [(1, 1, 1), (2, 2, 2), (3, 3, 3)];

/// Initialize the demo schema and insert its fixed three-row data set.
///
/// The demo tables carry no uniqueness constraints, so repeated runs append
/// duplicate logical rows under new primary keys.
///
/// # Errors
///
/// Returns [`SeedError::Database`] if schema creation, an insert, or the
/// final commit fails.
#[instrument(skip(pool))]
pub async fn seed_demo(pool: &SqlitePool) -> Result<SeedReport, SeedError> {
    schema::init_demo(pool).await?;

    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    let mut inserted = 0;
    for (name, email, phone) in DEMO_CUSTOMERS {
        inserted +=
            sqlx::query("INSERT OR IGNORE INTO customers (name, email, phone) VALUES (?, ?, ?)")
                .bind(name)
                .bind(email)
                .bind(phone)
                .execute(&mut *tx)
                .await?
                .rows_affected();
    }
    report.record("customers", DEMO_CUSTOMERS.len() as u64, inserted);

    let mut inserted = 0;
    for (name, price, stock) in DEMO_PRODUCTS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO products (product_name, price, stock_quantity) VALUES (?, ?, ?)",
        )
        .bind(name)
        .bind(price)
        .bind(stock)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    report.record("products", DEMO_PRODUCTS.len() as u64, inserted);

    let mut inserted = 0;
    for (customer_id, product_id, quantity) in DEMO_ORDERS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO orders (customer_id, product_id, quantity) VALUES (?, ?, ?)",
        )
        .bind(customer_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    report.record("orders", DEMO_ORDERS.len() as u64, inserted);

    tx.commit().await?;

    tracing::info!(inserted = report.total_inserted(), "demo seeding complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, table_counts};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_seed_store_fresh_run_hits_targets() {
        let pool = create_pool(":memory:").await.expect("pool");
        let mut rng = StdRng::seed_from_u64(42);

        let report = seed_store(&pool, &mut rng, 70).await.expect("seed");

        for table in &report.tables {
            let target = if table.table == "Categories" { 10 } else { 70 };
            assert_eq!(table.inserted, target, "table {}", table.table);
            assert_eq!(table.skipped, 0, "table {}", table.table);
        }

        let counts = table_counts(&pool).await.expect("counts");
        let customers = counts
            .iter()
            .find(|c| c.table == "Customers")
            .expect("Customers counted");
        assert_eq!(customers.rows, 70);
    }

    #[tokio::test]
    async fn test_seed_store_rerun_absorbs_conflicts() {
        let pool = create_pool(":memory:").await.expect("pool");
        let mut rng = StdRng::seed_from_u64(42);

        seed_store(&pool, &mut rng, 70).await.expect("first run");
        let report = seed_store(&pool, &mut rng, 70).await.expect("second run");

        // Every customer email and shipper phone collides on the second run.
        let customers = &report.tables[0];
        assert_eq!(customers.table, "Customers");
        assert_eq!(customers.inserted, 0);
        assert_eq!(customers.skipped, 70);

        let shippers = report
            .tables
            .iter()
            .find(|t| t.table == "Shippers")
            .expect("Shippers reported");
        assert_eq!(shippers.inserted, 0);
        assert_eq!(shippers.skipped, 70);

        // Tables without unique columns duplicate their rows instead.
        let orders = report
            .tables
            .iter()
            .find(|t| t.table == "Orders")
            .expect("Orders reported");
        assert_eq!(orders.inserted, 70);
        assert_eq!(orders.skipped, 0);
    }

    #[tokio::test]
    async fn test_seeded_ratings_and_totals_within_bounds() {
        let pool = create_pool(":memory:").await.expect("pool");
        let mut rng = StdRng::seed_from_u64(1);
        seed_store(&pool, &mut rng, 70).await.expect("seed");

        let ratings: Vec<(i64,)> = sqlx::query_as("SELECT Rating FROM Reviews")
            .fetch_all(&pool)
            .await
            .expect("ratings");
        assert_eq!(ratings.len(), 70);
        assert!(ratings.iter().all(|(r,)| (1..=5).contains(r)));

        let totals: Vec<(f64,)> = sqlx::query_as("SELECT TotalAmount FROM Orders")
            .fetch_all(&pool)
            .await
            .expect("totals");
        assert!(totals.iter().all(|(t,)| (100.0..=5000.0).contains(t)));
    }

    #[tokio::test]
    async fn test_seed_demo_inserts_fixed_rows() {
        let pool = create_pool(":memory:").await.expect("pool");
        let report = seed_demo(&pool).await.expect("seed");
        assert_eq!(report.total_inserted(), 9);

        let row: (String, f64) =
            sqlx::query_as("SELECT product_name, price FROM products WHERE product_id = 1")
                .fetch_one(&pool)
                .await
                .expect("laptop row");
        assert_eq!(row.0, "Laptop");
        assert!((row.1 - 1200.50).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_seed_demo_rerun_duplicates_rows() {
        let pool = create_pool(":memory:").await.expect("pool");
        seed_demo(&pool).await.expect("first run");
        seed_demo(&pool).await.expect("second run");

        let (customers,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&pool)
            .await
            .expect("count");
        assert_eq!(customers, 6);
    }
}
