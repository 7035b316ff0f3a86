//! End-to-end tests for store database seeding.
//!
//! Each test seeds a fresh in-memory database and inspects the result with
//! plain SQL, the way a classroom user would inspect the file.

use datascout_integration_tests::seeded_store_pool;
use datascout_seeder::db::table_counts;
use datascout_seeder::schema::STORE_TABLES;

// =============================================================================
// Row Count Tests
// =============================================================================

#[tokio::test]
async fn test_all_store_tables_hit_their_row_targets() {
    let pool = seeded_store_pool(70, 42).await;

    let counts = table_counts(&pool).await.expect("counts");
    assert_eq!(counts.len(), STORE_TABLES.len());

    for count in &counts {
        // The category name pool holds ten distinct values; every other table
        // gets one row per generated entity.
        let target = if count.table == "Categories" { 10 } else { 70 };
        assert_eq!(count.rows, target, "table {}", count.table);
    }
}

#[tokio::test]
async fn test_custom_row_count_is_respected() {
    let pool = seeded_store_pool(25, 7).await;

    let counts = table_counts(&pool).await.expect("counts");
    for count in &counts {
        assert!(count.rows <= 25, "table {}", count.table);
    }

    let (orders,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM Orders")
        .fetch_one(&pool)
        .await
        .expect("count");
    assert_eq!(orders, 25);
}

// =============================================================================
// Reference Range Tests
// =============================================================================

#[tokio::test]
async fn test_foreign_key_columns_stay_within_generated_id_ranges() {
    let pool = seeded_store_pool(70, 42).await;

    let checks = [
        ("SELECT MIN(CategoryID), MAX(CategoryID) FROM Products", 10),
        ("SELECT MIN(CustomerID), MAX(CustomerID) FROM Orders", 70),
        ("SELECT MIN(OrderID), MAX(OrderID) FROM OrderDetails", 70),
        ("SELECT MIN(ProductID), MAX(ProductID) FROM OrderDetails", 70),
        ("SELECT MIN(CustomerID), MAX(CustomerID) FROM Reviews", 70),
        ("SELECT MIN(ProductID), MAX(ProductID) FROM Reviews", 70),
    ];

    for (sql, upper) in checks {
        let (min, max): (i64, i64) = sqlx::query_as(sql)
            .fetch_one(&pool)
            .await
            .expect("range query");
        assert!(min >= 1, "{sql}");
        assert!(max <= upper, "{sql}");
    }
}

#[tokio::test]
async fn test_dangling_references_are_accepted() {
    let pool = seeded_store_pool(70, 42).await;

    // References are not enforced; a row pointing at a missing order must
    // insert cleanly.
    sqlx::query("INSERT INTO OrderDetails (OrderID, ProductID, Quantity) VALUES (9999, 9999, 1)")
        .execute(&pool)
        .await
        .expect("dangling insert accepted");
}

// =============================================================================
// Value Tests
// =============================================================================

#[tokio::test]
async fn test_payment_amounts_mirror_order_totals() {
    let pool = seeded_store_pool(70, 42).await;

    // The i-th payment reuses the i-th order's total; its OrderID is drawn
    // independently and may point anywhere.
    let amounts: Vec<(f64,)> = sqlx::query_as("SELECT Amount FROM Payments ORDER BY PaymentID")
        .fetch_all(&pool)
        .await
        .expect("amounts");
    let totals: Vec<(f64,)> = sqlx::query_as("SELECT TotalAmount FROM Orders ORDER BY OrderID")
        .fetch_all(&pool)
        .await
        .expect("totals");
    assert_eq!(amounts, totals);
}

#[tokio::test]
async fn test_dates_fall_inside_the_ninety_day_window() {
    let pool = seeded_store_pool(70, 42).await;

    // ISO dates compare correctly as strings.
    for table in ["Orders", "Payments"] {
        let column = if table == "Orders" {
            "OrderDate"
        } else {
            "PaymentDate"
        };
        let (min, max): (String, String) =
            sqlx::query_as(&format!("SELECT MIN({column}), MAX({column}) FROM {table}"))
                .fetch_one(&pool)
                .await
                .expect("date range");
        assert!(min.as_str() >= "2024-01-02", "{table}: {min}");
        assert!(max.as_str() <= "2024-03-31", "{table}: {max}");
    }
}

#[tokio::test]
async fn test_review_ratings_satisfy_the_check_constraint() {
    let pool = seeded_store_pool(70, 42).await;

    let (out_of_range,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM Reviews WHERE Rating < 1 OR Rating > 5")
            .fetch_one(&pool)
            .await
            .expect("count");
    assert_eq!(out_of_range, 0);
}

// =============================================================================
// Determinism Tests
// =============================================================================

#[tokio::test]
async fn test_identical_seeds_produce_identical_data() {
    let first = seeded_store_pool(70, 99).await;
    let second = seeded_store_pool(70, 99).await;

    let emails = "SELECT Email FROM Customers ORDER BY CustomerID";
    let a: Vec<(String,)> = sqlx::query_as(emails)
        .fetch_all(&first)
        .await
        .expect("emails");
    let b: Vec<(String,)> = sqlx::query_as(emails)
        .fetch_all(&second)
        .await
        .expect("emails");
    assert_eq!(a, b);

    let totals = "SELECT TotalAmount FROM Orders ORDER BY OrderID";
    let a: Vec<(f64,)> = sqlx::query_as(totals)
        .fetch_all(&first)
        .await
        .expect("totals");
    let b: Vec<(f64,)> = sqlx::query_as(totals)
        .fetch_all(&second)
        .await
        .expect("totals");
    assert_eq!(a, b);
}
