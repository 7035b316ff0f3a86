//! Idempotent DDL for the store and demo databases.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so initialization is safe
//! to call against an already-initialized file. No data is touched.

use sqlx::SqlitePool;

/// Store tables, in creation (and seeding) order.
pub const STORE_TABLES: [&str; 8] = [
    "Customers",
    "Categories",
    "Products",
    "Orders",
    "OrderDetails",
    "Payments",
    "Shippers",
    "Reviews",
];

const STORE_DDL: [&str; 8] = [
    "CREATE TABLE IF NOT EXISTS Customers (
        CustomerID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        Email TEXT UNIQUE,
        City TEXT
    )",
    "CREATE TABLE IF NOT EXISTS Categories (
        CategoryID INTEGER PRIMARY KEY AUTOINCREMENT,
        CategoryName TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS Products (
        ProductID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        Price REAL NOT NULL,
        CategoryID INTEGER,
        FOREIGN KEY (CategoryID) REFERENCES Categories(CategoryID)
    )",
    "CREATE TABLE IF NOT EXISTS Orders (
        OrderID INTEGER PRIMARY KEY AUTOINCREMENT,
        CustomerID INTEGER,
        OrderDate TEXT,
        TotalAmount REAL,
        FOREIGN KEY (CustomerID) REFERENCES Customers(CustomerID)
    )",
    "CREATE TABLE IF NOT EXISTS OrderDetails (
        OrderDetailID INTEGER PRIMARY KEY AUTOINCREMENT,
        OrderID INTEGER,
        ProductID INTEGER,
        Quantity INTEGER,
        FOREIGN KEY (OrderID) REFERENCES Orders(OrderID),
        FOREIGN KEY (ProductID) REFERENCES Products(ProductID)
    )",
    "CREATE TABLE IF NOT EXISTS Payments (
        PaymentID INTEGER PRIMARY KEY AUTOINCREMENT,
        OrderID INTEGER,
        PaymentDate TEXT,
        Amount REAL,
        PaymentMethod TEXT,
        FOREIGN KEY (OrderID) REFERENCES Orders(OrderID)
    )",
    "CREATE TABLE IF NOT EXISTS Shippers (
        ShipperID INTEGER PRIMARY KEY AUTOINCREMENT,
        Name TEXT NOT NULL,
        Phone TEXT UNIQUE
    )",
    "CREATE TABLE IF NOT EXISTS Reviews (
        ReviewID INTEGER PRIMARY KEY AUTOINCREMENT,
        CustomerID INTEGER,
        ProductID INTEGER,
        Rating INTEGER CHECK (Rating BETWEEN 1 AND 5),
        Comment TEXT,
        FOREIGN KEY (CustomerID) REFERENCES Customers(CustomerID),
        FOREIGN KEY (ProductID) REFERENCES Products(ProductID)
    )",
];

/// Demo tables, in creation order.
pub const DEMO_TABLES: [&str; 3] = ["customers", "products", "orders"];

const DEMO_DDL: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS customers (
        customer_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT,
        created_at TEXT DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE TABLE IF NOT EXISTS products (
        product_id INTEGER PRIMARY KEY,
        product_name TEXT NOT NULL,
        price REAL NOT NULL,
        stock_quantity INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        order_id INTEGER PRIMARY KEY,
        customer_id INTEGER,
        product_id INTEGER,
        quantity INTEGER NOT NULL,
        order_date TEXT DEFAULT CURRENT_TIMESTAMP,
        FOREIGN KEY (customer_id) REFERENCES customers(customer_id),
        FOREIGN KEY (product_id) REFERENCES products(product_id)
    )",
];

/// Create the eight store tables if absent.
///
/// # Errors
///
/// Returns `sqlx::Error` if any DDL statement fails.
pub async fn init_store(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in STORE_DDL {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(tables = STORE_TABLES.len(), "store schema initialized");
    Ok(())
}

/// Create the three demo tables if absent.
///
/// # Errors
///
/// Returns `sqlx::Error` if any DDL statement fails.
pub async fn init_demo(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in DEMO_DDL {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(tables = DEMO_TABLES.len(), "demo schema initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, table_counts};

    #[tokio::test]
    async fn test_init_store_creates_all_tables() {
        let pool = create_pool(":memory:").await.expect("pool");
        init_store(&pool).await.expect("init");

        let counts = table_counts(&pool).await.expect("counts");
        let mut names: Vec<&str> = counts.iter().map(|c| c.table.as_str()).collect();
        names.sort_unstable();

        let mut expected: Vec<&str> = STORE_TABLES.to_vec();
        // AUTOINCREMENT tables add the sqlite_sequence bookkeeping table,
        // which table_counts already filters out.
        expected.sort_unstable();
        assert_eq!(names, expected);
        assert!(counts.iter().all(|c| c.rows == 0));
    }

    #[tokio::test]
    async fn test_init_store_is_idempotent() {
        let pool = create_pool(":memory:").await.expect("pool");
        init_store(&pool).await.expect("first init");
        init_store(&pool).await.expect("second init");
    }

    #[tokio::test]
    async fn test_init_demo_creates_all_tables() {
        let pool = create_pool(":memory:").await.expect("pool");
        init_demo(&pool).await.expect("init");
        init_demo(&pool).await.expect("idempotent");

        let counts = table_counts(&pool).await.expect("counts");
        let mut names: Vec<&str> = counts.iter().map(|c| c.table.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["customers", "orders", "products"]);
    }

    #[tokio::test]
    async fn test_rating_check_constraint_rejects_out_of_range() {
        let pool = create_pool(":memory:").await.expect("pool");
        init_store(&pool).await.expect("init");

        let result = sqlx::query(
            "INSERT INTO Reviews (CustomerID, ProductID, Rating, Comment) VALUES (1, 1, 9, 'x')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err());
    }
}
