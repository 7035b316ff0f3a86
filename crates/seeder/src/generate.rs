//! Pseudo-random sample data for the store schema.
//!
//! All randomness flows through a caller-supplied [`Rng`], so tests can pass a
//! seeded generator and the CLI can pass the thread rng. Selection pools
//! (cities, categories, payment methods, review comments) and numeric bounds
//! are fixed constants.
//!
//! Foreign-key columns are [`WeakRef`]s: an id drawn uniformly from the
//! configured range of the referenced table, never checked for existence. A
//! draw can point at a row that a uniqueness conflict dropped.

use chrono::NaiveDate;
use rand::Rng;

use datascout_core::{
    CategoryId, CustomerId, OrderId, PaymentMethod, ProductId, Rating, WeakRef,
};

/// Default per-table row target for the store database.
pub const DEFAULT_ROWS: u32 = 70;

/// Epoch that order and payment dates are offset from.
pub const DATE_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2024, 1, 1) {
    Some(date) => date,
    None => panic!("2024-01-01 is a valid date"),
};

/// Uniform day-offset range added to [`DATE_EPOCH`].
pub const DATE_OFFSET_DAYS: std::ops::RangeInclusive<i64> = 1..=90;

/// Uniform product price bounds.
pub const PRICE_BOUNDS: std::ops::RangeInclusive<f64> = 50.0..=2000.0;

/// Uniform order total bounds.
pub const ORDER_TOTAL_BOUNDS: std::ops::RangeInclusive<f64> = 100.0..=5000.0;

/// Cities customers are assigned to.
pub const CITIES: [&str; 10] = [
    "New York",
    "Los Angeles",
    "Chicago",
    "San Francisco",
    "Seattle",
    "Boston",
    "Denver",
    "Austin",
    "Miami",
    "Dallas",
];

/// The fixed product category list. Categories are not randomized.
pub const CATEGORY_NAMES: [&str; 10] = [
    "Electronics",
    "Appliances",
    "Furniture",
    "Clothing",
    "Books",
    "Toys",
    "Gaming",
    "Fitness",
    "Beauty",
    "Groceries",
];

/// Review comments the generator samples from.
pub const REVIEW_COMMENTS: [&str; 5] = [
    "Great product!",
    "Not satisfied.",
    "Value for money.",
    "Would buy again.",
    "Poor quality.",
];

/// Full names for the first ten customers; the rest are `Customer_N`.
const NAMED_CUSTOMERS: [&str; 10] = [
    "Alice Johnson",
    "Bob Smith",
    "Charlie Brown",
    "David Lee",
    "Emma Wilson",
    "Frank White",
    "Grace Hall",
    "Hannah Scott",
    "Ian Taylor",
    "Jackie Moore",
];

/// A customer row awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub city: String,
}

/// A product row awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub category_id: WeakRef<CategoryId>,
}

/// An order row awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: WeakRef<CustomerId>,
    pub date: NaiveDate,
    pub total: f64,
}

/// An order line item awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewOrderDetail {
    pub order_id: WeakRef<OrderId>,
    pub product_id: WeakRef<ProductId>,
    pub quantity: i64,
}

/// A payment row awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub order_id: WeakRef<OrderId>,
    pub date: NaiveDate,
    pub amount: f64,
    pub method: PaymentMethod,
}

/// A shipper row awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewShipper {
    pub name: String,
    pub phone: String,
}

/// A review row awaiting insertion.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub customer_id: WeakRef<CustomerId>,
    pub product_id: WeakRef<ProductId>,
    pub rating: Rating,
    pub comment: String,
}

/// One generated batch of sample data for every store table.
#[derive(Debug, Clone)]
pub struct SampleSet {
    pub customers: Vec<NewCustomer>,
    pub categories: Vec<&'static str>,
    pub products: Vec<NewProduct>,
    pub orders: Vec<NewOrder>,
    pub order_details: Vec<NewOrderDetail>,
    pub payments: Vec<NewPayment>,
    pub shippers: Vec<NewShipper>,
    pub reviews: Vec<NewReview>,
}

impl SampleSet {
    /// Generate `rows` rows per table (categories stay at their fixed ten).
    ///
    /// Payment amounts reuse the generated order totals by index; payment
    /// order ids are drawn independently.
    pub fn generate(rng: &mut impl Rng, rows: u32) -> Self {
        let customers = customers(rng, rows);
        let products = products(rng, rows);
        let orders = orders(rng, rows);
        let payments = payments(rng, &orders);

        Self {
            customers,
            categories: CATEGORY_NAMES.to_vec(),
            products,
            order_details: order_details(rng, rows),
            payments,
            orders,
            shippers: shippers(rows),
            reviews: reviews(rng, rows),
        }
    }
}

/// Draw a date in the seeded window.
fn random_date(rng: &mut impl Rng) -> NaiveDate {
    DATE_EPOCH + chrono::Duration::days(rng.random_range(DATE_OFFSET_DAYS))
}

/// Pick an element of a fixed, non-empty pool.
fn pick<'a>(rng: &mut impl Rng, pool: &'a [&'static str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn customer_name(index: u32) -> String {
    NAMED_CUSTOMERS
        .get(index as usize)
        .map_or_else(|| format!("Customer_{}", index + 1), ToString::to_string)
}

fn customers(rng: &mut impl Rng, rows: u32) -> Vec<NewCustomer> {
    (0..rows)
        .map(|i| {
            let name = customer_name(i);
            // First word of the name, lowercased. For "Customer_N" names the
            // whole name is the first word, so emails stay unique.
            let local = name
                .split_whitespace()
                .next()
                .unwrap_or(&name)
                .to_lowercase();
            NewCustomer {
                email: format!("{local}@example.com"),
                city: pick(rng, &CITIES).to_string(),
                name,
            }
        })
        .collect()
}

fn products(rng: &mut impl Rng, rows: u32) -> Vec<NewProduct> {
    let category_count = CATEGORY_NAMES.len() as i64;
    (1..=rows)
        .map(|i| NewProduct {
            name: format!("Product_{i}"),
            price: rng.random_range(PRICE_BOUNDS),
            category_id: WeakRef::new(CategoryId::new(rng.random_range(1..=category_count))),
        })
        .collect()
}

fn orders(rng: &mut impl Rng, rows: u32) -> Vec<NewOrder> {
    let customer_range = 1..=i64::from(rows);
    (0..rows)
        .map(|_| NewOrder {
            customer_id: WeakRef::new(CustomerId::new(rng.random_range(customer_range.clone()))),
            date: random_date(rng),
            total: rng.random_range(ORDER_TOTAL_BOUNDS),
        })
        .collect()
}

fn order_details(rng: &mut impl Rng, rows: u32) -> Vec<NewOrderDetail> {
    let id_range = 1..=i64::from(rows);
    (0..rows)
        .map(|_| NewOrderDetail {
            order_id: WeakRef::new(OrderId::new(rng.random_range(id_range.clone()))),
            product_id: WeakRef::new(ProductId::new(rng.random_range(id_range.clone()))),
            quantity: rng.random_range(1..=5),
        })
        .collect()
}

fn payments(rng: &mut impl Rng, orders: &[NewOrder]) -> Vec<NewPayment> {
    let order_range = 1..=orders.len() as i64;
    orders
        .iter()
        .map(|order| NewPayment {
            order_id: WeakRef::new(OrderId::new(rng.random_range(order_range.clone()))),
            date: random_date(rng),
            amount: order.total,
            method: PaymentMethod::ALL[rng.random_range(0..PaymentMethod::ALL.len())],
        })
        .collect()
}

fn shippers(rows: u32) -> Vec<NewShipper> {
    (1..=rows)
        .map(|i| NewShipper {
            name: format!("Shipper_{i}"),
            phone: format!("98765{i:04}"),
        })
        .collect()
}

fn reviews(rng: &mut impl Rng, rows: u32) -> Vec<NewReview> {
    let id_range = 1..=i64::from(rows);
    (0..rows)
        .map(|_| NewReview {
            customer_id: WeakRef::new(CustomerId::new(rng.random_range(id_range.clone()))),
            product_id: WeakRef::new(ProductId::new(rng.random_range(id_range.clone()))),
            rating: Rating::clamped(rng.random_range(Rating::MIN..=Rating::MAX)),
            comment: pick(rng, &REVIEW_COMMENTS).to_string(),
        })
        .collect()
}
