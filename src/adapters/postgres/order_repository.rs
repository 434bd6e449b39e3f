//! PostgreSQL implementation of OrderRepository.
//!
//! Orders live in `payment_orders` (see `migrations/`). Finalization is a
//! single conditional `UPDATE ... WHERE status = 'pending'`, so concurrent
//! IPN deliveries for one reference cannot both apply.

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::order::{Order, PaymentStatus, TransactionDetails};
use crate::domain::vnpay::Amount;
use crate::ports::{FinalizeResult, OrderRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const SELECT_COLUMNS: &str = r#"
    SELECT reference, merchant_order_id, amount_minor, description, status, payment_method,
           response_code, transaction_no, bank_code, bank_tran_no, card_type, pay_date,
           created_at, updated_at
    FROM payment_orders
"#;

/// PostgreSQL implementation of the OrderRepository port.
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an order.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    reference: String,
    merchant_order_id: String,
    amount_minor: i64,
    description: String,
    status: String,
    payment_method: String,
    response_code: Option<String>,
    transaction_no: Option<String>,
    bank_code: Option<String>,
    bank_tran_no: Option<String>,
    card_type: Option<String>,
    pay_date: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = DomainError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status)?;
        let amount = u64::try_from(row.amount_minor)
            .ok()
            .and_then(Amount::from_gateway_units)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid amount_minor value: {}", row.amount_minor),
                )
            })?;

        // Transaction details exist only once the order is settled.
        let transaction = match (status, row.response_code) {
            (PaymentStatus::Pending, _) => None,
            (_, response_code) => Some(TransactionDetails {
                response_code: response_code.unwrap_or_default(),
                transaction_no: row.transaction_no,
                bank_code: row.bank_code,
                bank_tran_no: row.bank_tran_no,
                card_type: row.card_type,
                pay_date: row.pay_date,
            }),
        };

        Ok(Order {
            reference: row.reference,
            merchant_order_id: row.merchant_order_id,
            amount,
            description: row.description,
            status,
            payment_method: row.payment_method,
            transaction,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn parse_status(s: &str) -> Result<PaymentStatus, DomainError> {
    s.to_lowercase().parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )
    })
}

fn amount_to_db(amount: Amount) -> Result<i64, DomainError> {
    i64::try_from(amount.gateway_units()).map_err(|_| {
        DomainError::validation("amount", format!("Amount {} exceeds storage range", amount))
    })
}

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn save(&self, order: &Order) -> Result<(), DomainError> {
        let details = order.transaction.clone().unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO payment_orders (
                reference, merchant_order_id, amount_minor, description, status, payment_method,
                response_code, transaction_no, bank_code, bank_tran_no, card_type, pay_date,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(&order.reference)
        .bind(&order.merchant_order_id)
        .bind(amount_to_db(order.amount)?)
        .bind(&order.description)
        .bind(order.status.as_str())
        .bind(&order.payment_method)
        .bind(Some(details.response_code).filter(|c| !c.is_empty()))
        .bind(details.transaction_no)
        .bind(details.bank_code)
        .bind(details.bank_tran_no)
        .bind(details.card_type)
        .bind(details.pay_date)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("payment_orders_pkey") {
                    return DomainError::new(
                        ErrorCode::DuplicateOrder,
                        format!("Order {} already exists", order.reference),
                    )
                    .with_detail("reference", order.reference.clone());
                }
            }
            db_error("save order", e)
        })?;

        Ok(())
    }

    async fn find_by_reference(&self, reference: &str) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> =
            sqlx::query_as(&format!("{} WHERE reference = $1", SELECT_COLUMNS))
                .bind(reference)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("find order", e))?;

        row.map(Order::try_from).transpose()
    }

    async fn find_latest_by_merchant_order(
        &self,
        merchant_order_id: &str,
    ) -> Result<Option<Order>, DomainError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "{} WHERE merchant_order_id = $1 ORDER BY created_at DESC, reference DESC LIMIT 1",
            SELECT_COLUMNS
        ))
        .bind(merchant_order_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("find order", e))?;

        row.map(Order::try_from).transpose()
    }

    async fn finalize(&self, order: &Order) -> Result<FinalizeResult, DomainError> {
        let details = order.transaction.clone().unwrap_or_default();

        let result = sqlx::query(
            r#"
            UPDATE payment_orders SET
                status = $2,
                response_code = $3,
                transaction_no = $4,
                bank_code = $5,
                bank_tran_no = $6,
                card_type = $7,
                pay_date = $8,
                updated_at = $9
            WHERE reference = $1 AND status = 'pending'
            "#,
        )
        .bind(&order.reference)
        .bind(order.status.as_str())
        .bind(details.response_code)
        .bind(details.transaction_no)
        .bind(details.bank_code)
        .bind(details.bank_tran_no)
        .bind(details.card_type)
        .bind(details.pay_date)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("finalize order", e))?;

        if result.rows_affected() > 0 {
            return Ok(FinalizeResult::Applied);
        }

        // Nothing updated: either finalized already or the row is gone.
        let exists: Option<(String,)> =
            sqlx::query_as("SELECT status FROM payment_orders WHERE reference = $1")
                .bind(&order.reference)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("finalize order", e))?;

        match exists {
            Some(_) => Ok(FinalizeResult::AlreadyFinalized),
            None => Err(DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order {} not found", order.reference),
            )
            .with_detail("reference", order.reference.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(status: &str, amount_minor: i64) -> OrderRow {
        let now = Utc::now();
        OrderRow {
            reference: "ORD11700000000000".to_string(),
            merchant_order_id: "ORD-1".to_string(),
            amount_minor,
            description: "Don hang".to_string(),
            status: status.to_string(),
            payment_method: "vnpay".to_string(),
            response_code: Some("00".to_string()),
            transaction_no: Some("14123456".to_string()),
            bank_code: Some("NCB".to_string()),
            bank_tran_no: None,
            card_type: Some("ATM".to_string()),
            pay_date: Some("20240305091500".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn parse_status_works_for_all_values() {
        assert_eq!(parse_status("pending").unwrap(), PaymentStatus::Pending);
        assert_eq!(parse_status("paid").unwrap(), PaymentStatus::Paid);
        assert_eq!(parse_status("FAILED").unwrap(), PaymentStatus::Failed);
    }

    #[test]
    fn parse_status_rejects_invalid_values() {
        assert!(parse_status("refunded").is_err());
        assert!(parse_status("").is_err());
    }

    #[test]
    fn paid_row_converts_with_transaction() {
        let order = Order::try_from(row("paid", 5_000_000)).unwrap();

        assert_eq!(order.status, PaymentStatus::Paid);
        assert_eq!(order.amount.gateway_units(), 5_000_000);
        assert_eq!(order.transaction_no(), Some("14123456"));
    }

    #[test]
    fn pending_row_has_no_transaction() {
        let order = Order::try_from(row("pending", 5_000_000)).unwrap();
        assert!(order.transaction.is_none());
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        assert!(Order::try_from(row("pending", 0)).is_err());
        assert!(Order::try_from(row("pending", -100)).is_err());
    }

    #[test]
    fn amount_to_db_round_trips() {
        let amount = Amount::from_major(250_000).unwrap();
        assert_eq!(amount_to_db(amount).unwrap(), 25_000_000);
    }
}
