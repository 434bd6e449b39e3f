//! Field names and protocol constants fixed by the VNPAY contract.
//!
//! These names are part of the signed payload and must never be renamed.

/// Protocol version sent with every request.
pub const PROTOCOL_VERSION: &str = "2.1.0";

/// Command for payment initiation.
pub const COMMAND_PAY: &str = "pay";

/// Command for transaction status queries.
pub const COMMAND_QUERY: &str = "querydr";

/// The only currency the gateway settles in.
pub const CURRENCY_VND: &str = "VND";

/// Order type used when the caller does not supply one.
pub const DEFAULT_ORDER_TYPE: &str = "other";

/// Locale used when the caller does not supply one.
pub const DEFAULT_LOCALE: &str = "vn";

/// Response code the gateway uses for a successful transaction.
pub const RESPONSE_CODE_SUCCESS: &str = "00";

pub const VERSION: &str = "vnp_Version";
pub const COMMAND: &str = "vnp_Command";
pub const TMN_CODE: &str = "vnp_TmnCode";
pub const LOCALE: &str = "vnp_Locale";
pub const CURR_CODE: &str = "vnp_CurrCode";
pub const TXN_REF: &str = "vnp_TxnRef";
pub const ORDER_INFO: &str = "vnp_OrderInfo";
pub const ORDER_TYPE: &str = "vnp_OrderType";
pub const AMOUNT: &str = "vnp_Amount";
pub const RETURN_URL: &str = "vnp_ReturnUrl";
pub const IP_ADDR: &str = "vnp_IpAddr";
pub const CREATE_DATE: &str = "vnp_CreateDate";
pub const BANK_CODE: &str = "vnp_BankCode";
pub const TRANSACTION_DATE: &str = "vnp_TransactionDate";

// Callback-only fields
pub const RESPONSE_CODE: &str = "vnp_ResponseCode";
pub const TRANSACTION_NO: &str = "vnp_TransactionNo";
pub const TRANSACTION_STATUS: &str = "vnp_TransactionStatus";
pub const BANK_TRAN_NO: &str = "vnp_BankTranNo";
pub const CARD_TYPE: &str = "vnp_CardType";
pub const PAY_DATE: &str = "vnp_PayDate";

/// Hex-encoded HMAC-SHA512 of the canonical string.
pub const SECURE_HASH: &str = "vnp_SecureHash";

/// Optional hash algorithm marker sent on callbacks; never signed.
pub const SECURE_HASH_TYPE: &str = "vnp_SecureHashType";

/// Fields excluded from the canonical string when signing or verifying.
pub const SIGNATURE_FIELDS: [&str; 2] = [SECURE_HASH, SECURE_HASH_TYPE];

/// Timestamp layout used by `vnp_CreateDate`, `vnp_PayDate` and
/// `vnp_TransactionDate` (`yyyyMMddHHmmss`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
