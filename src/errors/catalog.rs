//! Message catalog.
//!
//! Every user-facing status message is addressed by a [`MessageCode`].
//! Business logic only ever carries the code; the display string is
//! resolved when a response is rendered.

use serde::{Serialize, Serializer};

/// Symbolic message keys, grouped by domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCode {
    // Authentication
    Unauthorized,
    Forbidden,
    InvalidCredentials,
    InvalidToken,
    UserAlreadyExists,
    UserNotFound,
    RegistrationFailed,
    LoginFailed,

    // Profile
    ProfileFetchFailed,
    ProfileUpdateFailed,

    // Request validation
    ValidationFailed,
    BadRequest,

    // Transactions
    TransactionNotFound,
    TransactionCreateFailed,
    TransactionUpdateFailed,
    TransactionDeleteFailed,
    TransactionFetchFailed,

    // Budgets
    BudgetNotFound,
    BudgetCreateFailed,
    BudgetUpdateFailed,
    BudgetDeleteFailed,
    BudgetFetchFailed,
    BudgetExceeded,

    // Recurring transactions
    RecurringNotFound,
    RecurringCreateFailed,
    RecurringUpdateFailed,
    RecurringDeleteFailed,
    RecurringFetchFailed,

    // Generic
    NotFound,
    DatabaseError,
    InternalError,
}

impl MessageCode {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            MessageCode::Unauthorized => "UNAUTHORIZED",
            MessageCode::Forbidden => "FORBIDDEN",
            MessageCode::InvalidCredentials => "INVALID_CREDENTIALS",
            MessageCode::InvalidToken => "INVALID_TOKEN",
            MessageCode::UserAlreadyExists => "USER_ALREADY_EXISTS",
            MessageCode::UserNotFound => "USER_NOT_FOUND",
            MessageCode::RegistrationFailed => "REGISTRATION_FAILED",
            MessageCode::LoginFailed => "LOGIN_FAILED",
            MessageCode::ProfileFetchFailed => "PROFILE_FETCH_FAILED",
            MessageCode::ProfileUpdateFailed => "PROFILE_UPDATE_FAILED",
            MessageCode::ValidationFailed => "VALIDATION_ERROR",
            MessageCode::BadRequest => "BAD_REQUEST",
            MessageCode::TransactionNotFound => "TRANSACTION_NOT_FOUND",
            MessageCode::TransactionCreateFailed => "TRANSACTION_CREATE_FAILED",
            MessageCode::TransactionUpdateFailed => "TRANSACTION_UPDATE_FAILED",
            MessageCode::TransactionDeleteFailed => "TRANSACTION_DELETE_FAILED",
            MessageCode::TransactionFetchFailed => "TRANSACTION_FETCH_FAILED",
            MessageCode::BudgetNotFound => "BUDGET_NOT_FOUND",
            MessageCode::BudgetCreateFailed => "BUDGET_CREATE_FAILED",
            MessageCode::BudgetUpdateFailed => "BUDGET_UPDATE_FAILED",
            MessageCode::BudgetDeleteFailed => "BUDGET_DELETE_FAILED",
            MessageCode::BudgetFetchFailed => "BUDGET_FETCH_FAILED",
            MessageCode::BudgetExceeded => "BUDGET_EXCEEDED",
            MessageCode::RecurringNotFound => "RECURRING_NOT_FOUND",
            MessageCode::RecurringCreateFailed => "RECURRING_CREATE_FAILED",
            MessageCode::RecurringUpdateFailed => "RECURRING_UPDATE_FAILED",
            MessageCode::RecurringDeleteFailed => "RECURRING_DELETE_FAILED",
            MessageCode::RecurringFetchFailed => "RECURRING_FETCH_FAILED",
            MessageCode::NotFound => "NOT_FOUND",
            MessageCode::DatabaseError => "DATABASE_ERROR",
            MessageCode::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Display string shown to API consumers.
    pub fn message(&self) -> &'static str {
        match self {
            MessageCode::Unauthorized => "Authentication required",
            MessageCode::Forbidden => "Access denied",
            MessageCode::InvalidCredentials => "Invalid email or password",
            MessageCode::InvalidToken => "Invalid or expired token",
            MessageCode::UserAlreadyExists => "User already exists",
            MessageCode::UserNotFound => "User not found",
            MessageCode::RegistrationFailed => "Failed to register user",
            MessageCode::LoginFailed => "Failed to log in",
            MessageCode::ProfileFetchFailed => "Failed to fetch profile",
            MessageCode::ProfileUpdateFailed => "Failed to update profile",
            MessageCode::ValidationFailed => "Validation error",
            MessageCode::BadRequest => "Invalid request",
            MessageCode::TransactionNotFound => "Transaction not found",
            MessageCode::TransactionCreateFailed => "Failed to create transaction",
            MessageCode::TransactionUpdateFailed => "Failed to update transaction",
            MessageCode::TransactionDeleteFailed => "Failed to delete transaction",
            MessageCode::TransactionFetchFailed => "Failed to fetch transactions",
            MessageCode::BudgetNotFound => "Budget not found",
            MessageCode::BudgetCreateFailed => "Failed to create budget",
            MessageCode::BudgetUpdateFailed => "Failed to update budget",
            MessageCode::BudgetDeleteFailed => "Failed to delete budget",
            MessageCode::BudgetFetchFailed => "Failed to fetch budgets",
            MessageCode::BudgetExceeded => "Budget limit exceeded",
            MessageCode::RecurringNotFound => "Recurring transaction not found",
            MessageCode::RecurringCreateFailed => "Failed to create recurring transaction",
            MessageCode::RecurringUpdateFailed => "Failed to update recurring transaction",
            MessageCode::RecurringDeleteFailed => "Failed to delete recurring transaction",
            MessageCode::RecurringFetchFailed => "Failed to fetch recurring transactions",
            MessageCode::NotFound => "Resource not found",
            MessageCode::DatabaseError => "A database error occurred",
            MessageCode::InternalError => "An internal error occurred",
        }
    }
}

impl std::fmt::Display for MessageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for MessageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}
