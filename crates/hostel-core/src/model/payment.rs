//! Payment records reported by the external payment system.

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// Cash at the bursary.
    Cash,
    /// Bank transfer.
    BankTransfer,
    /// Online payment portal.
    Online,
    /// Card payment.
    Card,
}

/// Processing status of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Reported but not yet confirmed.
    Pending,
    /// Cleared; counts towards the payment gate.
    Confirmed,
    /// Rejected by the processor.
    Failed,
}

/// One payment reported for a student.
///
/// The engine stores these verbatim and never validates authenticity; a
/// student passes the payment gate iff at least one of their records is
/// [`PaymentStatus::Confirmed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRecord<I> {
    /// Payment id assigned by the processor, e.g. `PAY001`.
    pub id: String,
    /// Matric number the payment is for.
    pub student_id: String,
    /// Amount, in the smallest currency unit.
    pub amount: u64,
    /// How the payment was made.
    pub method: PaymentMethod,
    /// Processing status.
    pub status: PaymentStatus,
    /// Processor transaction reference.
    pub transaction_reference: String,
    /// When the record was appended to the desk.
    pub recorded_at: I,
    /// Free-form description.
    pub description: String,
}
