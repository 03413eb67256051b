use stakingtypecrate::types::Pubkey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    #[error("Insufficient funds: {available} available, {requested} requested")]
    InsufficientFunds { available: u64, requested: u64 },
    #[error("Transfer rejected: {0}")]
    Rejected(String),
}

/// Moves fungible units between the campaign pool and an outside holder.
///
/// A failed transfer must leave both sides untouched: the ledger treats any error as a total
/// abort of the operation that requested it.
pub trait ValueTransferPort {
    /// Pull `amount` from `from` into the pool.
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<(), TransferError>;

    /// Push `amount` from the pool to `to`.
    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<(), TransferError>;
}

impl<T: ValueTransferPort + ?Sized> ValueTransferPort for &mut T {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<(), TransferError> {
        (**self).transfer_in(from, amount)
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<(), TransferError> {
        (**self).transfer_out(to, amount)
    }
}

impl<T: ValueTransferPort + ?Sized> ValueTransferPort for Box<T> {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<(), TransferError> {
        (**self).transfer_in(from, amount)
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<(), TransferError> {
        (**self).transfer_out(to, amount)
    }
}
