use staking::ports::{TransferError, ValueTransferPort};
use stakingtypecrate::types::Pubkey;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

#[derive(Debug, Default)]
struct TokenLedgerState {
    balances: HashMap<Pubkey, u64>,
    pool: u64,
    fail_next: Option<TransferError>,
    transfers: usize,
}

/// In-memory token balances standing in for the host's token program.
///
/// Cloning yields another handle to the same balances, so the fixture keeps one handle while the
/// engine owns the other.
#[derive(Clone, Debug, Default)]
pub struct TokenLedgerFixture {
    state: Rc<RefCell<TokenLedgerState>>,
}

impl TokenLedgerFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint_to(&self, owner: &Pubkey, amount: u64) {
        let mut state = self.state.borrow_mut();
        let balance = state.balances.entry(*owner).or_default();
        *balance = balance.checked_add(amount).unwrap();
    }

    pub fn balance_of(&self, owner: &Pubkey) -> u64 {
        self.state
            .borrow()
            .balances
            .get(owner)
            .copied()
            .unwrap_or_default()
    }

    /// Units held by the staking pool.
    pub fn pool_balance(&self) -> u64 {
        self.state.borrow().pool
    }

    /// Number of transfers that went through.
    pub fn transfer_count(&self) -> usize {
        self.state.borrow().transfers
    }

    /// Make the next transfer, in either direction, fail with `error`.
    pub fn fail_next_transfer(&self, error: TransferError) {
        self.state.borrow_mut().fail_next = Some(error);
    }

    fn take_injected_failure(state: &mut TokenLedgerState) -> Result<(), TransferError> {
        match state.fail_next.take() {
            Some(error) => {
                tracing::debug!("Injected transfer failure: {}", error);
                Err(error)
            }
            None => Ok(()),
        }
    }
}

impl ValueTransferPort for TokenLedgerFixture {
    fn transfer_in(&mut self, from: &Pubkey, amount: u64) -> Result<(), TransferError> {
        let mut state = self.state.borrow_mut();
        Self::take_injected_failure(&mut state)?;

        let available = state.balances.get(from).copied().unwrap_or_default();
        if available < amount {
            return Err(TransferError::InsufficientFunds {
                available,
                requested: amount,
            });
        }
        let pool = state
            .pool
            .checked_add(amount)
            .ok_or_else(|| TransferError::Rejected("pool balance overflow".to_string()))?;

        state.balances.insert(*from, available - amount);
        state.pool = pool;
        state.transfers += 1;

        Ok(())
    }

    fn transfer_out(&mut self, to: &Pubkey, amount: u64) -> Result<(), TransferError> {
        let mut state = self.state.borrow_mut();
        Self::take_injected_failure(&mut state)?;

        if state.pool < amount {
            return Err(TransferError::InsufficientFunds {
                available: state.pool,
                requested: amount,
            });
        }
        let balance = state.balances.get(to).copied().unwrap_or_default();
        let balance = balance
            .checked_add(amount)
            .ok_or_else(|| TransferError::Rejected("recipient balance overflow".to_string()))?;

        state.pool -= amount;
        state.balances.insert(*to, balance);
        state.transfers += 1;

        Ok(())
    }
}
