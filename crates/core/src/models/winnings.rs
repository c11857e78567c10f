use crate::prelude::*;

/// `event Withdrawal(address indexed user, uint256 amount)`
pub const WITHDRAWAL_EVENT_SIGNATURE: &str = "Withdrawal(address,uint256)";

pub fn withdrawal_topic() -> EthHash {
    EthHash::keccak(WITHDRAWAL_EVENT_SIGNATURE)
}

/// A decoded `Withdrawal` log.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Withdrawal {
    #[getset(get = "pub")]
    amount: U256,

    #[getset(get = "pub")]
    block_number: Option<u64>,
}

impl Withdrawal {
    pub fn new(amount: U256, block_number: Option<u64>) -> Self {
        Self {
            amount,
            block_number,
        }
    }

    /// Reads `amount`, the only non-indexed field, from the first data word.
    pub fn decode(log: &EthLog) -> Result<Self, ScanError> {
        let amount = log
            .data_word(0)
            .ok_or(ScanError::MalformedWithdrawalLog {
                block: *log.block_number(),
                len: log.data().len(),
            })?;
        Ok(Self::new(amount, *log.block_number()))
    }
}

/// Total claimed winnings of one wallet.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct WinningsSummary {
    #[getset(get = "pub")]
    user: EthAccountId,

    /// In wei.
    #[getset(get = "pub")]
    total: U256,

    #[getset(get = "pub")]
    withdrawals: usize,

    #[getset(get = "pub")]
    chunks_scanned: usize,

    /// `None` when the deployment block is past the chain head.
    #[getset(get = "pub")]
    range: Option<BlockRange>,
}

impl WinningsSummary {
    pub fn empty(user: EthAccountId, range: Option<BlockRange>) -> Self {
        Self {
            user,
            total: U256::zero(),
            withdrawals: 0,
            chunks_scanned: 0,
            range,
        }
    }

    pub(crate) fn add_chunk(&mut self, withdrawals: impl IntoIterator<Item = Withdrawal>) {
        self.chunks_scanned += 1;
        for withdrawal in withdrawals {
            self.total = self.total.saturating_add(withdrawal.amount);
            self.withdrawals += 1;
        }
    }

    pub fn total_ether(&self) -> String {
        format_ether(self.total)
    }

    /// Total with a fixed number of decimals followed by the currency symbol,
    /// `"1.2346 AVAX"`.
    pub fn display_total(&self, places: usize, symbol: &str) -> String {
        format!("{} {symbol}", format_ether_fixed(self.total, places))
    }
}
