use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum SaleError {
    /// Caller lacks authority, or the investor is not whitelisted.
    Unauthorized = 1,
    /// Non-positive amount, wrong asset, or a malformed configuration.
    InvalidInput = 2,
    /// Investor's cumulative contribution falls outside the configured bounds.
    ContributionOutOfBounds = 3,
    /// The deposit would push the campaign past its hard cap.
    CapacityExceeded = 4,
    /// Operation does not fit the current lifecycle phase.
    InvalidState = 5,
    /// Sale window still open and hard cap not reached.
    NotYetEligible = 6,
    NothingToRefund = 7,
    AlreadyFinalized = 8,
    NothingToClaim = 9,
    ArithmeticOverflow = 10,
    /// A payout could not be honoured by the sink.
    PayoutRejected = 11,
}
