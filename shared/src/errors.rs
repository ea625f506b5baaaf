use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,
    Unauthorized = 3,
    InvInput = 4,
    NotFound = 5,
    Overflow = 6,

    // Ledger errors
    InsufBalance = 7,
    Blacklisted = 8,
    TxLimitHit = 9,
    FeeTooHigh = 10,
    TxLimitLow = 11,
    WindowNotFut = 12,

    // Distributor errors
    TooSoon = 13,
    BelowMinPay = 14,
    NoSource = 15,

    // Sale errors
    TooEarly = 16,
    TooLate = 17,
    SaleClosed = 18,
    NotWhitelisted = 19,
    BelowMinCommit = 20,
    AboveMaxCommit = 21,
    HardcapHit = 22,
    AlreadyClosed = 23,
    CannotClose = 24,
    SaleNotClosed = 25,
    CapNotMet = 26,
    NothingToClaim = 27,
    EndNotPassed = 28,
    SoftcapMet = 29,
    SaleIsClosed = 30,
    NothingToRelease = 31,
    InvSchedule = 32,
    InvPrice = 33,
    SaleStarted = 34,
}
