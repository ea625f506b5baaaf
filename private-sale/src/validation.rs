use shared::errors::Error;
use shared::types::Amount;

/// The sale window must keep a strictly positive duration.
pub fn validate_schedule(start_time: u64, end_time: u64) -> Result<(), Error> {
    if start_time >= end_time {
        return Err(Error::InvSchedule);
    }
    Ok(())
}

pub fn validate_caps(
    min_commitment: Amount,
    max_commitment: Amount,
    soft_cap: Amount,
    hard_cap: Amount,
) -> Result<(), Error> {
    if min_commitment < 0 || min_commitment > max_commitment {
        return Err(Error::InvInput);
    }
    if soft_cap < 0 || soft_cap > hard_cap || hard_cap <= 0 {
        return Err(Error::InvInput);
    }
    Ok(())
}

pub fn validate_price(price: Amount) -> Result<(), Error> {
    if price <= 0 {
        return Err(Error::InvPrice);
    }
    Ok(())
}
