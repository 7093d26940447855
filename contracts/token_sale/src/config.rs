/// Investors processed by one refund call when no limit is given.
pub const DEFAULT_REFUND_LIMIT: u32 = 30;
/// Upper bound on investors processed by one refund call.
pub const MAX_REFUND_LIMIT: u32 = 100;

pub const DEFAULT_QUERY_LIMIT: u32 = 10;
pub const MAX_QUERY_LIMIT: u32 = 30;
