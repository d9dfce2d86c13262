use crate::error::FunnelError;

pub type FunnelResult<T> = Result<T, FunnelError>;
