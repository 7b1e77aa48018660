use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum IplogError {
    #[error("unable to resolve hostname '{0}'")]
    NoAddressResolved(/* hostname */ Cow<'static, str>),

    #[error("invalid record id '{0}'")]
    InvalidIdentifier(/* raw input */ String),

    #[error("no record found with id {0}")]
    RecordNotFound(i64),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("invalid configuration '{0}'")]
    InvalidConfig(Cow<'static, str>),

    #[error(transparent)]
    Other(#[from] anyhow::Error), // source and Display delegate to anyhow::Error
}
