use soroban_sdk::xdr::ScErrorType;
use soroban_sdk::InvokeError;
use thiserror::Error;

/// Why an invocation on the fork did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Revert {
    #[error("contract error #{0}")]
    Contract(u32),
    #[error("host error: {0}")]
    Host(String),
    #[error("return value could not be converted")]
    Conversion,
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid address `{address}`: {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("unknown environment `{0}`")]
    UnknownEnvironment(String),
    #[error("amount does not fit into i128")]
    AmountOverflow,
    #[error("deployment failed: {0}")]
    Deployment(#[source] Revert),
    #[error("simulation failed: {0}")]
    Simulation(#[source] Revert),
    #[error("impersonation of `{address}` failed: {reason}")]
    Impersonation { address: String, reason: String },
    #[error("transfer failed: {0}")]
    Transfer(#[source] Revert),
    #[error("flash loan call failed: {0}")]
    LoanCall(#[source] Revert),
    #[error("remaining balance {remaining} is not below funding {funding}")]
    Assertion { remaining: i128, funding: i128 },
}

/// Flattens the result of a `try_*` client call.
pub(crate) fn settle<T, C, E>(
    result: Result<Result<T, C>, Result<E, InvokeError>>,
) -> Result<T, Revert>
where
    E: Into<soroban_sdk::Error>,
{
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_)) => Err(Revert::Conversion),
        Err(Ok(err)) => {
            let err: soroban_sdk::Error = err.into();
            if err.is_type(ScErrorType::Contract) {
                Err(Revert::Contract(err.get_code()))
            } else {
                Err(Revert::Host(format!("{err:?}")))
            }
        }
        Err(Err(InvokeError::Contract(code))) => Err(Revert::Contract(code)),
        Err(Err(err)) => Err(Revert::Host(format!("{err:?}"))),
    }
}
