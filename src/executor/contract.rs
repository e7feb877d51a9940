//! Simulate and submit paths

use stellar_xdr::curr::{ScAddress, ScError, ScVal};
use tracing::{debug, info, warn};

use crate::error::Error;
use crate::keypair::Keypair;
use crate::rpc::protocol::{SendTransactionRequest, SimulateTransactionRequest};
use crate::signing::sign_transaction;
use crate::tx_builder::{build_invocation_tx, into_envelope};
use crate::types::SourceAccount;
use crate::wire;

use super::Executor;

impl Executor {
    /// Dry-run `function_name` on the contract at `contract_address` and
    /// decode its return value.
    ///
    /// The transaction is built but never signed; simulation consumes no fee
    /// and needs no authorization. Returns `Ok(None)` when the function
    /// returns nothing. A response carrying anything but exactly one result
    /// fails with [`Error::UnexpectedResultCount`] before any decoding.
    pub async fn simulate_contract_call(
        &self,
        contract_address: &ScAddress,
        source_account: &SourceAccount,
        args: Vec<ScVal>,
        function_name: &str,
    ) -> Result<Option<ScVal>, Error> {
        let tx = build_invocation_tx(
            contract_address,
            source_account,
            args,
            function_name,
            self.base_fee,
        )?;
        let transaction = wire::to_base64(&into_envelope(tx))?;

        let response = self
            .rpc
            .simulate_transaction(SimulateTransactionRequest { transaction })
            .await?;

        if let Some(error) = &response.error {
            warn!(error = %error, "simulation reported an error");
        }
        if response.results.len() != 1 {
            return Err(Error::UnexpectedResultCount {
                count: response.results.len(),
            });
        }

        match &response.results[0].xdr {
            Some(encoded) => Ok(Some(wire::from_base64(encoded)?)),
            None => Ok(None),
        }
    }

    /// Build, sign, and submit an invocation, returning the network's
    /// transaction hash.
    ///
    /// Key pairs sign in the order supplied, all against
    /// `network_passphrase`. A response carrying a rejection payload fails
    /// with [`Error::ContractExecution`]; a failure below the protocol layer
    /// fails with [`Error::Transport`] and leaves the outcome unknown.
    /// Nothing is retried here: resubmitting a transaction that may have
    /// landed risks double execution.
    pub async fn submit_contract_call(
        &self,
        contract_address: &ScAddress,
        source_account: &SourceAccount,
        args: Vec<ScVal>,
        function_name: &str,
        network_passphrase: &str,
        signing_keypairs: &[Keypair],
    ) -> Result<String, Error> {
        debug!(
            contract = ?contract_address,
            function = function_name,
            "building invocation transaction"
        );
        let tx = build_invocation_tx(
            contract_address,
            source_account,
            args,
            function_name,
            self.base_fee,
        )?;

        debug!(keypairs = signing_keypairs.len(), "signing transaction");
        let envelope = sign_transaction(&tx, network_passphrase, signing_keypairs)?;
        let transaction = wire::to_base64(&envelope)?;

        debug!("sending transaction");
        let response = self
            .rpc
            .send_transaction(SendTransactionRequest { transaction })
            .await?;

        if let Some(error_result) = response
            .error_result_xdr
            .as_deref()
            .filter(|encoded| !encoded.is_empty())
        {
            warn!(
                error_result_xdr = error_result,
                status = %response.status,
                "transaction rejected"
            );
            let error: ScError = wire::from_base64(error_result)?;
            return Err(Error::ContractExecution { error });
        }

        info!(hash = %response.hash, status = %response.status, "transaction sent");
        Ok(response.hash)
    }
}
